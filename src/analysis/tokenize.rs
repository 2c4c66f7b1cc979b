/// Normalizes text and splits it into word tokens.
///
/// 1. Lowercases every character with locale-independent Unicode
///    lowercasing, so "The" and "the" count as the same word.
/// 2. Deletes ASCII punctuation (the 32 characters matched by
///    `char::is_ascii_punctuation`) instead of replacing it with a
///    space. Words joined by punctuation with no whitespace collapse
///    into one token: "cat.Dog" becomes "catdog". Documented quirk,
///    kept as-is.
/// 3. Splits on runs of whitespace, dropping empty segments.
///
/// Only ASCII punctuation is stripped. Non-ASCII marks (CJK
/// punctuation, typographic quotes) stay attached to their token; the
/// target languages are space-delimited, so this is a known scope
/// limit rather than something to fix here.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}
