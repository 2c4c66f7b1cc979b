use std::collections::HashSet;

/// Total number of tokens, repeats included.
pub fn total_count(tokens: &[String]) -> usize {
    tokens.len()
}

/// Number of distinct token values (vocabulary size).
pub fn unique_count(tokens: &[String]) -> usize {
    let types: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    types.len()
}
