//! Command-line surface for wordstats.
//!
//! Usage:
//!   wordstats `<file>` [-c|--count] [-u|--unique]
//!
//! With neither flag the tool prints a prompt plus the help text and
//! exits successfully.

use clap::{Arg, ArgAction, Command};

pub fn build_command() -> Command {
    Command::new("wordstats")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Analyzes a text file: total word count and unique vocabulary size")
        .arg(
            Arg::new("file")
                .help("Path to the text file to analyze")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .short('c')
                .help("Show total word count (tokens)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("unique")
                .long("unique")
                .short('u')
                .help("Show number of unique words (types)")
                .action(ArgAction::SetTrue),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_definition_is_consistent() {
        build_command().debug_assert();
    }

    #[test]
    fn test_flags_parse_in_any_order() {
        let matches = build_command()
            .try_get_matches_from(["wordstats", "-u", "input.txt", "-c"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("file").map(String::as_str),
            Some("input.txt")
        );
        assert!(matches.get_flag("count"));
        assert!(matches.get_flag("unique"));
    }

    #[test]
    fn test_missing_positional_is_an_error() {
        assert!(build_command()
            .try_get_matches_from(["wordstats", "-c"])
            .is_err());
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(build_command()
            .try_get_matches_from(["wordstats", "input.txt", "--frequency"])
            .is_err());
    }
}
