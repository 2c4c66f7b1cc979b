use std::process;

use wordstats::analysis::{tokenize, total_count, unique_count};
use wordstats::cli::build_command;
use wordstats::input::load_file;

fn main() {
    let mut command = build_command();
    let matches = command.clone().get_matches();

    let show_count = matches.get_flag("count");
    let show_unique = matches.get_flag("unique");

    // No action requested: prompt + help, not an error
    if !show_count && !show_unique {
        println!("Please specify at least one action: -c (count) or -u (unique).");
        let _ = command.print_help();
        return;
    }

    let path = matches
        .get_one::<String>("file")
        .expect("file is a required argument");

    let content = load_file(path).unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        process::exit(1);
    });

    let tokens = tokenize(&content);

    if show_count {
        println!("Total Words: {}", total_count(&tokens));
    }
    if show_unique {
        println!("Unique Words: {}", unique_count(&tokens));
    }
}
