//! CLI tool to parse a CoNLL file and output JSON
//!
//! Usage: cargo run --bin conll_to_json <file.conll> [--ignore-double-indices]

use dependency2tree::{parse, ErrorReporter, ParseOptions};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <file.conll> [--ignore-double-indices]", args[0]);
        eprintln!("  Parses a CoNLL file and outputs its sentences as JSON to stdout");
        process::exit(1);
    }

    let filename = &args[1];
    let options = ParseOptions {
        ignore_double_indices: args[2..].iter().any(|a| a == "--ignore-double-indices"),
        ..Default::default()
    };

    let source = match fs::read_to_string(filename) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", filename, e);
            process::exit(1);
        }
    };

    match parse(&source, &options) {
        Ok(doc) => match serde_json::to_string_pretty(&doc) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing document to JSON: {}", e);
                process::exit(1);
            }
        },
        Err(err) => {
            ErrorReporter::new(filename, &source).report_format_error(&err);
            process::exit(1);
        }
    }
}
