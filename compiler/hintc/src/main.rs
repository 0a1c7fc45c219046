//! Hint front-end CLI.

use hintc::commands::{check_files, lex_file, parse_file};
use hintc::options::CliOptions;

fn main() {
    hintc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" | "parse" | "check" => {
            let options = match CliOptions::parse(&args[2..]) {
                Ok(options) => options,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            };
            if options.paths.is_empty() {
                eprintln!("Usage: hintc {command} <file.hint>");
                std::process::exit(1);
            }
            match command.as_str() {
                "lex" => {
                    for path in &options.paths {
                        lex_file(path);
                    }
                }
                "parse" => {
                    let table = options.predicate_table();
                    let mut failed = false;
                    for path in &options.paths {
                        failed |= parse_file(path, &table);
                    }
                    if failed {
                        std::process::exit(1);
                    }
                }
                _ => {
                    if check_files(&options) {
                        std::process::exit(1);
                    }
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("hintc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Declarative hint front-end");
    println!();
    println!("Usage: hintc <command> [options] <files...>");
    println!();
    println!("Commands:");
    println!("  lex <file.hint>       Tokenize and display tokens");
    println!("  parse <file.hint>     Parse and display the rule table");
    println!("  check <files...>      Parse files in parallel and report diagnostics");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>        auto (default), always, never");
    println!("  --format=<format>     text (default), json");
    println!("  --predicates=<names>  Extra predicate names, comma separated");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=hint_parse=debug hintc parse rules.hint");
}
