//! Brewin CLI
//!
//! Runs programs the Brewin parser has already turned into JSON documents.

use brewinc::commands::{check_file, run_file};
use brewinc::init_tracing;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let mut trace = false;
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--trace" || arg == "-t" {
                    trace = true;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: brewin run <program.json> [--trace]");
                std::process::exit(1);
            };

            init_tracing(trace);
            run_file(path);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: brewin check <program.json>");
                std::process::exit(1);
            }
            init_tracing(false);
            check_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Brewin {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare document path runs it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            {
                init_tracing(false);
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Brewin interpreter");
    println!();
    println!("Usage: brewin <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <program.json>     Run a parsed Brewin program");
    println!("  check <program.json>   Load a program and list its functions");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Run options:");
    println!("  --trace, -t            Log every executed statement to stderr");
    println!();
    println!("Environment:");
    println!("  RUST_LOG               Log filter, e.g. RUST_LOG=brewin_eval=debug");
    println!();
    println!("Examples:");
    println!("  brewin run hello.json");
    println!("  brewin run loop.json --trace");
    println!("  brewin check overloads.json");
}
