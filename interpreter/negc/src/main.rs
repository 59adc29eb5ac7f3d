//! Negation Interpreter CLI
//!
//! Single-pass streaming interpreter for the Negation language.

use negc::commands::{check_file, run_file};
use negc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: neg run <file.neg>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: neg check <file.neg>");
                std::process::exit(1);
            }
            check_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Negation Interpreter {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a file path, try to run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("neg"))
            {
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
    println!("Negation Interpreter");
    println!();
    println!("Usage: neg <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.neg>    Interpret a Negation program");
    println!("  check <file.neg>  Interpret a program without printing its output");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Examples:");
    println!("  neg run hello.neg");
    println!("  neg hello.neg            # Bare .neg paths run directly");
    println!("  neg check hello.neg      # Validate without output");
    println!();
    println!("Set RUST_LOG=neg_eval=trace to trace statement dispatch.");
}
