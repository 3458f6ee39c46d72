//! CLI entry point for screenflow
//!
//! Runs the console demo host around the screen controller.

use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "play" => {
            let progress_path = args.get(2).map(PathBuf::from);
            if let Err(err) = screenflow::cli::play::run_play(progress_path) {
                eprintln!("Error: demo failed");
                eprintln!("Reason: {err}");
                process::exit(1);
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        other => {
            eprintln!("Error: Unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("screenflow - screen/menu state machine demo");
    println!();
    println!("USAGE:");
    println!("    cargo run -- play [progress.json]");
    println!();
    println!("COMMANDS:");
    println!("    play [file]    Run the interactive demo; with a file path,");
    println!("                   saved progress persists across runs");
    println!("    --help, -h     Show this help message");
}
