use std::fs;

use clap::Parser;
use monkey::{get_result, repl};

/// Monkey is a small, dynamically-typed scripting language with first-class
/// functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Print the value of the last evaluated statement.
    #[arg(short, long)]
    print: bool,

    /// Inline source text, or a path when --file is given. Omit it to start
    /// the interactive prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = repl::start() {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!(
                "Failed to read the input file '{}'. Perhaps this file does not exist?",
                &contents
            );
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = get_result(&script, args.print) {
        eprintln!("{e}");
    }
}
