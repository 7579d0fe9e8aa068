//! Sniff CLI
//!
//! `sniff tokens <file>...` prints the enriched token stream of each file.

use std::process::ExitCode;

use sniffc::{dump, init_tracing, tokenize_files, CliError, Options, OutputFormat};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "tokens" => match run_tokens(&args[2..]) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(err) => {
                eprintln!("error: {err}");
                if matches!(err, CliError::Usage(_)) {
                    eprintln!();
                    print_usage();
                }
                ExitCode::FAILURE
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-V" => {
            println!("sniff {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when at least one file could not be tokenized.
fn run_tokens(args: &[String]) -> Result<bool, CliError> {
    let options = Options::parse(args)?;
    let config = options.tokenizer_config()?;
    let dialect = options.dialect()?;

    let mut all_ok = true;
    for outcome in tokenize_files(&options.files, &config, &dialect) {
        match outcome.result {
            Ok(store) => match options.format {
                OutputFormat::Text => print!("{}", dump::to_text(&outcome.path, &store)),
                OutputFormat::Json => println!("{}", dump::to_json(&outcome.path, &store)?),
            },
            Err(err) => {
                all_ok = false;
                eprintln!("error: {err}");
            }
        }
    }
    Ok(all_ok)
}

fn print_usage() {
    println!("Sniff - PHP tokenizer");
    println!();
    println!("Usage: sniff <command> [options]");
    println!();
    println!("Commands:");
    println!("  tokens <file>...   Print the enriched token stream of each file");
    println!("  help               Show this message");
    println!();
    println!("Options for `tokens`:");
    println!("  --json                 Print JSON instead of text");
    println!("  --encoding=<name>      Source encoding: utf-8 (default), iso-8859-1");
    println!("  --tab-width=<n>        Columns per tab stop (default 4, 0 disables)");
    println!("  --config=<file.json>   Tokenizer config");
    println!("  --dialect=<file.json>  Grammar tables (default: bundled PHP)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=sniff_lexer=trace) for tracing output.");
}
