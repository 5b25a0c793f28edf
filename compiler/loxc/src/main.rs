//! `lox`: scan Lox source into tokens.

use std::process::ExitCode;

use clap::Parser;
use loxc::{init_tracing, run_file, run_prompt, Cli, EXIT_LEX_ERRORS, EXIT_USAGE};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let usage_error = e.use_stderr();
            // Help and version also come through here. If stderr is gone
            // there is nowhere left to report the failure.
            let _ = e.print();
            return if usage_error {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing();

    let result = match &cli.filepath {
        Some(path) => run_file(path, cli.options()).map(|had_errors| {
            if had_errors {
                ExitCode::from(EXIT_LEX_ERRORS)
            } else {
                ExitCode::SUCCESS
            }
        }),
        None => run_prompt(cli.options()).map(|()| ExitCode::SUCCESS),
    };

    result.unwrap_or_else(|e| {
        eprintln!("error: {e}");
        e.exit_code()
    })
}
