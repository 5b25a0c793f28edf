//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Scan Lox source into tokens.
///
/// With `--filepath` the whole file is scanned once. Without it an
/// interactive prompt scans one line at a time.
#[derive(Debug, Parser)]
#[command(name = "lox", version, about)]
pub struct Cli {
    /// Source file to scan. Starts the interactive prompt when omitted.
    #[arg(short = 'f', long, value_name = "PATH")]
    pub filepath: Option<PathBuf>,

    /// How tokens are printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Only report errors; print no tokens.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn options(&self) -> RunOptions {
        RunOptions {
            format: self.format,
            quiet: self.quiet,
        }
    }
}

/// Token rendering format.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One pretty-printed JSON object per token.
    #[default]
    Json,
    /// `KIND lexeme literal @ start..end (line N)` per token.
    Debug,
}

/// Settings shared by file and prompt mode.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RunOptions {
    pub format: OutputFormat,
    pub quiet: bool,
}
