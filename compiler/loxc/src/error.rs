//! Driver failures.
//!
//! Lexical errors are not here: they are ordinary scan output and only
//! affect the exit status.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rustyline::error::ReadlineError;

/// Exit status for source that produced lexical errors (`EX_DATAERR`).
pub const EXIT_LEX_ERRORS: u8 = 65;
/// Exit status for bad command-line usage (`EX_USAGE`).
pub const EXIT_USAGE: u8 = 64;
/// Exit status for an internal failure (`EX_SOFTWARE`).
pub const EXIT_SOFTWARE: u8 = 70;
/// Exit status for failed reads or writes (`EX_IOERR`).
pub const EXIT_IO: u8 = 74;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The source file could not be read.
    #[error("{}", describe_read_error(.path, .source))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing tokens or diagnostics failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
    /// The line editor failed.
    #[error("prompt error: {0}")]
    Prompt(#[from] ReadlineError),
    #[error("cannot serialize token: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Json(_) => ExitCode::from(EXIT_SOFTWARE),
            CliError::Read { .. } | CliError::Output(_) | CliError::Prompt(_) => {
                ExitCode::from(EXIT_IO)
            }
        }
    }
}

fn describe_read_error(path: &Path, error: &io::Error) -> String {
    let path = path.display();
    match error.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {error}"),
    }
}
