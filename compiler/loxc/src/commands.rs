//! File and prompt modes.

use std::io::{self, Write};
use std::path::Path;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info};

use crate::render::{render_tokens, report_errors};
use crate::{CliError, RunOptions};

/// Interactive prompt string.
pub const PROMPT: &str = "> ";

/// Scan one chunk of source and write its tokens and errors.
///
/// Returns `true` if the source had lexical errors.
pub fn run_source(
    source: &str,
    options: RunOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool, CliError> {
    let output = lox_lexer::scan(source);
    if !options.quiet {
        render_tokens(&output.tokens, options.format, out)?;
        out.flush()?;
    }
    report_errors(&output.errors, err)?;
    Ok(output.has_errors())
}

/// Scan a whole file to stdout, errors to stderr.
///
/// Returns `true` if the file had lexical errors.
#[tracing::instrument(level = "info", skip(options))]
pub fn run_file(path: &Path, options: RunOptions) -> Result<bool, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!(bytes = source.len(), "read source");

    let stdout = io::stdout();
    let stderr = io::stderr();
    run_source(&source, options, &mut stdout.lock(), &mut stderr.lock())
}

/// Read-scan-print loop over stdin, one line at a time.
///
/// Each line is scanned on its own, so an error on one line never carries
/// over to the next. Ctrl-C drops the current line; Ctrl-D ends the session.
pub fn run_prompt(options: RunOptions) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;
    let stdout = io::stdout();
    let stderr = io::stderr();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                let had_errors =
                    run_source(&line, options, &mut stdout.lock(), &mut stderr.lock())?;
                debug!(had_errors, "line scanned");
            }
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
