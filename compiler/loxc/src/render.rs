//! Token and diagnostic output.

use std::io::Write;

use lox_ir::{Token, TokenList};
use lox_lexer::LexError;

use crate::{CliError, OutputFormat};

/// Write every token in `format`, one record after another.
pub fn render_tokens(
    tokens: &TokenList,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    for token in tokens {
        render_token(token, format, out)?;
    }
    Ok(())
}

fn render_token(token: &Token, format: OutputFormat, out: &mut impl Write) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(token)?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Debug => {
            writeln!(out, "{token} @ {} (line {})", token.span, token.line)?;
        }
    }
    Ok(())
}

/// Write each error as `[line N] Error: message`.
pub fn report_errors(errors: &[LexError], err: &mut impl Write) -> Result<(), CliError> {
    for error in errors {
        writeln!(err, "{error}")?;
    }
    Ok(())
}
