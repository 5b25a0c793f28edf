//! Scanner for Lox.
//!
//! Turns a complete source string into a [`TokenList`] in one left-to-right
//! pass, collecting [`LexError`]s along the way instead of stopping at them.
//!
//! # Architecture
//!
//! Two layers:
//! 1. **Raw scanning** (`lox_lexer_core`): byte runs tagged with a
//!    [`RawTag`](lox_lexer_core::RawTag), no allocation, no line tracking.
//! 2. **Cooking** (this crate): line numbers, keyword resolution, literal
//!    decoding and error reporting.
//!
//! ```
//! use lox_ir::TokenKind;
//!
//! let output = lox_lexer::scan("var answer = 42;");
//! assert!(!output.has_errors());
//! assert_eq!(
//!     output.tokens.kinds(),
//!     [
//!         TokenKind::Var,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! ```

mod convert;
pub mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexErrorContext, LexErrorKind, LexReplacement, LexSuggestion};
use lox_ir::TokenList;

/// Everything one scan produces.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput {
    /// Never empty; always ends with exactly one `EndOfInput`.
    pub tokens: TokenList,
    /// Lexical errors in source order.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Split into the `(tokens, errors)` pair.
    pub fn into_parts(self) -> (TokenList, Vec<LexError>) {
        (self.tokens, self.errors)
    }
}

/// Scan `source` into tokens.
///
/// Always terminates and never panics. Malformed input is skipped and
/// reported in [`LexOutput::errors`]; the token list is complete either way.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &str) -> LexOutput {
    let output = scanner::Scanner::new(source).scan_tokens();
    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "scan complete"
    );
    output
}
