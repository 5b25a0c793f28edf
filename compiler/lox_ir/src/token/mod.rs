//! Token types for the Lox lexer.
//!
//! A [`Token`] is created once, when the scanner has fully delimited its
//! lexeme, and is never mutated afterwards. Tokens are owned by the
//! [`TokenList`] the scanner returns.

pub mod keywords;
mod kind;
mod list;
mod literal;

pub use kind::TokenKind;
pub use list::TokenList;
pub use literal::Literal;

use std::fmt;

use serde::Serialize;

use crate::Span;

/// A classified lexeme with its position.
///
/// Serializes as `{ kind, lexeme, literal, line }`; the byte span is a
/// diagnostic aid and is left out of the record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token. Empty for `EndOfInput`.
    pub lexeme: String,
    /// Decoded value; `Some` only for `String` and `Number`.
    pub literal: Option<Literal>,
    /// 1-based line of the token's first character.
    pub line: u32,
    #[serde(skip)]
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: u32,
        span: Span,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// The terminal sentinel, positioned at `offset` on `line`.
    pub fn end_of_input(line: u32, offset: u32) -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            lexeme: String::new(),
            literal: None,
            line,
            span: Span::new(offset, offset),
        }
    }
}

/// Classic one-line rendering: `KIND lexeme [literal]`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {literal}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
