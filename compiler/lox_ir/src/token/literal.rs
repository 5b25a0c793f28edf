//! Decoded literal payloads.

use std::fmt;

use serde::Serialize;

/// Decoded value carried by `String` and `Number` tokens.
///
/// Every other token kind carries `None` in [`Token::literal`](super::Token::literal),
/// so "absent" is modelled by the surrounding `Option` rather than a variant.
///
/// Serializes untagged: a JSON string or a JSON number.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    /// String contents with the delimiters stripped.
    String(String),
    /// Numeric value parsed from the lexeme.
    Number(f64),
}

impl Literal {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            Literal::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::String(_) => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => f.write_str(s),
            Literal::Number(n) => write!(f, "{n}"),
        }
    }
}
