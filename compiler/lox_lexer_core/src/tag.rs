//! Raw token tags produced by [`RawScanner`](crate::RawScanner).
//!
//! Tags describe byte runs only. Keyword resolution, literal decoding and
//! line numbers are added by the cooking layer in `lox_lexer`.

/// Kind of a raw byte run.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // Single-character punctuation.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character operators.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    /// Letters, digits and `_`, starting with a letter or `_`.
    Ident,
    /// Digits with at most one `.digits` fraction.
    Number,
    /// `"..."` including both delimiters. May span lines.
    String,

    // Trivia.
    /// Run of spaces, tabs and carriage returns.
    Whitespace,
    /// A single `\n`.
    Newline,
    /// `//` up to (not including) the next `\n`.
    LineComment,

    // Errors.
    /// `"` with no closing delimiter; runs to end of input.
    UnterminatedString,
    /// One character that starts no token. Covers a whole UTF-8 character.
    InvalidChar,

    /// End of input. Always `len == 0`.
    Eof,
}

impl RawTag {
    /// True for runs the cooking layer drops without emitting a token.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, RawTag::Whitespace | RawTag::Newline | RawTag::LineComment)
    }

    /// True for runs that must be reported as lexical errors.
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, RawTag::UnterminatedString | RawTag::InvalidChar)
    }
}

/// A raw token: tag plus byte length. Position is implied by the sum of
/// the lengths before it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
