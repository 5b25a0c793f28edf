//! Raw tag to token kind conversion for fixed-spelling tokens.

use lox_ir::TokenKind;
use lox_lexer_core::RawTag;

/// Kind for tags whose lexeme is a fixed spelling.
///
/// Returns `None` for literals, trivia, errors and `Eof`; the scanner
/// handles each of those itself.
pub(crate) fn fixed_kind(tag: RawTag) -> Option<TokenKind> {
    let kind = match tag {
        RawTag::LeftParen => TokenKind::LeftParen,
        RawTag::RightParen => TokenKind::RightParen,
        RawTag::LeftBrace => TokenKind::LeftBrace,
        RawTag::RightBrace => TokenKind::RightBrace,
        RawTag::Comma => TokenKind::Comma,
        RawTag::Dot => TokenKind::Dot,
        RawTag::Minus => TokenKind::Minus,
        RawTag::Plus => TokenKind::Plus,
        RawTag::Semicolon => TokenKind::Semicolon,
        RawTag::Slash => TokenKind::Slash,
        RawTag::Star => TokenKind::Star,
        RawTag::Bang => TokenKind::Bang,
        RawTag::BangEqual => TokenKind::BangEqual,
        RawTag::Equal => TokenKind::Equal,
        RawTag::EqualEqual => TokenKind::EqualEqual,
        RawTag::Greater => TokenKind::Greater,
        RawTag::GreaterEqual => TokenKind::GreaterEqual,
        RawTag::Less => TokenKind::Less,
        RawTag::LessEqual => TokenKind::LessEqual,
        RawTag::Ident
        | RawTag::Number
        | RawTag::String
        | RawTag::Whitespace
        | RawTag::Newline
        | RawTag::LineComment
        | RawTag::UnterminatedString
        | RawTag::InvalidChar
        | RawTag::Eof => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests;
