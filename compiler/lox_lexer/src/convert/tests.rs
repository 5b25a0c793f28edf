use super::*;
use lox_lexer_core::{RawScanner, SourceBuffer};
use pretty_assertions::assert_eq;

#[test]
fn fixed_kinds_match_their_spelling() {
    for source in [
        "(", ")", "{", "}", ",", ".", "-", "+", ";", "/", "*", "!", "!=", "=", "==", ">", ">=",
        "<", "<=",
    ] {
        let buf = SourceBuffer::new(source);
        let raw = RawScanner::new(buf.cursor()).next_token();
        let kind = fixed_kind(raw.tag);
        assert_eq!(kind.and_then(TokenKind::as_str), Some(source), "{source:?}");
    }
}

#[test]
fn variable_tags_have_no_fixed_kind() {
    for tag in [
        RawTag::Ident,
        RawTag::Number,
        RawTag::String,
        RawTag::Whitespace,
        RawTag::Newline,
        RawTag::LineComment,
        RawTag::UnterminatedString,
        RawTag::InvalidChar,
        RawTag::Eof,
    ] {
        assert_eq!(fixed_kind(tag), None, "{tag:?}");
    }
}
