use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn number(lexeme: &str, value: f64, line: u32) -> Token {
    Token::new(
        TokenKind::Number,
        lexeme,
        Some(Literal::Number(value)),
        line,
        Span::DUMMY,
    )
}

#[test]
fn end_of_input_shape() {
    let eof = Token::end_of_input(3, 17);
    assert_eq!(eof.kind, TokenKind::EndOfInput);
    assert_eq!(eof.lexeme, "");
    assert_eq!(eof.literal, None);
    assert_eq!(eof.line, 3);
    assert_eq!(eof.span, Span::new(17, 17));
}

#[test]
fn display_includes_literal_when_present() {
    assert_eq!(number("12.5", 12.5, 1).to_string(), "Number 12.5 12.5");

    let string = Token::new(
        TokenKind::String,
        "\"hi\"",
        Some(Literal::String("hi".into())),
        1,
        Span::DUMMY,
    );
    assert_eq!(string.to_string(), "String \"hi\" hi");

    let plus = Token::new(TokenKind::Plus, "+", None, 1, Span::DUMMY);
    assert_eq!(plus.to_string(), "Plus +");
}

#[test]
fn serializes_without_span() {
    let token = number("7", 7.0, 2);
    let value = serde_json::to_value(&token).unwrap();
    assert_eq!(
        value,
        json!({ "kind": "Number", "lexeme": "7", "literal": 7.0, "line": 2 })
    );
}

#[test]
fn absent_literal_serializes_as_null() {
    let token = Token::new(TokenKind::Identifier, "x", None, 1, Span::new(0, 1));
    let value = serde_json::to_value(&token).unwrap();
    assert_eq!(value["literal"], serde_json::Value::Null);
    assert_eq!(value["kind"], "Identifier");
}

#[test]
fn string_literal_serializes_as_plain_string() {
    let token = Token::new(
        TokenKind::String,
        "\"a b\"",
        Some(Literal::String("a b".into())),
        4,
        Span::DUMMY,
    );
    let value = serde_json::to_value(&token).unwrap();
    assert_eq!(value["literal"], "a b");
}

#[test]
fn literal_accessors() {
    let s = Literal::String("x".into());
    let n = Literal::Number(1.5);
    assert_eq!(s.as_str(), Some("x"));
    assert_eq!(s.as_number(), None);
    assert_eq!(n.as_number(), Some(1.5));
    assert_eq!(n.as_str(), None);
}

#[test]
fn kind_spellings() {
    assert_eq!(TokenKind::BangEqual.as_str(), Some("!="));
    assert_eq!(TokenKind::LessEqual.as_str(), Some("<="));
    assert_eq!(TokenKind::Identifier.as_str(), None);
    assert_eq!(TokenKind::EndOfInput.to_string(), "end of input");
    assert_eq!(TokenKind::Slash.to_string(), "/");
    assert!(TokenKind::Number.is_literal());
    assert!(!TokenKind::Number.is_keyword());
    assert!(!TokenKind::Plus.is_literal());
}

#[test]
fn list_serializes_as_array() {
    let list: TokenList = [number("1", 1.0, 1), Token::end_of_input(1, 1)]
        .into_iter()
        .collect();
    let value = serde_json::to_value(&list).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[1]["kind"], "EndOfInput");
}

#[test]
fn list_accessors() {
    let mut list = TokenList::with_capacity(2);
    assert!(list.is_empty());
    list.push(number("1", 1.0, 1));
    list.push(Token::end_of_input(1, 1));
    assert_eq!(list.len(), 2);
    assert_eq!(list.kinds(), vec![TokenKind::Number, TokenKind::EndOfInput]);
    assert_eq!(list[0].lexeme, "1");
    assert_eq!(list.get(5), None);
    assert_eq!(list.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
    assert_eq!((&list).into_iter().count(), 2);
    assert_eq!(list.as_slice().len(), 2);
    assert_eq!(list.into_vec().len(), 2);
}
