use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_has_line_prefix() {
    let err = LexError::unexpected_character(Span::new(4, 5), 3, '@');
    assert_eq!(err.to_string(), "[line 3] Error: Unexpected character '@'.");
    assert_eq!(err.message(), "Unexpected character '@'.");
}

#[test]
fn unterminated_string_display() {
    let err = LexError::unterminated_string(Span::new(0, 4), 2, 1);
    assert_eq!(err.to_string(), "[line 2] Error: Unterminated string.");
    assert_eq!(err.context, LexErrorContext::InsideString { start_line: 1 });
}

#[test]
fn control_characters_are_escaped() {
    let err = LexError::unexpected_character(Span::new(0, 1), 1, '\u{7}');
    assert_eq!(err.message(), "Unexpected character '\\u{7}'.");
}

#[test]
fn unexpected_character_suggests_removal() {
    let span = Span::new(10, 11);
    let err = LexError::unexpected_character(span, 1, '#');
    assert_eq!(err.context, LexErrorContext::TopLevel);
    assert_eq!(err.suggestions.len(), 1);
    let replacement = err.suggestions[0].replacement.as_ref().unwrap();
    assert_eq!(replacement.span, span);
    assert_eq!(replacement.text, "");
}

#[test]
fn single_quote_hints_at_double_quotes() {
    let err = LexError::unexpected_character(Span::new(0, 1), 1, '\'');
    assert_eq!(err.suggestions.len(), 2);
    assert!(err.suggestions[1].replacement.is_none());
    assert!(err.suggestions[1].message.contains("double quotes"));
}

#[test]
fn error_equality() {
    let a = LexError::unterminated_string(Span::new(0, 5), 1, 1);
    let b = LexError::unterminated_string(Span::new(0, 5), 1, 1);
    let c = LexError::unexpected_character(Span::new(0, 1), 1, '$');
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn works_as_std_error() {
    let err: Box<dyn std::error::Error> =
        Box::new(LexError::unterminated_string(Span::new(0, 1), 1, 1));
    assert_eq!(err.to_string(), "[line 1] Error: Unterminated string.");
}
