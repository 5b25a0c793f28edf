use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

#[test]
fn current_and_peek() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.peek(), 0);
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn peek_at_sentinel_of_full_cache_line() {
    // 63 bytes of source: the sentinel is the last byte of the buffer.
    let source = "1".repeat(63);
    let buf = SourceBuffer::new(&source);
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert!(cursor.is_eof());
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("abc123");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphanumeric());
    assert_eq!(cursor.pos(), 6);
    assert!(cursor.is_eof());
}

#[test]
fn eat_whitespace_includes_carriage_return() {
    let buf = SourceBuffer::new(" \t\r \nx");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn eat_until_newline() {
    let buf = SourceBuffer::new("// hi\nnext");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_hits_eof() {
    let buf = SourceBuffer::new("// no newline");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_quote() {
    let buf = SourceBuffer::new("abc\"def");
    let mut cursor = buf.cursor();
    assert!(cursor.eat_until_quote_or_eof());
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'"');
}

#[test]
fn eat_until_quote_missing() {
    let buf = SourceBuffer::new("abc\ndef");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat_until_quote_or_eof());
    assert!(cursor.is_eof());
}

#[test]
fn utf8_widths() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}

#[test]
fn advance_char_skips_whole_character() {
    let source = "é€😀x";
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 5);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn count_newlines_counts_lf_only() {
    assert_eq!(count_newlines(b""), 0);
    assert_eq!(count_newlines(b"a\nb\r\nc\n"), 3);
    assert_eq!(count_newlines(b"\r\r"), 0);
}

mod proptest_cursor {
    use crate::{count_newlines, SourceBuffer};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn advance_char_walks_char_boundaries(source in "\\PC{0,64}") {
            let buf = SourceBuffer::new(&source);
            let mut cursor = buf.cursor();
            let mut steps = 0;
            while !cursor.is_eof() {
                cursor.advance_char();
                prop_assert!(source.is_char_boundary(cursor.pos() as usize));
                steps += 1;
            }
            prop_assert_eq!(steps, source.chars().count());
        }

        #[test]
        fn count_newlines_matches_naive(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let naive = bytes.iter().filter(|&&b| b == b'\n').count();
            prop_assert_eq!(count_newlines(&bytes) as usize, naive);
        }
    }
}
