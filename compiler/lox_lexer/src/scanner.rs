//! The cooking scanner: raw byte runs in, tokens and errors out.
//!
//! State is the classic triple: `start` (first byte of the lexeme being
//! built), `current` (next unconsumed byte) and `line`. The raw scanner
//! owns the byte cursor; this layer owns the line counter and all output.

use lox_ir::{keywords, Literal, Span, Token, TokenKind, TokenList};
use lox_lexer_core::{count_newlines, RawScanner, RawTag, SourceBuffer};

use crate::convert::fixed_kind;
use crate::{LexError, LexOutput};

pub(crate) struct Scanner<'a> {
    source: &'a str,
    line: u32,
    tokens: TokenList,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Scanner {
            source,
            line: 1,
            // Roughly one token per five source bytes in typical code.
            tokens: TokenList::with_capacity(source.len() / 5 + 1),
            errors: Vec::new(),
        }
    }

    pub(crate) fn scan_tokens(mut self) -> LexOutput {
        let buffer = SourceBuffer::new(self.source);
        let mut raw = RawScanner::new(buffer.cursor());

        loop {
            let start = raw.pos();
            let tok = raw.next_token();
            let current = start + tok.len;

            match tok.tag {
                RawTag::Eof => break,
                RawTag::Newline => self.line += 1,
                tag if tag.is_trivia() => {}
                RawTag::UnterminatedString => self.unterminated_string(start, current),
                tag if tag.is_error() => self.unexpected_character(start, current),
                RawTag::Ident => self.identifier(start, current),
                RawTag::Number => self.number(start, current),
                RawTag::String => self.string(start, current),
                tag => {
                    if let Some(kind) = fixed_kind(tag) {
                        self.add_token(kind, start, current, None);
                    }
                }
            }
        }

        self.tokens.push(Token::end_of_input(self.line, buffer.len()));

        LexOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Source text for `start..end`.
    ///
    /// Raw token boundaries always fall on character boundaries, so the
    /// empty fallback is never taken.
    #[inline]
    fn slice(&self, start: u32, end: u32) -> &'a str {
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    fn add_token(&mut self, kind: TokenKind, start: u32, end: u32, literal: Option<Literal>) {
        let lexeme = self.slice(start, end);
        self.tokens.push(Token::new(
            kind,
            lexeme,
            literal,
            self.line,
            Span::new(start, end),
        ));
    }

    fn identifier(&mut self, start: u32, end: u32) {
        let kind = keywords::lookup(self.slice(start, end)).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, start, end, None);
    }

    fn number(&mut self, start: u32, end: u32) {
        let lexeme = self.slice(start, end);
        let parsed = lexeme.parse::<f64>();
        // Digits with an optional `.digits` fraction always parse.
        debug_assert!(parsed.is_ok(), "unparseable number lexeme {lexeme:?}");
        let value = parsed.unwrap_or(f64::NAN);
        self.add_token(TokenKind::Number, start, end, Some(Literal::Number(value)));
    }

    fn string(&mut self, start: u32, end: u32) {
        // Strip the delimiters; both are single-byte `"`.
        let value = self.slice(start + 1, end - 1).to_owned();
        self.add_token(TokenKind::String, start, end, Some(Literal::String(value)));
        self.line += count_newlines(self.slice(start, end).as_bytes());
    }

    fn unterminated_string(&mut self, start: u32, end: u32) {
        let start_line = self.line;
        self.line += count_newlines(self.slice(start, end).as_bytes());
        self.report(LexError::unterminated_string(
            Span::new(start, end),
            self.line,
            start_line,
        ));
    }

    fn unexpected_character(&mut self, start: u32, end: u32) {
        let found = self.slice(start, end).chars().next().unwrap_or('\0');
        self.report(LexError::unexpected_character(
            Span::new(start, end),
            self.line,
            found,
        ));
    }

    #[cold]
    fn report(&mut self, error: LexError) {
        tracing::trace!(line = error.line, span = %error.span, "{}", error.kind);
        self.errors.push(error);
    }
}
