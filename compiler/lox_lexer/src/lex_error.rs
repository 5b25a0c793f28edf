//! Lexer error types.
//!
//! Errors follow the WHERE+WHAT+WHY+HOW shape:
//! - WHERE: `span` and `line` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` explaining what the scanner was doing
//! - HOW: `suggestions` providing actionable fixes
//!
//! Errors never abort a scan. They are collected into
//! [`LexOutput::errors`](crate::LexOutput::errors) and the caller decides
//! whether any of them should block downstream use of the tokens.

use lox_ir::Span;

/// A lexical error with enough context to render a diagnostic.
///
/// `Display` renders the canonical one-line report:
/// `[line {line}] Error: {message}`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("[line {line}] Error: {kind}")]
pub struct LexError {
    /// WHERE the error occurred (bytes).
    pub span: Span,
    /// WHERE the error occurred (1-based line).
    pub line: u32,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY we were checking.
    pub context: LexErrorContext,
    /// HOW to fix.
    pub suggestions: Vec<LexSuggestion>,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("Unexpected character '{}'.", .found.escape_debug())]
    UnexpectedCharacter { found: char },
    /// A `"` whose closing delimiter never appears.
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// Scanning context at the point of error.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Between tokens.
    #[default]
    TopLevel,
    /// Inside a string literal opened on `start_line`.
    InsideString { start_line: u32 },
}

/// Suggestion for fixing a lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    /// Human-readable message describing the fix.
    pub message: String,
    /// Concrete text replacement for auto-fix, if applicable.
    pub replacement: Option<LexReplacement>,
}

/// A concrete text replacement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexReplacement {
    /// The span to replace.
    pub span: Span,
    /// The replacement text.
    pub text: String,
}

impl LexSuggestion {
    /// A text-only suggestion.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
        }
    }

    /// A suggestion that deletes `span`.
    pub fn removal(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            replacement: Some(LexReplacement {
                span,
                text: String::new(),
            }),
        }
    }
}

impl LexError {
    #[cold]
    pub fn unexpected_character(span: Span, line: u32, found: char) -> Self {
        let mut suggestions = vec![LexSuggestion::removal(
            format!("remove `{}`", found.escape_debug()),
            span,
        )];
        if matches!(found, '\'' | '\u{201C}' | '\u{201D}') {
            suggestions.push(LexSuggestion::text(r#"strings use double quotes: "text""#));
        }
        Self {
            span,
            line,
            kind: LexErrorKind::UnexpectedCharacter { found },
            context: LexErrorContext::TopLevel,
            suggestions,
        }
    }

    /// `line` is where scanning stopped; `start_line` is where the
    /// literal was opened.
    #[cold]
    pub fn unterminated_string(span: Span, line: u32, start_line: u32) -> Self {
        Self {
            span,
            line,
            kind: LexErrorKind::UnterminatedString,
            context: LexErrorContext::InsideString { start_line },
            suggestions: vec![LexSuggestion::text("add closing `\"`")],
        }
    }

    /// The message without the `[line N] Error:` prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[cfg(test)]
mod tests;
