//! Lox IR - shared lexical vocabulary.
//!
//! This crate contains the data the lexer produces and the parser consumes:
//! - Spans for source locations
//! - `TokenKind`, `Literal`, `Token` and `TokenList`
//! - The reserved keyword table
//!
//! Nothing here scans text. The crate is pure data so that downstream
//! tools can depend on it without pulling in the lexer.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
pub mod token;

pub use span::Span;
pub use token::{keywords, Literal, Token, TokenKind, TokenList};
