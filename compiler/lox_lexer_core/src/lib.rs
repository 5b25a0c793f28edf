//! Low-level scanning layer for the Lox lexer.
//!
//! Splits source text into `(RawTag, len)` pairs without allocating,
//! resolving keywords, decoding literals or tracking lines. Those jobs
//! belong to `lox_lexer`, which drives a [`RawScanner`] and turns its output
//! into tokens and diagnostics.
//!
//! ```
//! use lox_lexer_core::{RawScanner, RawTag, SourceBuffer};
//!
//! let buf = SourceBuffer::new("a != b");
//! let mut scanner = RawScanner::new(buf.cursor());
//! let tags: Vec<RawTag> = std::iter::from_fn(|| {
//!     let tok = scanner.next_token();
//!     (tok.tag != RawTag::Eof).then_some(tok.tag)
//! })
//! .collect();
//! assert_eq!(
//!     tags,
//!     [RawTag::Ident, RawTag::Whitespace, RawTag::BangEqual, RawTag::Whitespace, RawTag::Ident]
//! );
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::{count_newlines, Cursor};
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
