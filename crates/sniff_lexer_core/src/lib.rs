//! Raw scanner for PHP source text.
//!
//! This crate turns source text into a flat sequence of `(RawTag, len)`
//! pairs. It knows nothing about keywords, casts, scopes or positions; those
//! are resolved by `sniff_lexer`. Every byte of the input is covered by
//! exactly one raw token, so summing `len` over the stream always yields the
//! source length.
//!
//! ```text
//! source → SourceBuffer → Cursor → RawScanner → (RawTag, len)*
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner, ScanOptions};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
