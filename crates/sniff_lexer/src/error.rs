//! The single error kind tokenization can fail with.
//!
//! Malformed-but-decodable source is never an error: it produces a degraded
//! token stream with absent links. Only undecodable input, unreadable grammar
//! tables and internal defects abort a file.

use sniff_ir::Encoding;
use thiserror::Error;

/// Fatal tokenization failure for one file.
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// The bytes cannot be read as text in the declared encoding.
    #[error("cannot decode source as {encoding}: invalid data at byte {offset}")]
    Decode { encoding: Encoding, offset: usize },

    /// An encoding name that no decoder exists for.
    #[error("unsupported encoding `{0}`")]
    UnsupportedEncoding(String),

    /// A pass produced a stream that breaks the token model's guarantees.
    #[error("internal tokenizer invariant violated: {message}")]
    Invariant { message: String },

    /// The dialect description could not be read.
    #[error("invalid dialect description: {0}")]
    DialectParse(#[from] serde_json::Error),
}

impl TokenizerError {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        TokenizerError::Invariant {
            message: message.into(),
        }
    }
}
