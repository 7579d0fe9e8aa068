use std::io;
use std::path::PathBuf;

use sniff_lexer::TokenizerError;
use thiserror::Error;

/// Driver failures. Per-file tokenizer errors are reported, not fatal.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{}': {source}", path.display())]
    Tokenize {
        path: PathBuf,
        #[source]
        source: TokenizerError,
    },

    #[error("cannot serialize token dump: {0}")]
    Dump(#[from] serde_json::Error),
}
