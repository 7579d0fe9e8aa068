//! PHP tokenizer with token-stream enrichment.
//!
//! ```text
//! bytes ─decode→ text ─Lexer→ primitive tokens ─Enricher→ TokenStore
//!                              (cook, split,      (merge, doc comments,
//!                               place, settle)     brackets, scopes, nesting)
//! ```
//!
//! Each file is tokenized independently into its own [`TokenStore`]. The
//! scope and parenthesis owner tables come from a [`Dialect`] the caller
//! supplies; nothing here hardcodes them.
//!
//! Malformed source never fails: unmatched brackets and dangling scope
//! keywords simply leave links absent. [`TokenizerError`] is reserved for
//! undecodable input, unreadable dialects and internal defects.

mod comments;
mod cooker;
mod decode;
mod enrich;
mod error;
mod keywords;
mod lexer;
mod position;
mod reclassify;
mod resolve_cache;

pub use decode::{decode, encoding_by_name};
pub use enrich::Enricher;
pub use error::TokenizerError;
pub use lexer::{Lexed, Lexer};
pub use resolve_cache::ResolveCache;
pub use sniff_ir::{Dialect, Token, TokenCode, TokenStore, TokenizerConfig};

/// Tokenize one file's source text.
pub fn tokenize(
    source: &str,
    config: &TokenizerConfig,
    dialect: &Dialect,
) -> Result<TokenStore, TokenizerError> {
    Tokenizer::new(config, dialect).tokenize(source)
}

/// Decode `bytes` in the configured encoding, then tokenize.
pub fn tokenize_bytes(
    bytes: &[u8],
    config: &TokenizerConfig,
    dialect: &Dialect,
) -> Result<TokenStore, TokenizerError> {
    Tokenizer::new(config, dialect).tokenize_bytes(bytes)
}

/// Read a dialect description from JSON.
pub fn load_dialect(json: &str) -> Result<Dialect, TokenizerError> {
    Ok(Dialect::from_json(json)?)
}

/// A reusable tokenizer: one config, one dialect, one warm resolve cache.
///
/// Stores never share state; only keyword resolutions carry over between
/// files.
pub struct Tokenizer<'a> {
    config: &'a TokenizerConfig,
    lexer: Lexer<'a>,
    enricher: Enricher<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(config: &'a TokenizerConfig, dialect: &'a Dialect) -> Self {
        Self::with_cache(config, dialect, ResolveCache::new())
    }

    pub fn with_cache(config: &'a TokenizerConfig, dialect: &'a Dialect, cache: ResolveCache) -> Self {
        Tokenizer {
            config,
            lexer: Lexer::with_cache(config, cache),
            enricher: Enricher::new(dialect, config.tab_width),
        }
    }

    pub fn cache(&self) -> &ResolveCache {
        self.lexer.cache()
    }

    pub fn into_cache(self) -> ResolveCache {
        self.lexer.into_cache()
    }

    #[tracing::instrument(level = "debug", name = "tokenize", skip_all, fields(bytes = source.len()))]
    pub fn tokenize(&mut self, source: &str) -> Result<TokenStore, TokenizerError> {
        let lexed = self.lexer.lex(source)?;
        let tokens = self.enricher.enrich(lexed.tokens)?;
        tracing::debug!(tokens = tokens.len(), "tokenized");
        Ok(TokenStore::new(tokens, lexed.eol))
    }

    pub fn tokenize_bytes(&mut self, bytes: &[u8]) -> Result<TokenStore, TokenizerError> {
        let text = decode(bytes, self.config.encoding, self.config.strict_encoding)?;
        self.tokenize(&text)
    }
}
