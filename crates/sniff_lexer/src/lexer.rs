//! The primitive pass: source text to placed tokens.
//!
//! ```text
//! source → (EOL normalisation) → RawScanner → TokenCooker → line split → Placer
//! ```
//!
//! The output is flat: no links, no merges. Context-sensitive words are
//! settled afterwards by [`reclassify`](crate::reclassify).

use std::borrow::Cow;

use sniff_ir::{Token, TokenizerConfig};
use sniff_lexer_core::{tokenize as scan, RawTag, ScanOptions};

use crate::cooker::TokenCooker;
use crate::position::{split_lines, Placer};
use crate::{reclassify, ResolveCache, TokenizerError};

/// Primitive tokens of one file plus the line ending they were read with.
#[derive(Clone, Debug, Default)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub eol: String,
}

/// Turns source text into primitive tokens.
///
/// A lexer owns its [`ResolveCache`]; reuse one lexer (or pass the cache
/// along with [`Lexer::into_cache`]) to keep identifier lookups warm across
/// files.
pub struct Lexer<'c> {
    config: &'c TokenizerConfig,
    cache: ResolveCache,
}

impl<'c> Lexer<'c> {
    pub fn new(config: &'c TokenizerConfig) -> Self {
        Self::with_cache(config, ResolveCache::new())
    }

    pub fn with_cache(config: &'c TokenizerConfig, cache: ResolveCache) -> Self {
        Lexer { config, cache }
    }

    pub fn cache(&self) -> &ResolveCache {
        &self.cache
    }

    pub fn into_cache(self) -> ResolveCache {
        self.cache
    }

    /// Lex `source` into placed, reclassified primitive tokens.
    ///
    /// Never fails on malformed input; the only error is a scanner that did
    /// not cover the source exactly, which is a defect.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn lex(&mut self, source: &str) -> Result<Lexed, TokenizerError> {
        let (text, eol) = match self.config.eol.as_deref() {
            Some(eol) => (normalize_eol(source, eol), eol.to_owned()),
            None => (Cow::Borrowed(source), detect_eol(source).to_owned()),
        };

        let raw = scan(
            &text,
            ScanOptions {
                short_open_tag: self.config.short_open_tag,
            },
        );
        let covered: usize = raw.iter().map(|t| t.len as usize).sum();
        if covered != text.len() {
            return Err(TokenizerError::invariant(format!(
                "raw tokens cover {covered} of {} bytes",
                text.len()
            )));
        }

        let mut cooker = TokenCooker::new(&mut self.cache);
        let mut placer = Placer::new(self.config.tab_width);
        let mut tokens = Vec::with_capacity(raw.len() + raw.len() / 4);
        let mut pos = 0;
        for token in raw {
            let end = pos + token.len as usize;
            let Some(piece) = text.get(pos..end) else {
                return Err(TokenizerError::invariant(format!(
                    "raw token {pos}..{end} splits a character"
                )));
            };
            pos = end;

            let code = cooker.cook(token.tag, piece);
            if splits_by_line(token.tag) {
                tokens.extend(split_lines(piece).map(|line| placer.place(code, line)));
            } else {
                tokens.push(placer.place(code, piece));
            }
        }

        reclassify::reclassify(&mut tokens);
        tracing::trace!(tokens = tokens.len(), "lexed");
        Ok(Lexed { tokens, eol })
    }
}

/// Raw tags whose text becomes one token per line.
///
/// Doc comments stay whole here; the comment structurer splits them.
fn splits_by_line(tag: RawTag) -> bool {
    matches!(
        tag,
        RawTag::Whitespace
            | RawTag::BlockComment
            | RawTag::SingleQuoted
            | RawTag::DoubleQuoted
            | RawTag::Backtick
            | RawTag::HeredocBody
            | RawTag::NowdocBody
            | RawTag::InlineHtml
            | RawTag::UnterminatedString
    )
}

/// The first line ending in `source`, or `\n` when there is none.
pub(crate) fn detect_eol(source: &str) -> &'static str {
    let bytes = source.as_bytes();
    match bytes.iter().position(|&b| b == b'\r' || b == b'\n') {
        Some(i) if bytes[i] == b'\n' => "\n",
        Some(i) if bytes.get(i + 1) == Some(&b'\n') => "\r\n",
        Some(_) => "\r",
        None => "\n",
    }
}

/// Rewrite every line ending in `source` to `eol`.
pub(crate) fn normalize_eol<'s>(source: &'s str, eol: &str) -> Cow<'s, str> {
    let bytes = source.as_bytes();
    let already = match eol {
        "\n" => !bytes.contains(&b'\r'),
        "\r" => !bytes.contains(&b'\n'),
        _ => false,
    };
    if already || !bytes.iter().any(|&b| b == b'\r' || b == b'\n') {
        return Cow::Borrowed(source);
    }

    let mut out = String::with_capacity(source.len() + source.len() / 32);
    let mut rest = source;
    while let Some(i) = rest.find(['\r', '\n']) {
        out.push_str(&rest[..i]);
        out.push_str(eol);
        let width = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[i + width..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}
