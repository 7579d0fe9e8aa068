//! Token store dumps.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use sniff_lexer::{Token, TokenStore};

use crate::CliError;

#[derive(Serialize)]
struct JsonDump<'a> {
    file: &'a str,
    eol: &'a str,
    tokens: &'a [Token],
}

/// The store as a JSON document: `{ "file", "eol", "tokens": [...] }`.
pub fn to_json(path: &Path, store: &TokenStore) -> Result<String, CliError> {
    let file = path.to_string_lossy();
    let dump = JsonDump {
        file: &file,
        eol: store.eol(),
        tokens: store.tokens(),
    };
    Ok(serde_json::to_string_pretty(&dump)?)
}

/// One line per token: pointer, position, type, level, content, links.
pub fn to_text(path: &Path, store: &TokenStore) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Tokens for '{}' ({} tokens):",
        path.display(),
        store.num_tokens()
    );
    for (ptr, token) in store.iter().enumerate() {
        let _ = write!(
            out,
            "{ptr:>6} {:>4}:{:<3} {:<30} L{} {:?}",
            token.line,
            token.column,
            token.type_name(),
            token.level,
            token.content
        );
        let links = links(token);
        if !links.is_empty() {
            let _ = write!(out, "  {links}");
        }
        out.push('\n');
    }
    out
}

fn links(token: &Token) -> String {
    let pairs = [
        ("paren", token.parenthesis_opener, token.parenthesis_closer),
        ("bracket", token.bracket_opener, token.bracket_closer),
        ("scope", token.scope_opener, token.scope_closer),
        ("comment", token.comment_opener, token.comment_closer),
        ("attr", token.attribute_opener, token.attribute_closer),
    ];
    let mut parts: Vec<String> = pairs
        .into_iter()
        .filter(|(_, opener, closer)| opener.is_some() || closer.is_some())
        .map(|(name, opener, closer)| format!("{name}={}..{}", show(opener), show(closer)))
        .collect();
    if let Some(owner) = token.parenthesis_owner {
        parts.push(format!("owner={owner}"));
    }
    if let Some(condition) = token.scope_condition {
        parts.push(format!("cond={condition}"));
    }
    parts.join(" ")
}

fn show(ptr: Option<usize>) -> String {
    ptr.map_or_else(|| "?".to_owned(), |p| p.to_string())
}
