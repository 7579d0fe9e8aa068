//! Parallel tokenization of many files.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use sniff_lexer::{Dialect, ResolveCache, TokenStore, Tokenizer, TokenizerConfig};

use crate::CliError;

/// The result of tokenizing one file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<TokenStore, CliError>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Tokenize every file in `paths`, in input order.
///
/// Files are independent; a failure in one never affects another. Each
/// worker thread reuses one resolve cache across the files it handles.
#[tracing::instrument(level = "debug", skip_all, fields(files = paths.len()))]
pub fn tokenize_files(
    paths: &[PathBuf],
    config: &TokenizerConfig,
    dialect: &Dialect,
) -> Vec<FileOutcome> {
    let start = Instant::now();
    let run = || {
        paths
            .par_iter()
            .map_init(ResolveCache::new, |cache, path| {
                tokenize_one(path, config, dialect, cache)
            })
            .collect::<Vec<_>>()
    };

    let outcomes = rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| pool.install(run))
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), running sequentially");
            let mut cache = ResolveCache::new();
            paths
                .iter()
                .map(|path| tokenize_one(path, config, dialect, &mut cache))
                .collect()
        });

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    tracing::debug!(failed, elapsed = ?start.elapsed(), "batch done");
    outcomes
}

fn tokenize_one(
    path: &Path,
    config: &TokenizerConfig,
    dialect: &Dialect,
    cache: &mut ResolveCache,
) -> FileOutcome {
    let result = std::fs::read(path)
        .map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|bytes| {
            let mut tokenizer = Tokenizer::with_cache(config, dialect, std::mem::take(cache));
            let store = tokenizer.tokenize_bytes(&bytes);
            *cache = tokenizer.into_cache();
            store.map_err(|source| CliError::Tokenize {
                path: path.to_path_buf(),
                source,
            })
        });
    if let Err(err) = &result {
        tracing::debug!(path = %path.display(), %err, "file skipped");
    }
    FileOutcome {
        path: path.to_path_buf(),
        result,
    }
}
