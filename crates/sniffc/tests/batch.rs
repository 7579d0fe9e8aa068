//! Batch tokenization over real files.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use sniff_lexer::{Dialect, TokenCode, TokenizerConfig};
use sniffc::{tokenize_files, CliError};
use tempfile::tempdir;

fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("fixture written");
    path
}

#[test]
fn files_are_independent_and_ordered() {
    let dir = tempdir().unwrap();

    let good = write_fixture(dir.path(), "good.php", b"<?php function a() { return 1; }");
    let broken = write_fixture(dir.path(), "broken.php", b"<?php if ($a) {");
    let utf16 = write_fixture(dir.path(), "utf16.php", b"\xff\xfe<\0?\0");
    let missing = dir.path().join("missing.php");

    let paths = vec![good.clone(), broken.clone(), utf16.clone(), missing.clone()];
    let config = TokenizerConfig {
        strict_encoding: true,
        ..TokenizerConfig::default()
    };
    let dialect = Dialect::php().unwrap();
    let outcomes = tokenize_files(&paths, &config, &dialect);

    let order: Vec<&PathBuf> = outcomes.iter().map(|o| &o.path).collect();
    assert_eq!(order, vec![&good, &broken, &utf16, &missing]);

    let store = outcomes[0].result.as_ref().unwrap();
    let function = store
        .iter()
        .position(|t| t.code == TokenCode::Function)
        .unwrap();
    assert!(store[function].scope_closer.is_some());

    // Live code still tokenizes.
    assert!(outcomes[1].is_ok());
    assert!(matches!(outcomes[2].result, Err(CliError::Tokenize { .. })));
    assert!(matches!(outcomes[3].result, Err(CliError::Read { .. })));
}

#[test]
fn lossy_decoding_keeps_every_file() {
    let dir = tempdir().unwrap();
    let utf16 = write_fixture(dir.path(), "utf16.php", b"\xff\xfe<\0?\0");
    let latin1 = write_fixture(dir.path(), "latin1.php", b"<?php echo '\xe9';");

    let dialect = Dialect::php().unwrap();
    let outcomes = tokenize_files(&[utf16, latin1], &TokenizerConfig::default(), &dialect);
    assert!(outcomes.iter().all(|o| o.is_ok()));
}
