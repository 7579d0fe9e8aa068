//! Sniff driver: loads settings, tokenizes files in parallel, dumps stores.
//!
//! ```text
//! args ─► Options ─► (TokenizerConfig, Dialect) ─► tokenize_files ─► dump
//! ```
//!
//! Every file is tokenized into its own store. Worker threads keep a
//! resolve cache each; nothing else is shared between files.

use std::sync::Once;

pub mod batch;
pub mod dump;
mod error;
pub mod options;

pub use batch::{tokenize_files, FileOutcome};
pub use error::CliError;
pub use options::{Options, OutputFormat};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing, honoring `RUST_LOG` (e.g. `RUST_LOG=sniff_lexer=trace`).
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
