//! Sniff IR - token model for the sniff tokenizer
//!
//! This crate contains the data structures every other sniff crate shares:
//! - `TokenCode`, the stable symbolic token type with its `T_*` name
//! - `Token`, one unit of the enriched stream with optional structural links
//! - `TokenStore`, the indexed token array with lookup helpers and the
//!   changeset mutation protocol
//! - `Dialect`, the versioned scope/parenthesis owner tables
//! - `TokenizerConfig`, per-run settings
//!
//! # Design Philosophy
//!
//! - **Pointers, not nodes**: every relationship is a stack pointer (`usize`)
//!   into the same store.
//! - **Absence is explicit**: a link that does not exist is `None`, never a
//!   sentinel value.
//! - **Fixed shape**: a store never gains or loses tokens; only content
//!   changes, through changesets.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod changeset;
mod code;
mod config;
mod dialect;
pub mod search;
mod store;
mod token;

pub use changeset::ChangesetError;
pub use code::TokenCode;
pub use config::{Encoding, TokenizerConfig};
pub use dialect::{Dialect, ScopeOwner};
pub use search::Search;
pub use store::TokenStore;
pub use token::{char_len, Conditions, NestedParens, Token};

static_assert_size!(TokenCode, 1);
