//! Grammar tables that drive scope and parenthesis ownership.
//!
//! Which keywords own a block, and which own a parenthesized clause, grows
//! with every language release. The enricher's algorithm stays fixed; the
//! tables live here as data and are read from JSON. The bundled PHP table
//! is `dialects/php.json`.

use rustc_hash::FxHashMap;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::TokenCode;

const PHP_DIALECT: &str = include_str!("../dialects/php.json");

/// How one keyword opens and closes its scope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeOwner {
    /// Codes that can open the scope.
    pub start: Vec<TokenCode>,
    /// Codes that can close the scope.
    pub end: Vec<TokenCode>,
    /// The scope must open with one of `start`; any other owner keyword met
    /// first means this one has no scope.
    #[serde(default)]
    pub strict: bool,
    /// Several owners may share one closer (`case`/`default`).
    #[serde(default)]
    pub shared: bool,
    /// Owners that continue this one (`else` after `if`) or share its
    /// closer.
    #[serde(default)]
    pub with: Vec<TokenCode>,
    /// The scope runs to the end of an expression rather than to a matching
    /// brace (arrow functions). The closer is the terminating token.
    #[serde(default)]
    pub expression: bool,
}

/// A versioned grammar description.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Dialect {
    pub name: String,
    pub version: String,
    pub scope_owners: FxHashMap<TokenCode, ScopeOwner>,
    /// Codes that own the parenthesized clause following them.
    #[serde(default)]
    pub parenthesis_owners: Vec<TokenCode>,
}

impl Dialect {
    /// The bundled PHP dialect.
    pub fn php() -> Result<Self, serde_json::Error> {
        Self::from_json(PHP_DIALECT)
    }

    /// Parse and validate a dialect description.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let dialect: Dialect = serde_json::from_str(json)?;
        for (code, owner) in &dialect.scope_owners {
            if owner.start.is_empty() || owner.end.is_empty() {
                return Err(serde_json::Error::custom(format!(
                    "scope owner `{code}` needs at least one start and one end code"
                )));
            }
            if owner.expression && owner.shared {
                return Err(serde_json::Error::custom(format!(
                    "scope owner `{code}` cannot be both shared and expression-scoped"
                )));
            }
        }
        Ok(dialect)
    }

    #[inline]
    pub fn scope_owner(&self, code: TokenCode) -> Option<&ScopeOwner> {
        self.scope_owners.get(&code)
    }

    #[inline]
    pub fn is_scope_owner(&self, code: TokenCode) -> bool {
        self.scope_owners.contains_key(&code)
    }

    #[inline]
    pub fn is_parenthesis_owner(&self, code: TokenCode) -> bool {
        self.parenthesis_owners.contains(&code)
    }
}
