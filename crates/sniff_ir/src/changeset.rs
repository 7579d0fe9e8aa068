//! Atomic content edits.
//!
//! Fixers group replacements into a named changeset. Nothing is visible in
//! the store until [`TokenStore::end_changeset`] applies the whole group;
//! [`TokenStore::rollback_changeset`] discards it. A replacement made while
//! no changeset is open is applied immediately.

use thiserror::Error;

use crate::store::PendingChangeset;
use crate::TokenStore;

/// Misuse of the changeset protocol.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChangesetError {
    #[error("stack pointer {ptr} is out of range (store has {len} tokens)")]
    OutOfRange { ptr: usize, len: usize },
    #[error("changeset `{open}` is already open")]
    AlreadyOpen { open: String },
    #[error("no changeset is open")]
    NoOpenChangeset,
}

impl TokenStore {
    /// Start recording replacements under `name`.
    pub fn begin_changeset(&mut self, name: impl Into<String>) -> Result<(), ChangesetError> {
        if let Some(open) = &self.changeset {
            return Err(ChangesetError::AlreadyOpen {
                open: open.name.clone(),
            });
        }
        self.changeset = Some(PendingChangeset {
            name: name.into(),
            edits: rustc_hash::FxHashMap::default(),
        });
        Ok(())
    }

    /// Name of the open changeset.
    pub fn open_changeset(&self) -> Option<&str> {
        self.changeset.as_ref().map(|c| c.name.as_str())
    }

    /// Content of `ptr` as the open changeset would leave it.
    pub fn pending_content(&self, ptr: usize) -> Option<&str> {
        let pending = self
            .changeset
            .as_ref()
            .and_then(|c| c.edits.get(&ptr))
            .map(String::as_str);
        pending.or_else(|| self.get(ptr).map(|t| t.content.as_str()))
    }

    /// Replace the content of the token at `ptr`.
    ///
    /// Returns `Ok(false)` when `content` equals what the token already holds
    /// (counting pending edits), so repeated fixes converge.
    pub fn replace_token(
        &mut self,
        ptr: usize,
        content: impl Into<String>,
    ) -> Result<bool, ChangesetError> {
        let len = self.num_tokens();
        let current = self
            .pending_content(ptr)
            .ok_or(ChangesetError::OutOfRange { ptr, len })?;
        let content = content.into();
        if current == content {
            return Ok(false);
        }
        match &mut self.changeset {
            Some(open) => {
                open.edits.insert(ptr, content);
            }
            None => self.tokens_mut()[ptr].set_content(content),
        }
        Ok(true)
    }

    /// Apply every recorded replacement and close the changeset.
    ///
    /// Returns the number of tokens changed.
    pub fn end_changeset(&mut self) -> Result<usize, ChangesetError> {
        let open = self
            .changeset
            .take()
            .ok_or(ChangesetError::NoOpenChangeset)?;
        let mut applied = 0;
        let tokens = self.tokens_mut();
        for (ptr, content) in open.edits {
            if let Some(token) = tokens.get_mut(ptr) {
                if token.content != content {
                    token.set_content(content);
                    applied += 1;
                }
            }
        }
        Ok(applied)
    }

    /// Discard the open changeset.
    pub fn rollback_changeset(&mut self) -> Result<(), ChangesetError> {
        self.changeset
            .take()
            .map(|_| ())
            .ok_or(ChangesetError::NoOpenChangeset)
    }
}
