//! Errors returned by [`crate::trie::Trie`].

use thiserror::Error;

/// Ways a trie operation can fail.
///
/// Lookups that simply find nothing are not errors: they come back as
/// `Ok(false)` or `Ok(None)`.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrieError {
    /// A key with no atoms was passed where a key is required.
    #[error("invalid argument: usage of empty key")]
    EmptyKey,
    /// A decoded Trie breaks the node layout lookups depend on.
    #[error("malformed trie: {0}")]
    Malformed(&'static str),
}

pub type Result<T> = std::result::Result<T, TrieError>;
