//! Provides a branch/leaf Trie for storing non-empty keys composed of
//! sequences of atoms, each mapped to a value.
//!
//! Atoms must support the [`crate::trie::TrieAtom`] trait. Keys are
//! anything which implements `IntoIterator<Item = A>`, so the user decides
//! what granularity of atom makes most sense for the keys being stored:
//! `char`s, grapheme clusters, words, numbers, ...
//!
//! Since the most common use of a trie is to store the chars of a String,
//! a convenience type, [`crate::trie::TrieString`] is provided.
//!
//! A trie is built once from a collection of (key, value) pairs and is
//! then queried with:
//!  - `contains`: does a key end exactly here?
//!  - `partial`: is this a prefix of some stored key?
//!  - `get`: the value stored for a key
//!
//! Empty keys are rejected with [`crate::error::TrieError::EmptyKey`].
//!
//! ```
//! use leaftrie::TrieString;
//!
//! let trie = TrieString::from_words([("cat", 1), ("car", 2), ("cab", 3)])?;
//! assert_eq!(trie.get("car".chars())?, Some(&2));
//! assert!(trie.partial("ca".chars())?);
//! assert!(!trie.contains("ca".chars())?);
//! assert!(trie.get("".chars()).is_err());
//! # Ok::<(), leaftrie::TrieError>(())
//! ```

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod error;

pub mod trie;

pub use error::{Result, TrieError};
pub use trie::{Trie, TrieAtom, TrieString};
