//! Provides a Trie for storing non-empty keys composed of sequences of
//! atoms, each key mapped to a value.
//!
//! Every node is either a branch, holding one edge per distinct next atom,
//! or a leaf, holding the value for the key which ends there. A node is
//! never both: inserting a key always leaves a leaf at the end of its walk,
//! replacing whatever was there before. Later pairs win.
//!
//! Atoms must support the TrieAtom trait. Keys are anything which
//! implements `IntoIterator<Item = A>`, which is useful when string
//! processing. Here are examples which work with keys of:
//!  - chars
//!  - grapheme clusters
//!  - &str ('words')
//!
//! Example 1
//! ```
//! use leaftrie::trie::{Trie, TrieString};
//!
//! let trie: TrieString<usize> = Trie::from_pairs([("abcdef".chars(), 6)])?;
//!
//! // Anything which implements IntoIterator<Item=char> can now be used
//! // to interact with our Trie
//! assert!(trie.contains("abcdef".chars())?); // Create a new iterator
//! assert!(trie.contains(['a', 'b', 'c', 'd', 'e', 'f'])?); // Build an array, etc...
//! assert_eq!(trie.get("abcdef".chars())?, Some(&6)); // Get our value back
//! assert!(trie.partial("abc".chars())?);
//! assert!(!trie.contains("abc".chars())?);
//! # Ok::<(), leaftrie::TrieError>(())
//! ```
//!
//! Example 2
//! ```
//! use leaftrie::trie::Trie;
//! use unicode_segmentation::UnicodeSegmentation;
//!
//! let s = "a̐éö̲\r\n";
//! let trie: Trie<&str, usize> = Trie::from_pairs([(s.graphemes(true), 4)])?;
//! assert!(trie.contains(s.graphemes(true))?);
//! assert!(trie.partial(s.graphemes(true).take(2))?);
//! # Ok::<(), leaftrie::TrieError>(())
//! ```
//!
//! Example 3
//! ```
//! use leaftrie::trie::Trie;
//!
//! let input = "the quick brown fox".split_whitespace();
//! let trie = Trie::from_pairs([(input.clone(), 4)])?;
//! assert!(trie.contains(input)?);
//! assert!(trie.partial("the quick brown".split_whitespace())?);
//! assert!(!trie.partial("the slow".split_whitespace())?);
//! # Ok::<(), leaftrie::TrieError>(())
//! ```
//!
//! Inserting a shorter key over a longer one discards the longer key:
//! ```
//! use leaftrie::TrieString;
//!
//! let trie = TrieString::from_words([("ab", 1), ("a", 2)])?;
//! assert_eq!(trie.get("a".chars())?, Some(&2));
//! assert!(!trie.partial("ab".chars())?);
//! assert_eq!(trie.count(), 1);
//! # Ok::<(), leaftrie::TrieError>(())
//! ```

use std::iter::Peekable;
use std::mem;

use log::{debug, trace};

use crate::error::{Result, TrieError};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Copy + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A where A: Copy + Ord {}

/// A Trie keyed by the chars of a string.
pub type TrieString<V> = Trie<char, V>;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
struct Edge<A, V> {
    atom: A,
    node: Node<A, V>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
enum Node<A, V> {
    // Sorted by atom, at most one edge per atom.
    Branch(Vec<Edge<A, V>>),
    Leaf(V),
}

/// Stores keys of atoms as paths of individual nodes.
///
/// With the `serde` feature a decoded Trie is checked before use: the head
/// must be a branch, edges must be sorted without duplicates, and `count`
/// is recomputed from the nodes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        try_from = "RawTrie<A, V>",
        bound(deserialize = "A: TrieAtom + Deserialize<'de>, V: Deserialize<'de>")
    )
)]
pub struct Trie<A, V> {
    head: Node<A, V>,
    count: usize,
}

// Unchecked wire shape of a Trie.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(crate = "serde_crate")]
struct RawTrie<A, V> {
    head: Node<A, V>,
    count: usize,
}

#[cfg(feature = "serde")]
impl<A: TrieAtom, V> TryFrom<RawTrie<A, V>> for Trie<A, V> {
    type Error = TrieError;

    fn try_from(raw: RawTrie<A, V>) -> Result<Self> {
        if raw.head.is_leaf() {
            return Err(TrieError::Malformed("head is a leaf"));
        }
        raw.head.validate(true)?;
        let count = raw.head.keys();
        if count != raw.count {
            debug!("stored count {} disagrees with {} keys, using the keys", raw.count, count);
        }
        Ok(Self {
            head: raw.head,
            count,
        })
    }
}

impl<A, V> Default for Node<A, V> {
    fn default() -> Self {
        Node::Branch(Vec::new())
    }
}

impl<A, V> Default for Trie<A, V> {
    fn default() -> Self {
        Self {
            head: Node::default(),
            count: 0,
        }
    }
}

impl<A: TrieAtom, V> Node<A, V> {
    fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    fn value(&self) -> Option<&V> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// Number of keys which end in this subtree.
    fn keys(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(edges) => edges.iter().map(|edge| edge.node.keys()).sum(),
        }
    }

    fn child(&self, atom: A) -> Option<&Node<A, V>> {
        match self {
            Node::Branch(edges) => edges
                .binary_search_by(|edge| edge.atom.cmp(&atom))
                .ok()
                .map(|idx| &edges[idx].node),
            Node::Leaf(_) => None,
        }
    }

    /// Rebuild this node with `atoms` leading to a leaf holding `value`.
    ///
    /// Missing children are created as empty branches. A leaf met on the
    /// way down becomes a branch and whatever sits at the end of the key is
    /// replaced; `discarded` counts the stored keys dropped either way.
    fn with_key<I: Iterator<Item = A>>(
        self,
        mut atoms: I,
        value: V,
        discarded: &mut usize,
    ) -> Self {
        let Some(atom) = atoms.next() else {
            *discarded += self.keys();
            return Node::Leaf(value);
        };
        let mut edges = match self {
            Node::Branch(edges) => edges,
            Node::Leaf(_) => {
                *discarded += 1;
                Vec::new()
            }
        };
        match edges.binary_search_by(|edge| edge.atom.cmp(&atom)) {
            Ok(idx) => {
                let child = mem::take(&mut edges[idx].node);
                edges[idx].node = child.with_key(atoms, value, discarded);
            }
            Err(idx) => {
                let node = Node::default().with_key(atoms, value, discarded);
                edges.insert(idx, Edge { atom, node });
            }
        }
        Node::Branch(edges)
    }

    /// Check the shape every lookup relies on: edges strictly ordered by
    /// atom and no empty branch below the head.
    #[cfg(feature = "serde")]
    fn validate(&self, head: bool) -> Result<()> {
        match self {
            Node::Leaf(_) => Ok(()),
            Node::Branch(edges) => {
                if edges.is_empty() && !head {
                    return Err(TrieError::Malformed("empty branch below the head"));
                }
                if edges.windows(2).any(|pair| pair[0].atom >= pair[1].atom) {
                    return Err(TrieError::Malformed("edges unsorted or duplicated"));
                }
                edges.iter().try_for_each(|edge| edge.node.validate(false))
            }
        }
    }
}

impl<A: TrieAtom, V> Trie<A, V> {
    /// Create a new, empty Trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a Trie from (key, value) pairs, inserting them in order.
    ///
    /// A key which is inserted again replaces the earlier value. A key
    /// which ends where other keys continue replaces all of those longer
    /// keys, and a key which continues through the end of an earlier key
    /// replaces that shorter key.
    ///
    /// Fails with [`TrieError::EmptyKey`] if any key is empty.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self>
    where
        K: IntoIterator<Item = A>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut trie = Self::new();
        let mut inserted = 0usize;
        for (key, value) in pairs {
            trie.insert(key, value)?;
            inserted += 1;
        }
        debug!(
            "built trie holding {} keys from {} pairs",
            trie.count, inserted
        );
        Ok(trie)
    }

    /// Does the Trie contain exactly the supplied key?
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> Result<bool> {
        Ok(self.descend(key)?.is_some_and(Node::is_leaf))
    }

    /// Is the supplied key a prefix of (or equal to) some key in the Trie?
    pub fn partial<K: IntoIterator<Item = A>>(&self, key: K) -> Result<bool> {
        Ok(self.descend(key)?.is_some())
    }

    /// Get a reference to a key's associated value.
    pub fn get<K: IntoIterator<Item = A>>(&self, key: K) -> Result<Option<&V>> {
        Ok(self.descend(key)?.and_then(Node::value))
    }

    /// How many keys does the Trie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn insert<K: IntoIterator<Item = A>>(&mut self, key: K, value: V) -> Result<()> {
        let atoms = Self::checked(key)?;
        let mut discarded = 0;
        self.head = mem::take(&mut self.head).with_key(atoms, value, &mut discarded);
        if discarded > 0 {
            trace!("insert replaced {} stored keys", discarded);
        }
        self.count = self.count + 1 - discarded;
        Ok(())
    }

    // Follow existing edges only. None if the walk falls off the Trie.
    fn descend<K: IntoIterator<Item = A>>(&self, key: K) -> Result<Option<&Node<A, V>>> {
        let mut node = &self.head;
        for atom in Self::checked(key)? {
            match node.child(atom) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok(Some(node))
    }

    fn checked<K: IntoIterator<Item = A>>(key: K) -> Result<Peekable<K::IntoIter>> {
        let mut atoms = key.into_iter().peekable();
        match atoms.peek() {
            Some(_) => Ok(atoms),
            None => Err(TrieError::EmptyKey),
        }
    }
}

impl<V> Trie<char, V> {
    /// Build a Trie from (word, value) pairs, walking each word as chars.
    pub fn from_words<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, V)>,
    {
        Self::from_pairs(pairs.into_iter().map(|(word, value)| (word.chars(), value)))
    }
}
