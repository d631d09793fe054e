//! Prefix tree mapping element sequences to frequency counts.
//!
//! A [`Trie`] is a recursive node structure: each node holds an optional
//! stored count and an owned map from a single key element to a child node.
//! The key reaching a node is the concatenation of edge elements from the
//! root. Keys are any `IntoIterator` over the element type, so a
//! `Trie<char>` takes `word.chars()` and a `Trie<String>` takes owned word
//! tokens.
//!
//! - **mod**: the node type and its set/get/delete/contains/find_node
//!   operations
//! - **iter**: lazy depth-first iterators over stored entries
//! - **error**: error types
//!
//! A node may hold a value with no children (a leaf key) or children with
//! no value (a pure intermediate prefix); the two are independent. Deleting
//! a key only clears its value. Emptied paths are never pruned, so the
//! trie shape after a delete is the same as before the matching insert.

pub mod error;
pub mod iter;

pub use error::{Result, TrieError};
pub use iter::{Entries, Keys};

use std::hash::Hash;

use ahash::AHashMap;

/// A prefix tree node, generic over the key element type.
///
/// `E = char` gives a character-sequence trie (word keys); `E = String`
/// gives a token-sequence trie (phrase keys). The two instantiations are
/// distinct types, so a key of the wrong shape cannot reach the wrong trie.
#[derive(Debug, Clone)]
pub struct Trie<E> {
    /// Stored count for the key ending at this node. `None` means the key
    /// is not itself a stored entry; `Some(0)` is a stored entry.
    value: Option<u64>,
    /// One owned child per outgoing edge element.
    children: AHashMap<E, Trie<E>>,
}

impl<E> Default for Trie<E> {
    fn default() -> Self {
        Trie {
            value: None,
            children: AHashMap::new(),
        }
    }
}

// `AHashMap`'s `PartialEq` requires `E: Eq + Hash`, which `#[derive]` cannot
// express, so the impl is written by hand with those bounds.
impl<E> PartialEq for Trie<E>
where
    E: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.children == other.children
    }
}

impl<E> Trie<E>
where
    E: Eq + Hash,
{
    /// Create an empty trie: no value at the root, no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// The count stored at this node, if its key is a stored entry.
    pub fn value(&self) -> Option<u64> {
        self.value
    }

    /// The child reached by a single edge element, if present.
    pub fn child(&self, elem: &E) -> Option<&Self> {
        self.children.get(elem)
    }

    /// Store `value` at `key`, creating intermediate nodes as needed.
    ///
    /// Setting a key that is already stored overwrites its value. The empty
    /// key stores at the root itself.
    pub fn set<K>(&mut self, key: K, value: u64)
    where
        K: IntoIterator<Item = E>,
    {
        let mut node = self;
        for elem in key {
            node = node.children.entry(elem).or_default();
        }
        node.value = Some(value);
    }

    /// The value stored exactly at `key`.
    ///
    /// Returns [`TrieError::NotFound`] if no value is stored there, even
    /// when the key names a pure prefix of other entries.
    pub fn get<K>(&self, key: K) -> Result<u64>
    where
        K: IntoIterator<Item = E>,
    {
        self.descend(key)
            .and_then(|node| node.value)
            .ok_or(TrieError::NotFound)
    }

    /// Clear the value stored at `key`.
    ///
    /// The node itself and any intermediate nodes stay in place; only the
    /// stored value is removed. Returns [`TrieError::NotFound`] under the
    /// same conditions as [`Trie::get`].
    pub fn delete<K>(&mut self, key: K) -> Result<()>
    where
        K: IntoIterator<Item = E>,
    {
        let mut node = self;
        for elem in key {
            node = node.children.get_mut(&elem).ok_or(TrieError::NotFound)?;
        }
        match node.value.take() {
            Some(_) => Ok(()),
            None => Err(TrieError::NotFound),
        }
    }

    /// True iff a value is stored exactly at `key`.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: IntoIterator<Item = E>,
    {
        self.descend(key).is_some_and(|node| node.value.is_some())
    }

    /// Follow `key` one element at a time and return the node it reaches.
    ///
    /// This is the shared traversal primitive behind every other operation.
    /// With `allow_prefix` the node is returned (or `None` when the path
    /// does not exist) regardless of whether it holds a value. Without it,
    /// the call fails with [`TrieError::NotFound`] unless a value is stored
    /// at exactly `key`.
    pub fn find_node<K>(&self, key: K, allow_prefix: bool) -> Result<Option<&Self>>
    where
        K: IntoIterator<Item = E>,
    {
        let node = self.descend(key);
        if allow_prefix {
            return Ok(node);
        }
        match node {
            Some(found) if found.value.is_some() => Ok(Some(found)),
            _ => Err(TrieError::NotFound),
        }
    }

    /// Number of stored keys in this subtree, counting this node's own
    /// value. Computed by traversal.
    pub fn len(&self) -> usize {
        usize::from(self.value.is_some()) + self.children.values().map(Trie::len).sum::<usize>()
    }

    /// True iff no key is stored in this subtree.
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.values().all(Trie::is_empty)
    }

    fn descend<K>(&self, key: K) -> Option<&Self>
    where
        K: IntoIterator<Item = E>,
    {
        let mut node = self;
        for elem in key {
            node = node.children.get(&elem)?;
        }
        Some(node)
    }
}

impl<E> Trie<E>
where
    E: Eq + Hash + Ord,
{
    /// This node's children in sorted element order.
    ///
    /// The child map itself is unordered; every iteration path sorts
    /// through here so traversal order is deterministic.
    pub fn children_sorted(&self) -> Vec<(&E, &Trie<E>)> {
        let mut entries: Vec<(&E, &Trie<E>)> = self.children.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<E> Trie<E>
where
    E: Eq + Hash + Ord + Clone,
{
    /// Lazily iterate `(key, value)` for every stored entry strictly below
    /// this node, depth-first in sorted element order.
    ///
    /// The receiving node's own value is not yielded; callers that need it
    /// check it separately.
    pub fn entries(&self) -> Entries<'_, E> {
        Entries::new(self)
    }

    /// Lazily iterate the stored keys strictly below this node.
    pub fn keys(&self) -> Keys<'_, E> {
        Keys::new(self)
    }
}
