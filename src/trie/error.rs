//! Error types for trie operations.

use thiserror::Error;

/// Errors that can occur during trie operations.
///
/// Key-type mismatches are not represented here: the trie is generic over
/// its key element type, so inserting a token-sequence key into a
/// character-sequence trie is a compile error rather than a runtime one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    /// No value is stored at the requested key, even if the key names a
    /// valid intermediate prefix node.
    #[error("no value stored at the requested key")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, TrieError>;
