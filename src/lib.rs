//! `lexind`: prefix-indexed text engine.
//!
//! Stores word and phrase frequencies in a trie and answers three query
//! types over them: prefix autocomplete, edit-distance-1 autocorrect, and
//! `*`/`?` wildcard matching.
//!
//! Modules:
//! - `trie`: generic prefix tree mapping element sequences to counts
//! - `tokenize`: sentence segmentation collaborator
//! - `corpus`: word and phrase frequency tries from raw text
//! - `complete`: prefix autocomplete
//! - `correct`: single-edit autocorrect
//! - `wildcard`: `*`/`?` pattern matching

pub mod complete;
pub mod corpus;
pub mod correct;
pub mod tokenize;
pub mod trie;
pub mod wildcard;

// Re-export the engine surface for convenience.
pub use complete::{autocomplete, autocomplete_words};
pub use corpus::{build_phrase_trie, build_word_trie, PhraseTrie, WordTrie};
pub use correct::autocorrect;
pub use tokenize::{PunctSentenceTokenizer, SentenceTokenizer};
pub use trie::{Trie, TrieError};
pub use wildcard::{matches, word_filter};
