//! Wildcard pattern matching over character tries.
//!
//! Patterns mix literals with `*` (zero or more characters) and `?`
//! (exactly one character). Matching walks the trie and the pattern
//! together, one level at a time, so only paths compatible with the
//! pattern are ever visited.

use ahash::AHashSet;

use crate::trie::Trie;

/// One element of a parsed pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    /// `*`: matches any run of characters, including none.
    Star,
    /// `?`: matches exactly one character.
    Any,
    /// Anything else must match its trie edge exactly.
    Literal(char),
}

/// Parse a pattern into segments, normalizing as it goes: adjacent `*`
/// collapse into one, and `*?` reorders to the equivalent `?*` so every
/// `?` can be dispatched directly.
fn parse_pattern(pattern: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for c in pattern.chars() {
        match c {
            '*' => {
                if segments.last() != Some(&Segment::Star) {
                    segments.push(Segment::Star);
                }
            }
            '?' => {
                if segments.last() == Some(&Segment::Star) {
                    segments.pop();
                    segments.push(Segment::Any);
                    segments.push(Segment::Star);
                } else {
                    segments.push(Segment::Any);
                }
            }
            literal => segments.push(Segment::Literal(literal)),
        }
    }
    segments
}

/// A pending (trie node, pattern position) pair and the key reaching it.
struct Frame<'a> {
    node: &'a Trie<char>,
    seg: usize,
    key: String,
}

/// Lazy iterator of `(key, frequency)` pairs for stored keys matching a
/// pattern.
///
/// Driven by an explicit frame stack: a `*` segment forks into "consume
/// one character, stay on the star" and "move past the star"; `?` forks
/// over every child; a literal follows its single edge. A key is yielded
/// once the whole pattern is consumed at a node holding a value. Keys
/// reachable through more than one `*` split are deduplicated.
pub struct Matches<'a> {
    segments: Vec<Segment>,
    stack: Vec<Frame<'a>>,
    yielded: AHashSet<String>,
}

impl<'a> Matches<'a> {
    fn new(trie: &'a Trie<char>, pattern: &str) -> Self {
        Matches {
            segments: parse_pattern(pattern),
            stack: vec![Frame {
                node: trie,
                seg: 0,
                key: String::new(),
            }],
            yielded: AHashSet::new(),
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = (String, u64);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(Frame { node, seg, key }) = self.stack.pop() {
            let Some(segment) = self.segments.get(seg).copied() else {
                // Pattern fully consumed: yield if this key is stored.
                if let Some(count) = node.value() {
                    if self.yielded.insert(key.clone()) {
                        return Some((key, count));
                    }
                }
                continue;
            };
            match segment {
                Segment::Literal(c) => {
                    if let Some(child) = node.child(&c) {
                        let mut next_key = key;
                        next_key.push(c);
                        self.stack.push(Frame {
                            node: child,
                            seg: seg + 1,
                            key: next_key,
                        });
                    }
                }
                Segment::Any => {
                    for (elem, child) in node.children_sorted().into_iter().rev() {
                        let mut next_key = key.clone();
                        next_key.push(*elem);
                        self.stack.push(Frame {
                            node: child,
                            seg: seg + 1,
                            key: next_key,
                        });
                    }
                }
                Segment::Star => {
                    for (elem, child) in node.children_sorted().into_iter().rev() {
                        let mut next_key = key.clone();
                        next_key.push(*elem);
                        self.stack.push(Frame {
                            node: child,
                            seg,
                            key: next_key,
                        });
                    }
                    // Pushed last so the empty-run interpretation pops
                    // first: shorter matches surface before longer ones.
                    self.stack.push(Frame {
                        node,
                        seg: seg + 1,
                        key,
                    });
                }
            }
        }
        None
    }
}

/// Lazily match `pattern` against every stored key in `trie`.
pub fn matches<'a>(trie: &'a Trie<char>, pattern: &str) -> Matches<'a> {
    Matches::new(trie, pattern)
}

/// All stored `(key, frequency)` pairs in `trie` matching `pattern`.
pub fn word_filter(trie: &Trie<char>, pattern: &str) -> Vec<(String, u64)> {
    matches(trie, pattern).collect()
}
