//! Edit-distance-1 autocorrect layered on autocomplete.
//!
//! Completions for the query word come first; when they leave budget,
//! valid single-edit variants (insertion, deletion, replacement,
//! transposition) fill the rest, most frequent first. Edit operators
//! assume the 26-letter lowercase alphabet, matching the default
//! tokenizer's normalization.

use ahash::AHashSet;

use crate::complete::autocomplete_words;
use crate::trie::Trie;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Suggest corrections for `word`: completions first, then stored words
/// one edit away, up to `max_count` total.
///
/// No key is returned twice. With no `max_count`, all completions are
/// followed by all valid edits in generation order (insertion, deletion,
/// replacement, transposition; position-then-letter within each).
pub fn autocorrect(trie: &Trie<char>, word: &str, max_count: Option<usize>) -> Vec<String> {
    let completions = autocomplete_words(trie, word, max_count);
    let mut seen: AHashSet<String> = completions.iter().cloned().collect();
    let chars: Vec<char> = word.chars().collect();

    let mut edits: Vec<(String, u64)> = Vec::new();
    insertions(trie, &chars, &mut seen, &mut edits);
    deletions(trie, &chars, &mut seen, &mut edits);
    replacements(trie, &chars, &mut seen, &mut edits);
    transpositions(trie, &chars, &mut seen, &mut edits);

    let Some(max) = max_count else {
        return join(completions, edits);
    };
    if completions.len() >= max {
        return completions;
    }
    let budget = max - completions.len();
    if edits.len() >= budget {
        edits.sort_by(|a, b| b.1.cmp(&a.1));
        edits.truncate(budget);
    }
    join(completions, edits)
}

fn join(completions: Vec<String>, edits: Vec<(String, u64)>) -> Vec<String> {
    completions
        .into_iter()
        .chain(edits.into_iter().map(|(word, _)| word))
        .collect()
}

/// Record `candidate` if it has not been considered yet and is stored.
///
/// Every generated candidate enters `seen` exactly once, stored or not,
/// so no operator re-checks a spelling another operator already produced.
fn consider(
    trie: &Trie<char>,
    candidate: String,
    seen: &mut AHashSet<String>,
    valid: &mut Vec<(String, u64)>,
) {
    if !seen.insert(candidate.clone()) {
        return;
    }
    if let Ok(count) = trie.get(candidate.chars()) {
        valid.push((candidate, count));
    }
}

fn insertions(
    trie: &Trie<char>,
    chars: &[char],
    seen: &mut AHashSet<String>,
    valid: &mut Vec<(String, u64)>,
) {
    for pos in 0..chars.len() {
        for letter in ALPHABET.chars() {
            let mut candidate = chars.to_vec();
            candidate.insert(pos, letter);
            consider(trie, candidate.into_iter().collect(), seen, valid);
        }
    }
}

fn deletions(
    trie: &Trie<char>,
    chars: &[char],
    seen: &mut AHashSet<String>,
    valid: &mut Vec<(String, u64)>,
) {
    for pos in 0..chars.len() {
        let mut candidate = chars.to_vec();
        candidate.remove(pos);
        consider(trie, candidate.into_iter().collect(), seen, valid);
    }
}

fn replacements(
    trie: &Trie<char>,
    chars: &[char],
    seen: &mut AHashSet<String>,
    valid: &mut Vec<(String, u64)>,
) {
    for pos in 0..chars.len() {
        for letter in ALPHABET.chars() {
            if letter == chars[pos] {
                continue;
            }
            let mut candidate = chars.to_vec();
            candidate[pos] = letter;
            consider(trie, candidate.into_iter().collect(), seen, valid);
        }
    }
}

fn transpositions(
    trie: &Trie<char>,
    chars: &[char],
    seen: &mut AHashSet<String>,
    valid: &mut Vec<(String, u64)>,
) {
    for pos in 0..chars.len().saturating_sub(1) {
        let mut candidate = chars.to_vec();
        candidate.swap(pos, pos + 1);
        consider(trie, candidate.into_iter().collect(), seen, valid);
    }
}
