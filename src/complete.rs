//! Prefix autocomplete over a frequency trie.

use std::hash::Hash;

use crate::trie::Trie;

/// Collect the stored keys starting with `prefix`, ranked by frequency.
///
/// The prefix itself is included when it is a stored key. With no
/// `max_count`, or when the matches fit inside it, every match is returned
/// in lexicographic collection order. Otherwise matches are stable-sorted
/// by frequency descending and truncated, so ties resolve toward the
/// lexicographically earlier key.
pub fn autocomplete<E>(trie: &Trie<E>, prefix: &[E], max_count: Option<usize>) -> Vec<Vec<E>>
where
    E: Eq + Hash + Ord + Clone,
{
    let mut matches: Vec<(Vec<E>, u64)> = Vec::new();
    if let Ok(count) = trie.get(prefix.iter().cloned()) {
        matches.push((prefix.to_vec(), count));
    }
    if let Ok(Some(subtree)) = trie.find_node(prefix.iter().cloned(), true) {
        for (relative, count) in subtree.entries() {
            let mut key = prefix.to_vec();
            key.extend(relative);
            matches.push((key, count));
        }
    }
    if let Some(max) = max_count {
        if matches.len() > max {
            matches.sort_by(|a, b| b.1.cmp(&a.1));
            matches.truncate(max);
        }
    }
    matches.into_iter().map(|(key, _)| key).collect()
}

/// [`autocomplete`] for character tries, taking and returning strings.
pub fn autocomplete_words(
    trie: &Trie<char>,
    prefix: &str,
    max_count: Option<usize>,
) -> Vec<String> {
    let prefix: Vec<char> = prefix.chars().collect();
    autocomplete(trie, &prefix, max_count)
        .into_iter()
        .map(String::from_iter)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trie() -> Trie<char> {
        let mut trie = Trie::new();
        for (word, count) in [
            ("man", 4u64),
            ("mat", 2),
            ("mattress", 1),
            ("map", 6),
            ("me", 3),
            ("met", 1),
        ] {
            trie.set(word.chars(), count);
        }
        trie
    }

    #[test]
    fn empty_prefix_returns_every_key() {
        let trie = sample_trie();
        let words = autocomplete_words(&trie, "", None);
        assert_eq!(words, vec!["man", "map", "mat", "mattress", "me", "met"]);
    }

    #[test]
    fn prefix_itself_is_included() {
        let trie = sample_trie();
        let words = autocomplete_words(&trie, "me", None);
        assert_eq!(words, vec!["me", "met"]);
    }

    #[test]
    fn missing_prefix_returns_empty() {
        let trie = sample_trie();
        assert!(autocomplete_words(&trie, "zeb", None).is_empty());
    }

    #[test]
    fn capped_returns_top_by_frequency() {
        let trie = sample_trie();
        // map:6, man:4, me:3 are the three most frequent "m" entries.
        let words = autocomplete_words(&trie, "m", Some(3));
        assert_eq!(words, vec!["map", "man", "me"]);
    }

    #[test]
    fn cap_at_collected_count_returns_all_unranked() {
        let trie = sample_trie();
        let words = autocomplete_words(&trie, "ma", Some(4));
        // Exactly four matches collected, so no truncation and no ranking.
        assert_eq!(words, vec!["man", "map", "mat", "mattress"]);
    }

    #[test]
    fn frequency_ties_break_lexicographically() {
        let mut trie = Trie::new();
        for word in ["bat", "bar", "baz"] {
            trie.set(word.chars(), 5);
        }
        let words = autocomplete_words(&trie, "ba", Some(2));
        assert_eq!(words, vec!["bar", "bat"]);
    }

    #[test]
    fn never_returns_more_than_cap() {
        let trie = sample_trie();
        for cap in 0..8 {
            assert!(autocomplete_words(&trie, "", Some(cap)).len() <= cap);
        }
    }

    #[test]
    fn phrase_trie_autocomplete() {
        let mut trie: Trie<String> = Trie::new();
        let tokens = |words: &[&str]| -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        };
        trie.set(tokens(&["the", "cat", "sat"]), 2);
        trie.set(tokens(&["the", "cat", "ran"]), 1);
        trie.set(tokens(&["a", "dog"]), 1);

        let completions = autocomplete(&trie, &tokens(&["the", "cat"]), None);
        assert_eq!(
            completions,
            vec![tokens(&["the", "cat", "ran"]), tokens(&["the", "cat", "sat"])]
        );
    }
}
