//! Corpus builders: frequency tries from raw text.
//!
//! Two tries come out of a corpus. The word trie keys each word as its
//! character sequence; the phrase trie keys each whole sentence as its
//! word-token sequence. Both store raw occurrence counts.

use crate::tokenize::SentenceTokenizer;
use crate::trie::Trie;

/// Character-sequence trie of word frequencies.
pub type WordTrie = Trie<char>;

/// Token-sequence trie of sentence frequencies.
pub type PhraseTrie = Trie<String>;

/// Build a trie mapping each word in `text` to its occurrence count.
pub fn build_word_trie<T>(text: &str, tokenizer: &T) -> WordTrie
where
    T: SentenceTokenizer + ?Sized,
{
    let sentences = tokenizer.sentences(text);
    let mut trie = Trie::new();
    let mut words = 0usize;
    for sentence in &sentences {
        for word in sentence.split_whitespace() {
            let count = trie.get(word.chars()).unwrap_or(0);
            trie.set(word.chars(), count + 1);
            words += 1;
        }
    }
    tracing::debug!(
        sentences = sentences.len(),
        words,
        distinct = trie.len(),
        "word trie built"
    );
    trie
}

/// Build a trie mapping each sentence in `text`, as a sequence of word
/// tokens, to its occurrence count.
pub fn build_phrase_trie<T>(text: &str, tokenizer: &T) -> PhraseTrie
where
    T: SentenceTokenizer + ?Sized,
{
    let sentences = tokenizer.sentences(text);
    let mut trie = Trie::new();
    for sentence in &sentences {
        let key: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
        let count = trie.get(key.iter().cloned()).unwrap_or(0);
        trie.set(key, count + 1);
    }
    tracing::debug!(
        sentences = sentences.len(),
        distinct = trie.len(),
        "phrase trie built"
    );
    trie
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::PunctSentenceTokenizer;

    #[test]
    fn test_word_counts() {
        let trie = build_word_trie("a an a", &PunctSentenceTokenizer::new());
        assert_eq!(trie.get("a".chars()), Ok(2));
        assert_eq!(trie.get("an".chars()), Ok(1));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_word_counts_span_sentences() {
        let trie = build_word_trie(
            "The cat sat. The cat ran!",
            &PunctSentenceTokenizer::new(),
        );
        assert_eq!(trie.get("the".chars()), Ok(2));
        assert_eq!(trie.get("cat".chars()), Ok(2));
        assert_eq!(trie.get("sat".chars()), Ok(1));
        assert_eq!(trie.get("ran".chars()), Ok(1));
    }

    #[test]
    fn test_phrase_counts() {
        let trie = build_phrase_trie("I am. I am.", &PunctSentenceTokenizer::new());
        let key = ["i".to_string(), "am".to_string()];
        assert_eq!(trie.get(key), Ok(2));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_phrases_are_whole_sentence_keys() {
        let trie = build_phrase_trie(
            "the cat sat. the cat sat on the mat.",
            &PunctSentenceTokenizer::new(),
        );
        // The shorter sentence is a prefix of the longer one; each holds
        // its own count.
        let short: Vec<String> = ["the", "cat", "sat"].map(str::to_string).into();
        assert_eq!(trie.get(short.clone()), Ok(1));
        let long: Vec<String> =
            ["the", "cat", "sat", "on", "the", "mat"].map(str::to_string).into();
        assert_eq!(trie.get(long), Ok(1));
    }

    #[test]
    fn test_empty_text() {
        assert!(build_word_trie("", &PunctSentenceTokenizer::new()).is_empty());
        assert!(build_phrase_trie("", &PunctSentenceTokenizer::new()).is_empty());
    }
}
