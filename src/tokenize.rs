//! Sentence segmentation, the external collaborator of the corpus builders.
//!
//! The engine itself does not define how raw text breaks into sentences;
//! it consumes a [`SentenceTokenizer`]. The default implementation here
//! uses standard punctuation heuristics. Callers with their own
//! segmentation (a different language, pre-split input) implement the
//! trait or pass a plain function.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of sentence-terminating punctuation.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence boundary pattern compiles"));

/// Everything that is not part of a word token after lowercasing.
/// Apostrophes stay so contractions survive as single tokens.
static NON_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9'\s]").expect("token filter pattern compiles"));

/// Splits raw text into an ordered sequence of sentences.
///
/// Each returned sentence is a whitespace-normalized string of word
/// tokens; the corpus builders split it on whitespace themselves.
pub trait SentenceTokenizer {
    fn sentences(&self, text: &str) -> Vec<String>;
}

/// Any plain function over text is a tokenizer.
impl<F> SentenceTokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn sentences(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Default tokenizer: lowercases, splits sentences on `.`/`!`/`?` runs,
/// and strips characters other than ASCII alphanumerics, apostrophes, and
/// whitespace. Empty sentences are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct PunctSentenceTokenizer;

impl PunctSentenceTokenizer {
    pub fn new() -> Self {
        PunctSentenceTokenizer
    }
}

impl SentenceTokenizer for PunctSentenceTokenizer {
    fn sentences(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        SENTENCE_BOUNDARY
            .split(&lowered)
            .map(|raw| {
                let cleaned = NON_TOKEN.replace_all(raw, "");
                cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
            })
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }
}
