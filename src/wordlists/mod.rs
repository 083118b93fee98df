//! Word lists for Word-mode secrets
//!
//! Provides the embedded lexicon and a [`Lexicon`] type that buckets words
//! by length for fast secret selection.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use rustc_hash::FxHashMap;

/// Uppercase words grouped by length
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    by_length: FxHashMap<usize, Vec<String>>,
}

impl Lexicon {
    /// Build a lexicon from arbitrary words
    ///
    /// Words are trimmed and upper-cased. Anything that isn't purely ASCII
    /// letters is skipped, and duplicates are dropped.
    ///
    /// # Examples
    /// ```
    /// use traffic_light::wordlists::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["crane", "Slate", "it's", "crane"]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert_eq!(lexicon.words_of_length(5), &["CRANE", "SLATE"]);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_length: FxHashMap<usize, Vec<String>> = FxHashMap::default();

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            by_length
                .entry(word.len())
                .or_default()
                .push(word.to_ascii_uppercase());
        }

        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
            bucket.dedup();
        }

        Self { by_length }
    }

    /// The lexicon compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS)
    }

    /// All words with exactly `length` letters, sorted
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SECRET_LENGTH_RANGE;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_lexicon_covers_every_secret_length() {
        let lexicon = Lexicon::embedded();
        for length in SECRET_LENGTH_RANGE {
            assert!(
                !lexicon.words_of_length(length).is_empty(),
                "No {length}-letter words embedded"
            );
        }
        assert_eq!(lexicon.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_uppercased() {
        let lexicon = Lexicon::embedded();
        assert!(lexicon.words_of_length(5).iter().any(|w| w == "CRANE"));
        assert!(!lexicon.words_of_length(5).iter().any(|w| w == "crane"));
    }

    #[test]
    fn from_words_skips_invalid_and_duplicates() {
        let lexicon = Lexicon::from_words(["ant", "ANT", "x-ray", "", "  bee  ", "caf\u{e9}"]);
        assert_eq!(lexicon.words_of_length(3), &["ANT", "BEE"]);
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn empty_lexicon() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.len(), 0);
        assert!(lexicon.words_of_length(5).is_empty());
    }
}
