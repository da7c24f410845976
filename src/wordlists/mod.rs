//! Dictionary of target words, bucketed by syllable length
//!
//! Provides the embedded word list compiled into the binary plus loading of
//! custom lists from files. Target selection picks a length uniformly from
//! the supported range, then a word uniformly from that bucket.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Words grouped by syllable length
///
/// Only lengths within [`Word::MIN_LEN`]..=[`Word::MAX_LEN`] are kept;
/// anything else is dropped at construction.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    buckets: FxHashMap<usize, Vec<Word>>,
}

impl Dictionary {
    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(
            WORDS
                .iter()
                .filter_map(|&text| Word::dictionary_entry(text).ok())
                .collect(),
        )
    }

    /// Build a dictionary from already-validated words
    ///
    /// Words outside the supported length range are skipped.
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        let mut buckets: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        for word in words {
            if (Word::MIN_LEN..=Word::MAX_LEN).contains(&word.len()) {
                buckets.entry(word.len()).or_default().push(word);
            }
        }
        Self { buckets }
    }

    /// All words of one syllable length
    #[must_use]
    pub fn words_of_length(&self, len: usize) -> &[Word] {
        self.buckets.get(&len).map_or(&[], Vec::as_slice)
    }

    /// Total word count across all buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether no bucket holds any word
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }

    /// Pick a random word: uniform length first, then uniform word
    ///
    /// A length whose bucket is empty triggers a fresh pick, so sparse
    /// custom lists still work. Returns `None` only when the dictionary is
    /// empty.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        if self.is_empty() {
            return None;
        }

        loop {
            let len = rng.random_range(Word::MIN_LEN..=Word::MAX_LEN);
            if let Some(word) = self.words_of_length(len).choose(rng) {
                return Some(word.clone());
            }
        }
    }

    /// Pick a random word of one specific length
    pub fn random_word_of_length<R: Rng + ?Sized>(
        &self,
        len: usize,
        rng: &mut R,
    ) -> Option<Word> {
        self.words_of_length(len).choose(rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &text in WORDS {
            let word = Word::dictionary_entry(text)
                .unwrap_or_else(|e| panic!("embedded word '{text}' invalid: {e}"));
            assert!(
                (Word::MIN_LEN..=Word::MAX_LEN).contains(&word.len()),
                "embedded word '{text}' has length {}",
                word.len()
            );
        }
    }

    #[test]
    fn embedded_covers_every_length() {
        let dictionary = Dictionary::embedded();
        for len in Word::MIN_LEN..=Word::MAX_LEN {
            assert!(
                !dictionary.words_of_length(len).is_empty(),
                "no embedded words of length {len}"
            );
        }
    }

    #[test]
    fn buckets_group_by_length() {
        let words = vec![
            Word::new("바나나").unwrap(),
            Word::new("소나무").unwrap(),
            Word::new("사과나무").unwrap(),
        ];
        let dictionary = Dictionary::from_words(words);

        assert_eq!(dictionary.words_of_length(3).len(), 2);
        assert_eq!(dictionary.words_of_length(4).len(), 1);
        assert_eq!(dictionary.words_of_length(5).len(), 0);
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn random_word_retries_past_empty_buckets() {
        // Only one bucket is populated, so every pick must land there
        let words = vec![Word::new("바나나").unwrap()];
        let dictionary = Dictionary::from_words(words);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let word = dictionary.random_word(&mut rng).unwrap();
            assert_eq!(word.text(), "바나나");
        }
    }

    #[test]
    fn random_word_from_empty_dictionary_is_none() {
        let dictionary = Dictionary::from_words(Vec::new());
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(dictionary.random_word(&mut rng), None);
    }

    #[test]
    fn random_word_of_length_respects_bucket() {
        let dictionary = Dictionary::embedded();
        let mut rng = StdRng::seed_from_u64(7);

        for len in Word::MIN_LEN..=Word::MAX_LEN {
            let word = dictionary.random_word_of_length(len, &mut rng).unwrap();
            assert_eq!(word.len(), len);
        }
        assert_eq!(dictionary.random_word_of_length(9, &mut rng), None);
    }
}
