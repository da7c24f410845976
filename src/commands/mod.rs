//! Command implementations

pub mod inspect;
pub mod simple;

pub use inspect::{Inspection, inspect_word, print_inspection};
pub use simple::run_simple;

use crate::core::Word;
use crate::wordlists::Dictionary;
use rand::Rng;

/// Pick a target word, honoring a forced length if one was given
///
/// Returns `None` when the dictionary holds no candidate (empty overall,
/// or empty at the forced length).
pub fn pick_target<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    forced_length: Option<usize>,
    rng: &mut R,
) -> Option<Word> {
    match forced_length {
        Some(len) => dictionary.random_word_of_length(len, rng),
        None => dictionary.random_word(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pick_target_honors_forced_length() {
        let dictionary = Dictionary::embedded();
        let mut rng = StdRng::seed_from_u64(11);

        let word = pick_target(&dictionary, Some(5), &mut rng).unwrap();
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn pick_target_without_candidates_is_none() {
        let dictionary = Dictionary::from_words(vec![Word::new("바나나").unwrap()]);
        let mut rng = StdRng::seed_from_u64(11);

        assert!(pick_target(&dictionary, Some(6), &mut rng).is_none());
    }
}
