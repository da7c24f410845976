//! Word inspection command
//!
//! Decomposes each syllable of a word and shows the tile vocabulary the
//! word would put on the board.

use crate::core::jamo::{Syllable, decompose};
use crate::core::{TileSet, Word, WordError};
use crate::output::tile_row;
use colored::Colorize;

/// Decomposition report for one word
#[derive(Debug, Clone)]
pub struct Inspection {
    pub word: Word,
    pub syllables: Vec<(char, Syllable)>,
    pub tiles: TileSet,
}

/// Decompose a word and derive its tile vocabulary
///
/// # Errors
/// Returns `WordError` if the text is empty or contains anything outside
/// the composed-syllable range.
pub fn inspect_word(text: &str) -> Result<Inspection, WordError> {
    let word = Word::new(text)?;

    let syllables = word
        .chars()
        .iter()
        .filter_map(|&c| decompose(c).map(|syllable| (c, syllable)))
        .collect();

    let tiles = TileSet::from_word(&word);

    Ok(Inspection {
        word,
        syllables,
        tiles,
    })
}

/// Print an inspection report
pub fn print_inspection(inspection: &Inspection) {
    println!(
        "\n{} ({} syllables)\n",
        inspection.word.text().bright_white().bold(),
        inspection.word.len()
    );

    for (syllable, parts) in &inspection.syllables {
        let jamo = match parts.coda {
            Some(coda) => format!("{} + {} + {}", parts.initial, parts.medial, coda),
            None => format!("{} + {}", parts.initial, parts.medial),
        };
        println!("  {}  =  {}", syllable.to_string().bright_cyan(), jamo);
    }

    println!(
        "\n  Consonant tiles: {}",
        tile_row(&inspection.tiles.consonants).bright_yellow()
    );
    println!(
        "  Vowel tiles:     {}",
        tile_row(&inspection.tiles.vowels).bright_yellow()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_decomposes_every_syllable() {
        let inspection = inspect_word("강산").unwrap();

        assert_eq!(inspection.syllables.len(), 2);
        let (c, parts) = inspection.syllables[0];
        assert_eq!(c, '강');
        assert_eq!(parts.initial, 'ㄱ');
        assert_eq!(parts.medial, 'ㅏ');
        assert_eq!(parts.coda, Some('ㅇ'));
    }

    #[test]
    fn inspect_collects_tiles() {
        let inspection = inspect_word("사과").unwrap();
        assert_eq!(inspection.tiles.consonants, vec!['ㅅ', 'ㄱ']);
        assert_eq!(inspection.tiles.vowels, vec!['ㅏ', 'ㅏ', 'ㅏ']);
    }

    #[test]
    fn inspect_rejects_non_hangul() {
        assert!(inspect_word("hello").is_err());
        assert!(inspect_word("").is_err());
    }
}
