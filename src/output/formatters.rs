//! Formatting utilities for terminal output

use crate::core::{Hint, Hints, Word};
use colored::Colorize;

/// Format a scored guess as a row of colored cells
///
/// Correct cells render white-on-green, present cells black-on-yellow,
/// absent cells white-on-red, matching the board colors of the TUI.
#[must_use]
pub fn guess_row(word: &Word, hints: &Hints) -> String {
    word.chars()
        .iter()
        .zip(hints.as_slice())
        .map(|(&c, &hint)| {
            let cell = format!(" {c} ");
            match hint {
                Hint::Correct => cell.white().bold().on_green().to_string(),
                Hint::Present => cell.black().bold().on_yellow().to_string(),
                Hint::Absent => cell.white().bold().on_red().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a tile multiset for display
///
/// Tiles are sorted so identical ones group together, the way the tile
/// panel presents them; the underlying multiset stays untouched.
#[must_use]
pub fn tile_row(tiles: &[char]) -> String {
    let mut sorted: Vec<char> = tiles.to_vec();
    sorted.sort_unstable();

    sorted
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_row_sorts_and_keeps_duplicates() {
        assert_eq!(tile_row(&['ㅅ', 'ㄱ', 'ㅅ', 'ㄴ']), "ㄱ ㄴ ㅅ ㅅ");
    }

    #[test]
    fn tile_row_empty() {
        assert_eq!(tile_row(&[]), "");
    }

    #[test]
    fn guess_row_contains_every_syllable() {
        let target = Word::new("사과나무").unwrap();
        let guess = Word::new("사랑나라").unwrap();
        let row = guess_row(&guess, &Hints::score(&guess, &target));

        for c in ['사', '랑', '나', '라'] {
            assert!(row.contains(c), "row missing {c}");
        }
    }
}
