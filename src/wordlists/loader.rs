//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! constant.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line; blank lines and entries that fail dictionary
/// validation (non-Hangul characters, out-of-range length) are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use kordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse a newline-separated word list
///
/// # Examples
/// ```
/// use kordle::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines("바나나\n사과나무\n");
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::dictionary_entry(trimmed).ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_parses_valid_words() {
        let words = words_from_lines("바나나\n도서관\n사과나무\n");

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "바나나");
        assert_eq!(words[1].text(), "도서관");
        assert_eq!(words[2].text(), "사과나무");
    }

    #[test]
    fn words_from_lines_skips_invalid() {
        // Too short, non-Hangul, and blank lines are all dropped
        let words = words_from_lines("사과\nbanana\n\n바나나\n");

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "바나나");
    }

    #[test]
    fn words_from_lines_trims_whitespace() {
        let words = words_from_lines("  바나나  \n");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "바나나");
    }

    #[test]
    fn words_from_lines_empty_input() {
        assert!(words_from_lines("").is_empty());
    }
}
