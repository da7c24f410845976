//! Tile extraction from a target word
//!
//! The tile panel shows every primitive jamo a player has to work with:
//! each syllable of the target is decomposed, compound jamo are expanded
//! into their primitive parts, and rotation-equivalent vowels are collapsed
//! onto one representative (a single physical tile covers ㅏ/ㅓ/ㅗ/ㅜ by
//! rotation, likewise ㅑ/ㅕ/ㅛ/ㅠ and ㅡ/ㅣ).
//!
//! The pair tables are fixed domain data encoding the game's combination
//! rules, not derived from the Unicode jamo composition scheme. Several
//! vowel entries differ from the canonical Unicode pairs; they must stay
//! exactly as written.

use super::jamo::decompose;
use super::word::Word;

/// Compound consonants and their primitive parts
const CONSONANT_PAIRS: [(char, [char; 2]); 16] = [
    ('ㄲ', ['ㄱ', 'ㄱ']),
    ('ㄳ', ['ㄱ', 'ㅅ']),
    ('ㄵ', ['ㄴ', 'ㅈ']),
    ('ㄶ', ['ㄴ', 'ㅎ']),
    ('ㄺ', ['ㄹ', 'ㄱ']),
    ('ㄻ', ['ㄹ', 'ㅁ']),
    ('ㄼ', ['ㄹ', 'ㅂ']),
    ('ㄽ', ['ㄹ', 'ㅅ']),
    ('ㄾ', ['ㄹ', 'ㅌ']),
    ('ㄿ', ['ㄹ', 'ㅍ']),
    ('ㅀ', ['ㄹ', 'ㅎ']),
    ('ㅄ', ['ㅂ', 'ㅅ']),
    ('ㅆ', ['ㅅ', 'ㅅ']),
    ('ㄸ', ['ㄷ', 'ㄷ']),
    ('ㅃ', ['ㅂ', 'ㅂ']),
    ('ㅉ', ['ㅈ', 'ㅈ']),
];

/// Compound vowels and their parts
///
/// ㅙ and ㅞ expand to pairs containing another compound, so expansion
/// recurses one level deeper for them.
const VOWEL_PAIRS: [(char, [char; 2]); 11] = [
    ('ㅢ', ['ㅡ', 'ㅡ']),
    ('ㅐ', ['ㅏ', 'ㅡ']),
    ('ㅖ', ['ㅕ', 'ㅡ']),
    ('ㅒ', ['ㅕ', 'ㅡ']),
    ('ㅔ', ['ㅓ', 'ㅣ']),
    ('ㅘ', ['ㅗ', 'ㅏ']),
    ('ㅙ', ['ㅗ', 'ㅐ']),
    ('ㅚ', ['ㅗ', 'ㅣ']),
    ('ㅝ', ['ㅜ', 'ㅓ']),
    ('ㅞ', ['ㅜ', 'ㅔ']),
    ('ㅟ', ['ㅜ', 'ㅣ']),
];

/// Rotation groups of primitive vowels, representative first
const VOWEL_GROUPS: [(char, &[char]); 3] = [
    ('ㅏ', &['ㅏ', 'ㅓ', 'ㅗ', 'ㅜ']),
    ('ㅑ', &['ㅑ', 'ㅕ', 'ㅛ', 'ㅠ']),
    ('ㅡ', &['ㅡ', 'ㅣ']),
];

/// The tile vocabulary derived from a target word
///
/// Both lists are multisets in insertion order: one tile per occurrence of
/// each primitive component, first syllable's tiles first. Initial and
/// final consonants share the consonant list. Computed once per session
/// and read-only afterwards; display code sorts its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    pub consonants: Vec<char>,
    pub vowels: Vec<char>,
}

impl TileSet {
    /// Extract the tile vocabulary from a word
    ///
    /// Every syllable contributes its expanded initial to `consonants`, its
    /// expanded and normalized medial to `vowels`, and, when present, its
    /// expanded final to `consonants`. Characters that do not decompose are
    /// skipped.
    ///
    /// # Examples
    /// ```
    /// use kordle::core::{TileSet, Word};
    ///
    /// let tiles = TileSet::from_word(&Word::new("사과").unwrap());
    /// assert_eq!(tiles.consonants, vec!['ㅅ', 'ㄱ']);
    /// // ㅘ expands to ㅗ+ㅏ and both normalize to ㅏ
    /// assert_eq!(tiles.vowels, vec!['ㅏ', 'ㅏ', 'ㅏ']);
    /// ```
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        let mut consonants = Vec::new();
        let mut vowels = Vec::new();

        for &c in word.chars() {
            let Some(syllable) = decompose(c) else {
                continue;
            };

            expand_into(syllable.initial, &CONSONANT_PAIRS, &mut consonants);

            for v in expand_vowel(syllable.medial) {
                vowels.push(normalize_vowel(v));
            }

            if let Some(coda) = syllable.coda {
                expand_into(coda, &CONSONANT_PAIRS, &mut consonants);
            }
        }

        Self {
            consonants,
            vowels,
        }
    }
}

/// Expand a compound consonant into primitive consonants
///
/// Non-compound consonants come back as themselves.
#[must_use]
pub fn expand_consonant(consonant: char) -> Vec<char> {
    let mut out = Vec::new();
    expand_into(consonant, &CONSONANT_PAIRS, &mut out);
    out
}

/// Expand a compound vowel into primitive vowels
///
/// Non-compound vowels come back as themselves.
#[must_use]
pub fn expand_vowel(vowel: char) -> Vec<char> {
    let mut out = Vec::new();
    expand_into(vowel, &VOWEL_PAIRS, &mut out);
    out
}

/// Normalize a vowel to its rotation-group representative
///
/// Vowels outside every group are returned unchanged. Consonants never
/// normalize.
#[must_use]
pub fn normalize_vowel(vowel: char) -> char {
    for (representative, members) in VOWEL_GROUPS {
        if members.contains(&vowel) {
            return representative;
        }
    }
    vowel
}

/// Recursive left-to-right expansion through a pair table
///
/// The tables are acyclic (a compound only expands toward simpler entries),
/// so recursion bottoms out within two levels.
fn expand_into(component: char, table: &[(char, [char; 2])], out: &mut Vec<char>) {
    match table.iter().find(|(key, _)| *key == component) {
        Some((_, pair)) => {
            for &part in pair {
                expand_into(part, table, out);
            }
        }
        None => out.push(component),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn primitive_components_expand_to_themselves() {
        assert_eq!(expand_consonant('ㄱ'), vec!['ㄱ']);
        assert_eq!(expand_consonant('ㅎ'), vec!['ㅎ']);
        assert_eq!(expand_vowel('ㅏ'), vec!['ㅏ']);
        assert_eq!(expand_vowel('ㅣ'), vec!['ㅣ']);
    }

    #[test]
    fn compound_consonants_expand_once() {
        assert_eq!(expand_consonant('ㄲ'), vec!['ㄱ', 'ㄱ']);
        assert_eq!(expand_consonant('ㅄ'), vec!['ㅂ', 'ㅅ']);
        assert_eq!(expand_consonant('ㄾ'), vec!['ㄹ', 'ㅌ']);
    }

    #[test]
    fn table_entries_are_preserved_verbatim() {
        // These pairs are the game's historical rules, not the Unicode
        // canonical decompositions; regressions here change gameplay.
        assert_eq!(expand_vowel('ㅐ'), vec!['ㅏ', 'ㅡ']);
        assert_eq!(expand_vowel('ㅢ'), vec!['ㅡ', 'ㅡ']);
        assert_eq!(expand_vowel('ㅖ'), vec!['ㅕ', 'ㅡ']);
        assert_eq!(expand_vowel('ㅒ'), vec!['ㅕ', 'ㅡ']);
    }

    #[test]
    fn nested_vowels_expand_recursively() {
        // ㅙ → ㅗ + ㅐ → ㅗ + ㅏ + ㅡ
        assert_eq!(expand_vowel('ㅙ'), vec!['ㅗ', 'ㅏ', 'ㅡ']);
        // ㅞ → ㅜ + ㅔ → ㅜ + ㅓ + ㅣ
        assert_eq!(expand_vowel('ㅞ'), vec!['ㅜ', 'ㅓ', 'ㅣ']);
    }

    #[test]
    fn rotation_groups_are_disjoint() {
        let mut seen = Vec::new();
        for (_, members) in VOWEL_GROUPS {
            for &member in members {
                assert!(
                    !seen.contains(&member),
                    "{member} belongs to more than one rotation group"
                );
                seen.push(member);
            }
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        for v in ['ㅏ', 'ㅓ', 'ㅗ', 'ㅜ', 'ㅑ', 'ㅕ', 'ㅛ', 'ㅠ', 'ㅡ', 'ㅣ', 'ㅐ', 'ㅘ'] {
            assert_eq!(normalize_vowel(normalize_vowel(v)), normalize_vowel(v));
        }
    }

    #[test]
    fn normalization_picks_representatives() {
        assert_eq!(normalize_vowel('ㅓ'), 'ㅏ');
        assert_eq!(normalize_vowel('ㅗ'), 'ㅏ');
        assert_eq!(normalize_vowel('ㅠ'), 'ㅑ');
        assert_eq!(normalize_vowel('ㅣ'), 'ㅡ');
        // Compounds are not group members
        assert_eq!(normalize_vowel('ㅐ'), 'ㅐ');
        assert_eq!(normalize_vowel('ㅘ'), 'ㅘ');
    }

    #[test]
    fn tiles_from_word_with_compound_coda() {
        // 없 = ㅇ + ㅓ + ㅄ, 다 = ㄷ + ㅏ
        let tiles = TileSet::from_word(&word("없다다"));
        assert_eq!(tiles.consonants, vec!['ㅇ', 'ㅂ', 'ㅅ', 'ㄷ', 'ㄷ']);
        assert_eq!(tiles.vowels, vec!['ㅏ', 'ㅏ', 'ㅏ']);
    }

    #[test]
    fn tiles_preserve_duplicates_and_order() {
        // 사과나무: ㅅ, ㄱ(과), ㄴ, ㅁ as consonants;
        // every medial normalizes to ㅏ, with ㅘ contributing two tiles
        let tiles = TileSet::from_word(&word("사과나무"));
        assert_eq!(tiles.consonants, vec!['ㅅ', 'ㄱ', 'ㄴ', 'ㅁ']);
        assert_eq!(tiles.vowels, vec!['ㅏ', 'ㅏ', 'ㅏ', 'ㅏ', 'ㅏ']);
    }

    #[test]
    fn tile_counts_match_component_occurrences() {
        // 진달래: 진 = ㅈㅣㄴ, 달 = ㄷㅏㄹ, 래 = ㄹㅐ → ㄹ + (ㅏㅡ)
        let tiles = TileSet::from_word(&word("진달래"));
        assert_eq!(tiles.consonants, vec!['ㅈ', 'ㄴ', 'ㄷ', 'ㄹ', 'ㄹ']);
        // ㅣ→ㅡ, ㅏ→ㅏ, ㅐ→(ㅏ, ㅡ)→(ㅏ, ㅡ)
        assert_eq!(tiles.vowels, vec!['ㅡ', 'ㅏ', 'ㅏ', 'ㅡ']);
    }
}
