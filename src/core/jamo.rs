//! Hangul syllable codec
//!
//! A composed syllable in the range U+AC00..=U+D7A3 encodes an initial
//! consonant (초성), a medial vowel (중성), and an optional final consonant
//! (종성) as `0xAC00 + (initial × 21 + medial) × 28 + final`, where final
//! index 0 means "no final". [`decompose`] and [`compose`] are exact
//! inverses over that range.

/// First code point of the composed-syllable block (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// Last code point of the composed-syllable block (힣)
pub const SYLLABLE_LAST: u32 = 0xD7A3;

/// Number of initial consonants
pub const INITIAL_COUNT: u32 = 19;

/// Number of medial vowels
pub const MEDIAL_COUNT: u32 = 21;

/// Number of final slots, including the empty slot at index 0
pub const FINAL_COUNT: u32 = 28;

/// Initial consonants (초성), in code-point order
pub const INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Medial vowels (중성), in code-point order
pub const MEDIALS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Final consonants (종성), in code-point order
///
/// Index 0 of the final slot means "no final", so this table starts at
/// syllable final index 1.
pub const FINALS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// A syllable broken into its positional components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    /// Initial consonant (초성)
    pub initial: char,
    /// Medial vowel (중성)
    pub medial: char,
    /// Final consonant (종성), if any
    pub coda: Option<char>,
}

/// Check whether a character lies in the composed-syllable range
#[inline]
#[must_use]
pub const fn is_syllable(c: char) -> bool {
    let code = c as u32;
    code >= SYLLABLE_BASE && code <= SYLLABLE_LAST
}

/// Decompose a composed syllable into its jamo components
///
/// Returns `None` for any character outside the composed-syllable range.
/// That is an ordinary classification outcome, not an error; callers skip
/// such characters.
///
/// # Examples
/// ```
/// use kordle::core::jamo::{Syllable, decompose};
///
/// assert_eq!(
///     decompose('강'),
///     Some(Syllable { initial: 'ㄱ', medial: 'ㅏ', coda: Some('ㅇ') })
/// );
/// assert_eq!(
///     decompose('무'),
///     Some(Syllable { initial: 'ㅁ', medial: 'ㅜ', coda: None })
/// );
/// assert_eq!(decompose('a'), None);
/// ```
#[must_use]
pub fn decompose(c: char) -> Option<Syllable> {
    if !is_syllable(c) {
        return None;
    }

    let index = c as u32 - SYLLABLE_BASE;
    let initial = index / (MEDIAL_COUNT * FINAL_COUNT);
    let medial = (index % (MEDIAL_COUNT * FINAL_COUNT)) / FINAL_COUNT;
    let coda = index % FINAL_COUNT;

    Some(Syllable {
        initial: INITIALS[initial as usize],
        medial: MEDIALS[medial as usize],
        coda: if coda == 0 {
            None
        } else {
            Some(FINALS[coda as usize - 1])
        },
    })
}

/// Compose jamo components back into a syllable
///
/// Inverse of [`decompose`]: returns `None` if any component is not a
/// member of its positional table.
///
/// # Examples
/// ```
/// use kordle::core::jamo::compose;
///
/// assert_eq!(compose('ㄱ', 'ㅏ', Some('ㅇ')), Some('강'));
/// assert_eq!(compose('ㅁ', 'ㅜ', None), Some('무'));
/// assert_eq!(compose('ㅏ', 'ㅏ', None), None);
/// ```
#[must_use]
pub fn compose(initial: char, medial: char, coda: Option<char>) -> Option<char> {
    let initial = INITIALS.iter().position(|&j| j == initial)? as u32;
    let medial = MEDIALS.iter().position(|&j| j == medial)? as u32;
    let coda = match coda {
        None => 0,
        Some(c) => FINALS.iter().position(|&j| j == c)? as u32 + 1,
    };

    let code = SYLLABLE_BASE + (initial * MEDIAL_COUNT + medial) * FINAL_COUNT + coda;
    char::from_u32(code)
}
