//! Two-player match state
//!
//! One [`Session`] owns a hidden target word, both players' guess
//! histories, the turn pointer, and the terminal phase. All mutation goes
//! through [`Session::submit`] and [`Session::reset`]; everything else is
//! read-only access for rendering.

use crate::core::{Hints, TileSet, Word, jamo};
use crate::wordlists::Dictionary;
use rand::Rng;
use std::fmt;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing player
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// History index for this player
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "1"),
            Self::Two => write!(f, "2"),
        }
    }
}

/// Match phase
///
/// `Drawn` is declared for completeness but no transition currently
/// produces it: the game enforces no attempt limit, so players submit
/// until one hits the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won(Player),
    Drawn,
}

/// A scored guess, immutable once appended to a player's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub word: Word,
    pub hints: Hints,
}

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub hints: Hints,
    pub won: bool,
}

/// Rejected submission; the session state is unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The match already ended
    Finished,
    /// At least one cell is blank, or the row length is wrong
    Incomplete,
    /// A filled cell holds something other than a composed syllable
    NotHangul(char),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "The game is already over"),
            Self::Incomplete => write!(f, "Fill every cell before submitting"),
            Self::NotHangul(c) => write!(f, "'{c}' is not a composed Hangul syllable"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// A two-player match against one hidden target word
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    tiles: TileSet,
    current: Player,
    histories: [Vec<Attempt>; 2],
    phase: Phase,
}

impl Session {
    /// Start a match with a known target
    ///
    /// The tile vocabulary is derived once here; it never changes for the
    /// session's lifetime.
    #[must_use]
    pub fn new(target: Word) -> Self {
        let tiles = TileSet::from_word(&target);
        Self {
            target,
            tiles,
            current: Player::One,
            histories: [Vec::new(), Vec::new()],
            phase: Phase::InProgress,
        }
    }

    /// Start a match with a random dictionary word
    ///
    /// Returns `None` when the dictionary has no words at all.
    pub fn random<R: Rng + ?Sized>(dictionary: &Dictionary, rng: &mut R) -> Option<Self> {
        dictionary.random_word(rng).map(Self::new)
    }

    /// Discard all state and start over with a new target
    pub fn reset(&mut self, target: Word) {
        *self = Self::new(target);
    }

    /// The hidden target word
    ///
    /// Rendering reveals it only once the match is over.
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// The tile vocabulary for display
    #[must_use]
    pub fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// The player whose turn it is
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// A player's guess history, oldest first
    #[must_use]
    pub fn history(&self, player: Player) -> &[Attempt] {
        &self.histories[player.index()]
    }

    /// Current match phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the match has reached a terminal phase
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self.phase, Phase::InProgress)
    }

    /// The winner, if the match has one
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Won(player) => Some(player),
            Phase::InProgress | Phase::Drawn => None,
        }
    }

    /// Submit the current player's guess row
    ///
    /// On success the attempt is appended to the submitting player's
    /// history; an exact match ends the match with that player as winner,
    /// anything else passes the turn. Rejections leave the session
    /// untouched so the caller can surface the message and let the player
    /// fix the row.
    ///
    /// # Errors
    /// - [`SubmitError::Finished`] after the match ended
    /// - [`SubmitError::Incomplete`] for blank cells or a wrong-length row
    /// - [`SubmitError::NotHangul`] for cells outside the syllable range
    pub fn submit(&mut self, cells: &[Option<char>]) -> Result<Submission, SubmitError> {
        if self.is_over() {
            return Err(SubmitError::Finished);
        }

        if cells.len() != self.target.len() || cells.iter().any(Option::is_none) {
            return Err(SubmitError::Incomplete);
        }

        if let Some(&bad) = cells.iter().flatten().find(|c| !jamo::is_syllable(**c)) {
            return Err(SubmitError::NotHangul(bad));
        }

        let text: String = cells.iter().flatten().collect();
        let guess = Word::new(text).map_err(|_| SubmitError::Incomplete)?;

        let hints = Hints::score(&guess, &self.target);
        let won = guess == self.target;

        self.histories[self.current.index()].push(Attempt {
            word: guess,
            hints: hints.clone(),
        });

        if won {
            self.phase = Phase::Won(self.current);
        } else {
            self.current = self.current.other();
        }

        Ok(Submission { hints, won })
    }
}
