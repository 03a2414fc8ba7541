//! Answer-key randomization.
//!
//! Each `GameQuestion` presents its four answers under the letters
//! a, b, c, d in an order drawn once when the game is created. The
//! permutation is stored, not recomputed, so `variants` is stable for
//! the life of the game.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::questions::Question;

/// Presentation letter of an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    /// All letters in presentation order.
    pub const ALL: [Letter; 4] = [Letter::A, Letter::B, Letter::C, Letter::D];

    /// 0-based position in presentation order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase character for this letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Letter::A => 'a',
            Letter::B => 'b',
            Letter::C => 'c',
            Letter::D => 'd',
        }
    }

    /// Parse a letter, accepting either case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Letter::A),
            'b' => Some(Letter::B),
            'c' => Some(Letter::C),
            'd' => Some(Letter::D),
            _ => None,
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error parsing a `Letter` from a string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("not an answer letter: {0:?}")]
pub struct ParseLetterError(pub String);

impl FromStr for Letter {
    type Err = ParseLetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::from_char(c).ok_or_else(|| ParseLetterError(s.to_string())),
            _ => Err(ParseLetterError(s.to_string())),
        }
    }
}

/// Random bijection from answer slots {1,2,3,4} to letters {a,b,c,d}.
///
/// `slots[i]` is the question slot shown under `Letter::ALL[i]`.
/// Slot 1 holds the correct answer, so exactly one letter is correct.
///
/// ## Example
///
/// ```
/// use quiz_engine::game::{AnswerKeyMapper, Letter};
///
/// let key = AnswerKeyMapper::from_slots([2, 1, 4, 3]).unwrap();
/// assert_eq!(key.correct_answer_key(), Letter::B);
/// assert!(key.is_correct(Letter::B));
/// assert!(!key.is_correct(Letter::A));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKeyMapper {
    slots: [u8; 4],
}

impl AnswerKeyMapper {
    /// Draw a fresh uniformly random permutation.
    pub fn random(rng: &mut GameRng) -> Self {
        let mut slots = [1, 2, 3, 4];
        rng.shuffle(&mut slots);
        Self { slots }
    }

    /// Build from an explicit slot assignment for letters a, b, c, d.
    ///
    /// Returns `None` unless `slots` is a permutation of 1..=4.
    #[must_use]
    pub fn from_slots(slots: [u8; 4]) -> Option<Self> {
        let mut sorted = slots;
        sorted.sort_unstable();
        (sorted == [1, 2, 3, 4]).then_some(Self { slots })
    }

    /// Slot shown under each letter, in letter order.
    #[must_use]
    pub fn slots(&self) -> [u8; 4] {
        self.slots
    }

    /// Slot shown under `letter`.
    #[must_use]
    pub fn slot_of(&self, letter: Letter) -> u8 {
        self.slots[letter.index()]
    }

    /// Answer texts keyed by letter, in letter order.
    #[must_use]
    pub fn variants<'q>(&self, question: &'q Question) -> [(Letter, &'q str); 4] {
        Letter::ALL.map(|letter| {
            let text = question
                .answer(self.slot_of(letter))
                .unwrap_or_default();
            (letter, text)
        })
    }

    /// The letter showing slot 1.
    #[must_use]
    pub fn correct_answer_key(&self) -> Letter {
        Letter::ALL
            .into_iter()
            .find(|&l| self.slot_of(l) == 1)
            .unwrap_or(Letter::A)
    }

    /// Whether `letter` is the correct answer.
    #[must_use]
    pub fn is_correct(&self, letter: Letter) -> bool {
        letter == self.correct_answer_key()
    }

    /// The three incorrect letters, in letter order.
    #[must_use]
    pub fn wrong_letters(&self) -> [Letter; 3] {
        let correct = self.correct_answer_key();
        let mut out = [Letter::A; 3];
        for (slot, letter) in out
            .iter_mut()
            .zip(Letter::ALL.into_iter().filter(|&l| l != correct))
        {
            *slot = letter;
        }
        out
    }
}
