//! Question records - static trivia data.
//!
//! `Question` holds the immutable text and four answers of a trivia
//! question. By convention the first answer is the correct one; the
//! per-game presentation order lives in `GameQuestion`, never here.

use serde::{Deserialize, Serialize};

/// Unique identifier for a question record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

impl QuestionId {
    /// Create a new question ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Question({})", self.0)
    }
}

/// Difficulty rank of a question, 0-based.
///
/// Also the index into a game's question sequence and the prize table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Level(pub u8);

impl Level {
    /// Create a new level.
    #[must_use]
    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    /// Get the level as an index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

/// Immutable trivia question.
///
/// ## Example
///
/// ```
/// use quiz_engine::questions::{Level, Question, QuestionId};
///
/// let q = Question::new(
///     QuestionId::new(1),
///     Level::new(0),
///     "What colour is the sky?",
///     ["Blue", "Green", "Red", "Yellow"],
/// );
///
/// assert_eq!(q.correct_answer(), "Blue");
/// assert_eq!(q.answer(3), Some("Red"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier for this question.
    pub id: QuestionId,

    /// Difficulty level.
    pub level: Level,

    /// Question text.
    pub text: String,

    /// Answer texts in canonical slot order. Slot 1 (index 0) is correct.
    pub answers: [String; 4],
}

impl Question {
    /// Create a new question. The first answer must be the correct one.
    pub fn new(
        id: QuestionId,
        level: Level,
        text: impl Into<String>,
        answers: [impl Into<String>; 4],
    ) -> Self {
        Self {
            id,
            level,
            text: text.into(),
            answers: answers.map(Into::into),
        }
    }

    /// Answer text for a 1-based slot.
    #[must_use]
    pub fn answer(&self, slot: u8) -> Option<&str> {
        usize::from(slot)
            .checked_sub(1)
            .and_then(|i| self.answers.get(i))
            .map(String::as_str)
    }

    /// Text of the correct answer (slot 1).
    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.answers[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(QuestionId::new(7), Level::new(2), "2 + 2?", ["4", "3", "5", "22"])
    }

    #[test]
    fn test_ids_display() {
        assert_eq!(format!("{}", QuestionId::new(3)), "Question(3)");
        assert_eq!(format!("{}", Level::new(14)), "Level(14)");
        assert_eq!(Level::new(14).index(), 14);
    }

    #[test]
    fn test_answer_slots_are_one_based() {
        let q = sample();
        assert_eq!(q.answer(0), None);
        assert_eq!(q.answer(1), Some("4"));
        assert_eq!(q.answer(4), Some("22"));
        assert_eq!(q.answer(5), None);
    }

    #[test]
    fn test_correct_answer_is_first_slot() {
        assert_eq!(sample().correct_answer(), "4");
    }
}
