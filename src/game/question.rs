//! Per-game question instances.
//!
//! A `GameQuestion` pairs a shared `Question` with the answer-key
//! permutation drawn for one game, and records the hints used on it.
//! Identity (question, level, permutation) is fixed at creation; only
//! the hint record grows.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::answer_key::{AnswerKeyMapper, Letter};
use super::hints::{HintKind, HintPayload};
use crate::error::{EngineError, Result};
use crate::questions::{Level, Question};

/// One question of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameQuestion {
    question: Arc<Question>,
    key: AnswerKeyMapper,
    /// At most one payload per kind. SmallVec since there are only three kinds.
    hints: SmallVec<[HintPayload; 3]>,
}

impl GameQuestion {
    /// Create a question instance with the given answer key.
    #[must_use]
    pub fn new(question: Arc<Question>, key: AnswerKeyMapper) -> Self {
        Self {
            question,
            key,
            hints: SmallVec::new(),
        }
    }

    /// The underlying question record.
    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Question text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.question.text
    }

    /// Question level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.question.level
    }

    /// The answer-key permutation.
    #[must_use]
    pub fn answer_key(&self) -> &AnswerKeyMapper {
        &self.key
    }

    /// Answer texts keyed by letter.
    #[must_use]
    pub fn variants(&self) -> [(Letter, &str); 4] {
        self.key.variants(&self.question)
    }

    /// The correct letter. For verification only; never show it to players.
    #[must_use]
    pub fn correct_answer_key(&self) -> Letter {
        self.key.correct_answer_key()
    }

    /// Whether `letter` is the correct answer.
    #[must_use]
    pub fn is_correct(&self, letter: Letter) -> bool {
        self.key.is_correct(letter)
    }

    /// Payload of a used hint.
    #[must_use]
    pub fn hint(&self, kind: HintKind) -> Option<&HintPayload> {
        self.hints.iter().find(|h| h.kind() == kind)
    }

    /// Whether a hint kind was used on this question.
    #[must_use]
    pub fn has_used(&self, kind: HintKind) -> bool {
        self.hint(kind).is_some()
    }

    /// All used hints, in the order they were used.
    pub fn hints(&self) -> impl Iterator<Item = &HintPayload> {
        self.hints.iter()
    }

    /// Store a hint payload.
    ///
    /// Fails with `AlreadyUsed` if this kind is already recorded; the
    /// stored payload is left untouched.
    pub fn record_hint(&mut self, payload: HintPayload) -> Result<&HintPayload> {
        let kind = payload.kind();
        if self.has_used(kind) {
            return Err(EngineError::AlreadyUsed { kind });
        }
        self.hints.push(payload);
        Ok(&self.hints[self.hints.len() - 1])
    }
}
