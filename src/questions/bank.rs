//! Question bank for per-level lookup.
//!
//! The engine only needs `QuestionBank::pick`. Storage is the bank's
//! business: `InMemoryQuestionBank` keeps questions grouped by level and
//! is enough for tests and small deployments.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::question::{Level, Question, QuestionId};
use crate::core::GameRng;
use crate::error::BankError;

/// Source of questions for new games.
pub trait QuestionBank {
    /// Pick one question at `level`, uniformly at random, that is not in `exclude`.
    ///
    /// `exclude` holds the questions already picked for the game being
    /// built, so one game never repeats a question. Across games the same
    /// question may be picked again.
    fn pick(
        &self,
        level: Level,
        exclude: &[QuestionId],
        rng: &mut GameRng,
    ) -> Result<Arc<Question>, BankError>;
}

/// Bank of questions held in memory, grouped by level.
///
/// ## Example
///
/// ```
/// use quiz_engine::core::GameRng;
/// use quiz_engine::questions::{InMemoryQuestionBank, Level, QuestionBank};
///
/// let mut bank = InMemoryQuestionBank::new();
/// bank.add(Level::new(0), "2 + 2?", ["4", "3", "5", "22"]);
///
/// let mut rng = GameRng::new(1);
/// let q = bank.pick(Level::new(0), &[], &mut rng).unwrap();
/// assert_eq!(q.correct_answer(), "4");
/// assert!(bank.pick(Level::new(1), &[], &mut rng).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryQuestionBank {
    by_level: FxHashMap<Level, Vec<Arc<Question>>>,
    levels: FxHashMap<QuestionId, Level>,
    next_id: u32,
}

impl InMemoryQuestionBank {
    /// Create a new empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a question record.
    ///
    /// Panics if a question with the same ID already exists.
    pub fn register(&mut self, question: Question) {
        if self.levels.contains_key(&question.id) {
            panic!("Question with ID {:?} already registered", question.id);
        }
        self.next_id = self.next_id.max(question.id.raw().saturating_add(1));
        self.levels.insert(question.id, question.level);
        self.by_level
            .entry(question.level)
            .or_default()
            .push(Arc::new(question));
    }

    /// Register a question with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn add(
        &mut self,
        level: Level,
        text: impl Into<String>,
        answers: [impl Into<String>; 4],
    ) -> QuestionId {
        let id = QuestionId::new(self.next_id);
        self.register(Question::new(id, level, text, answers));
        id
    }

    /// Get a question by ID.
    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Arc<Question>> {
        let level = self.levels.get(&id)?;
        self.at_level(*level).find(|q| q.id == id)
    }

    /// Number of questions at a level.
    #[must_use]
    pub fn count_at(&self, level: Level) -> usize {
        self.by_level.get(&level).map_or(0, Vec::len)
    }

    /// Get the number of registered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check if the bank is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate over the questions at a level.
    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &Arc<Question>> {
        self.by_level.get(&level).into_iter().flatten()
    }
}

impl QuestionBank for InMemoryQuestionBank {
    fn pick(
        &self,
        level: Level,
        exclude: &[QuestionId],
        rng: &mut GameRng,
    ) -> Result<Arc<Question>, BankError> {
        let candidates: Vec<&Arc<Question>> = self
            .at_level(level)
            .filter(|q| !exclude.contains(&q.id))
            .collect();

        rng.choose(&candidates)
            .map(|q| Arc::clone(*q))
            .ok_or(BankError::EmptyPool { level })
    }
}
