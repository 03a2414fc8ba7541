//! Game aggregate and derived status.
//!
//! ## Game
//!
//! The stored facts of one game: owner, the fifteen question instances,
//! current level, failure flag, timestamps and final prize. Mutated only
//! through `GameEngine`; once `finished_at` is set the game is frozen.
//!
//! ## GameStatus
//!
//! Never stored. `Game::status` derives it from the facts, so there is
//! no second source of truth to keep in sync.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::question::GameQuestion;
use crate::core::UserId;
use crate::error::{EngineError, Result, SnapshotError};

/// Derived status of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Not finished.
    InProgress,
    /// Answered the last question.
    Won,
    /// Answered a question wrong.
    Fail,
    /// Ran past the time limit.
    Timeout,
    /// Cashed out.
    Money,
}

impl GameStatus {
    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won => "won",
            GameStatus::Fail => "fail",
            GameStatus::Timeout => "timeout",
            GameStatus::Money => "money",
        };
        f.write_str(name)
    }
}

/// A single player's game.
///
/// Fields are public so storage layers can rebuild a game; game rules
/// are only applied by `GameEngine`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Owner of the game.
    pub user: UserId,

    /// One question per level, in level order.
    pub questions: Vec<GameQuestion>,

    /// Index of the question being played. Equals `questions.len()` only
    /// after the last question was answered.
    pub current_level: u8,

    /// Set on a wrong answer, never unset.
    pub is_failed: bool,

    /// Creation time.
    pub created_at: DateTime<Utc>,

    /// Finish time. `None` while the game is live.
    pub finished_at: Option<DateTime<Utc>>,

    /// Amount paid out when the game finished.
    pub prize: u64,
}

impl Game {
    /// Create a live game at level 0.
    #[must_use]
    pub fn new(user: UserId, questions: Vec<GameQuestion>, created_at: DateTime<Utc>) -> Self {
        Self {
            user,
            questions,
            current_level: 0,
            is_failed: false,
            created_at,
            finished_at: None,
            prize: 0,
        }
    }

    /// Whether `finished_at` is set.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Highest level index of this game.
    #[must_use]
    pub fn max_level(&self) -> u8 {
        self.questions.len().saturating_sub(1) as u8
    }

    /// The last level answered correctly; -1 if none.
    #[must_use]
    pub fn previous_level(&self) -> i32 {
        i32::from(self.current_level) - 1
    }

    /// Whether more than `time_limit` has passed between creation and `at`.
    #[must_use]
    pub fn is_overdue(&self, time_limit: Duration, at: DateTime<Utc>) -> bool {
        at - self.created_at > time_limit
    }

    /// Derive the status from the stored facts.
    ///
    /// Precedence: live, then timeout, then fail, then won, then money.
    /// A timed-out game reports `Timeout` even if it was also failed.
    #[must_use]
    pub fn status(&self, time_limit: Duration) -> GameStatus {
        let Some(finished_at) = self.finished_at else {
            return GameStatus::InProgress;
        };

        if self.is_overdue(time_limit, finished_at) {
            GameStatus::Timeout
        } else if self.is_failed {
            GameStatus::Fail
        } else if self.current_level > self.max_level() {
            GameStatus::Won
        } else {
            GameStatus::Money
        }
    }

    /// The question at `current_level`.
    ///
    /// Fails on a finished game or when the level is past the last question.
    pub fn current_game_question(&self) -> Result<&GameQuestion> {
        if self.is_finished() {
            return Err(EngineError::NoCurrentQuestion {
                level: self.current_level,
            });
        }
        self.questions
            .get(usize::from(self.current_level))
            .ok_or(EngineError::NoCurrentQuestion {
                level: self.current_level,
            })
    }

    pub(crate) fn current_game_question_mut(&mut self) -> Result<&mut GameQuestion> {
        let level = self.current_level;
        if self.is_finished() {
            return Err(EngineError::NoCurrentQuestion { level });
        }
        self.questions
            .get_mut(usize::from(level))
            .ok_or(EngineError::NoCurrentQuestion { level })
    }

    /// Encode the game for storage.
    pub fn to_bytes(&self) -> std::result::Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode a game produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::game::AnswerKeyMapper;
    use crate::questions::{Level, Question, QuestionId};

    fn game(levels: u8) -> Game {
        let questions = (0..levels)
            .map(|l| {
                let q = Question::new(
                    QuestionId::new(u32::from(l)),
                    Level::new(l),
                    format!("Q{}", l),
                    ["right", "w1", "w2", "w3"],
                );
                GameQuestion::new(Arc::new(q), AnswerKeyMapper::from_slots([1, 2, 3, 4]).unwrap())
            })
            .collect();
        Game::new(UserId::new(1), questions, Utc::now())
    }

    fn limit() -> Duration {
        Duration::minutes(35)
    }

    #[test]
    fn test_new_game_in_progress() {
        let g = game(15);
        assert_eq!(g.status(limit()), GameStatus::InProgress);
        assert!(!g.is_finished());
        assert_eq!(g.max_level(), 14);
        assert_eq!(g.prize, 0);
    }

    #[test]
    fn test_status_precedence() {
        let mut g = game(15);
        g.finished_at = Some(g.created_at + Duration::minutes(1));
        assert_eq!(g.status(limit()), GameStatus::Money);

        g.current_level = 15;
        assert_eq!(g.status(limit()), GameStatus::Won);

        g.is_failed = true;
        assert_eq!(g.status(limit()), GameStatus::Fail);

        g.finished_at = Some(g.created_at + Duration::hours(1));
        assert_eq!(g.status(limit()), GameStatus::Timeout);
    }

    #[test]
    fn test_timeout_needs_strictly_more_than_limit() {
        let mut g = game(15);
        g.finished_at = Some(g.created_at + limit());
        assert_eq!(g.status(limit()), GameStatus::Money);
    }

    #[test]
    fn test_previous_level() {
        let mut g = game(15);
        assert_eq!(g.previous_level(), -1);
        g.current_level = 12;
        assert_eq!(g.previous_level(), 11);
    }

    #[test]
    fn test_current_game_question() {
        let mut g = game(15);
        assert_eq!(g.current_game_question().unwrap().level(), Level::new(0));

        g.current_level = 15;
        assert!(g.current_game_question().is_err());

        g.current_level = 3;
        g.finished_at = Some(Utc::now());
        assert_eq!(
            g.current_game_question().unwrap_err(),
            EngineError::NoCurrentQuestion { level: 3 }
        );
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut g = game(3);
        g.current_level = 2;
        let bytes = g.to_bytes().unwrap();
        assert_eq!(Game::from_bytes(&bytes).unwrap(), g);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(matches!(
            Game::from_bytes(&[1, 2, 3]),
            Err(SnapshotError::Decode(_))
        ));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::InProgress.to_string(), "in_progress");
        assert!(GameStatus::Timeout.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
    }
}
