//! # quiz-engine
//!
//! A single-player trivia quiz engine in the "who wants to be a
//! millionaire" style: fifteen levels of increasing value, a cash-out
//! option, one-time hints, and fireproof checkpoints that survive a
//! wrong answer.
//!
//! ## Design Principles
//!
//! 1. **Derived Status**: A game's status is computed from its stored
//!    facts (`finished_at`, `is_failed`, `current_level`, `created_at`),
//!    never stored as a separate field.
//!
//! 2. **Injected Collaborators**: Questions come from a `QuestionBank`,
//!    payouts go to a `Ledger`, time comes from a `Clock`. The engine
//!    does no I/O of its own.
//!
//! 3. **Configuration Over Convention**: Prize amounts, checkpoints, the
//!    time limit and hint tuning live in `EngineConfig`.
//!
//! ## Modules
//!
//! - `core`: Users, ledger, clock, RNG, configuration and prize table
//! - `questions`: Question records and the question bank
//! - `game`: Game aggregate, answer keys, hints, derived status
//! - `rules`: `GameEngine`, the progression state machine
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod game;
pub mod questions;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Clock, EngineConfig, GameRng, HintPolicy, InMemoryLedger, Ledger, ManualClock, PrizeTable,
    SystemClock, UserId,
};

pub use crate::error::{BankError, EngineError, Result, SnapshotError};

pub use crate::game::{
    AnswerKeyMapper, Game, GameQuestion, GameStatus, HintKind, HintPayload, Letter,
};

pub use crate::questions::{InMemoryQuestionBank, Level, Question, QuestionBank, QuestionId};

pub use crate::rules::{AnswerOutcome, CashOut, GameEngine, HintOutcome};
