//! Game rules.
//!
//! `GameEngine` applies the progression rules to a `Game`:
//! - Creating games from a `QuestionBank`
//! - Answering, advancing, timing out and cashing out
//! - Paying prizes through a `Ledger`
//! - Hint use on the current question
//!
//! Status is never stored; every transition only sets the facts
//! `Game::status` derives it from.

pub mod engine;

pub use engine::{AnswerOutcome, CashOut, GameEngine, HintOutcome};
