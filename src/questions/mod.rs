//! Trivia question records and the bank new games draw from.
//!
//! - `Question`: immutable text and four answers, first answer correct
//! - `QuestionBank`: trait the engine uses to pick one question per level
//! - `InMemoryQuestionBank`: map-backed bank

pub mod bank;
pub mod question;

pub use bank::{InMemoryQuestionBank, QuestionBank};
pub use question::{Level, Question, QuestionId};
