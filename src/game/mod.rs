//! Game aggregate: question instances, answer keys, hints and status.
//!
//! - `AnswerKeyMapper`: stored random permutation of answers to letters
//! - `hints`: fifty-fifty, friend call and audience help payloads
//! - `GameQuestion`: one question of one game, with its hint record
//! - `Game`: the aggregate root; `GameStatus` is derived from it

pub mod answer_key;
pub mod hints;
pub mod question;
pub mod state;

pub use answer_key::{AnswerKeyMapper, Letter, ParseLetterError};
pub use hints::{HintKind, HintPayload};
pub use question::GameQuestion;
pub use state::{Game, GameStatus};
