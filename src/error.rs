//! Error types.
//!
//! Only misuse is an error: acting on a finished game, reusing a hint,
//! or lacking question inventory. Wrong answers and timeouts are normal
//! game endings and are reported through `GameStatus`.

use thiserror::Error;

use crate::game::{GameStatus, HintKind};
use crate::questions::Level;

/// Errors raised by a `QuestionBank`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BankError {
    /// No unpicked question exists at this level.
    #[error("no question available at level {level}")]
    EmptyPool { level: Level },
}

/// Errors raised while encoding or decoding a game snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode game: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode game: {0}")]
    Decode(#[source] bincode::Error),
}

/// Errors raised by the game engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A game could not be created because a level's pool is empty.
    #[error("cannot create game: insufficient questions at level {level}")]
    InsufficientQuestions {
        level: Level,
        #[source]
        source: BankError,
    },

    /// The hint kind was already used.
    #[error("hint {kind} has already been used")]
    AlreadyUsed { kind: HintKind },

    /// The game is finished and can no longer be changed.
    #[error("game is already finished with status {status}")]
    InvalidOperationOnTerminalGame { status: GameStatus },

    /// There is no question at the requested level.
    #[error("no current question at level {level}")]
    NoCurrentQuestion { level: u8 },

    /// Engine configuration is out of range.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
