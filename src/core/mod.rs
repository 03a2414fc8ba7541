//! Core engine types: users, ledger, clock, RNG, configuration.
//!
//! This module contains the building blocks shared by every game.
//! Callers configure these via `EngineConfig` rather than modifying the engine.

pub mod clock;
pub mod config;
pub mod rng;
pub mod user;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{EngineConfig, HintPolicy, PrizeTable, DEFAULT_FIREPROOF_LEVELS, DEFAULT_PRIZES};
pub use rng::GameRng;
pub use user::{InMemoryLedger, Ledger, UserId};
