//! Users and prize crediting.
//!
//! ## UserId
//!
//! Opaque identifier for the player who owns a game.
//!
//! ## Ledger
//!
//! The engine never stores balances itself. Every terminal transition that
//! pays out calls `Ledger::credit` exactly once; persisting the balance is
//! the ledger's job. `InMemoryLedger` is a map-backed ledger for tests and
//! embedding.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Identifier of the user who owns a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl UserId {
    /// Create a new user ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User {}", self.0)
    }
}

/// Balance collaborator credited by the engine.
pub trait Ledger {
    /// Add `amount` to the user's balance.
    ///
    /// A zero amount is a valid no-op credit.
    fn credit(&mut self, user: UserId, amount: u64);
}

/// Map-backed ledger.
///
/// ## Example
///
/// ```
/// use quiz_engine::core::{InMemoryLedger, Ledger, UserId};
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.credit(UserId::new(1), 500);
/// ledger.credit(UserId::new(1), 100);
///
/// assert_eq!(ledger.balance(UserId::new(1)), 600);
/// assert_eq!(ledger.balance(UserId::new(2)), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryLedger {
    balances: FxHashMap<UserId, u64>,
    credits: usize,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance of a user (0 if never credited).
    #[must_use]
    pub fn balance(&self, user: UserId) -> u64 {
        self.balances.get(&user).copied().unwrap_or(0)
    }

    /// Number of `credit` calls received, including zero credits.
    #[must_use]
    pub fn credit_count(&self) -> usize {
        self.credits
    }
}

impl Ledger for InMemoryLedger {
    fn credit(&mut self, user: UserId, amount: u64) {
        self.credits += 1;
        *self.balances.entry(user).or_insert(0) += amount;
    }
}
