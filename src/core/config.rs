//! Engine configuration.
//!
//! Callers configure the engine at startup by providing:
//! - `PrizeTable`: Cumulative prize per level plus fireproof checkpoints
//! - `HintPolicy`: Whether hints are limited per question or per game
//! - `EngineConfig`: Combines everything with the time limit and hint tuning
//!
//! The engine never hardcodes amounts or durations. The defaults mirror the
//! classic fifteen-question show.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Default cumulative prizes for levels 0..=14.
pub const DEFAULT_PRIZES: [u64; 15] = [
    100, 200, 300, 500, 1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 125_000, 250_000,
    500_000, 1_000_000,
];

/// Default fireproof checkpoint levels.
pub const DEFAULT_FIREPROOF_LEVELS: [u8; 3] = [4, 9, 14];

/// Default time limit for a whole game, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: i64 = 35 * 60;

/// Static mapping from level index to cumulative prize.
///
/// Amounts are strictly increasing. Fireproof levels are the checkpoints
/// whose prize is kept even after a wrong answer.
///
/// ## Example
///
/// ```
/// use quiz_engine::core::PrizeTable;
///
/// let table = PrizeTable::default();
/// assert_eq!(table.prize_at(0), 100);
/// assert_eq!(table.prize_at(-1), 0);
/// assert_eq!(table.fireproof_prize(7), 1_000);
/// assert_eq!(table.grand_prize(), 1_000_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTable {
    amounts: Vec<u64>,
    fireproof_levels: Vec<u8>,
}

impl PrizeTable {
    /// Build a prize table, validating its shape.
    pub fn new(amounts: Vec<u64>, mut fireproof_levels: Vec<u8>) -> Result<Self> {
        fireproof_levels.sort_unstable();
        fireproof_levels.dedup();
        let table = Self {
            amounts,
            fireproof_levels,
        };
        table.validate()?;
        Ok(table)
    }

    /// Check amounts are non-empty and strictly increasing, and checkpoints in range.
    pub fn validate(&self) -> Result<()> {
        if self.amounts.is_empty() {
            return Err(EngineError::InvalidConfig("prize table is empty".into()));
        }
        if self.amounts.len() > usize::from(u8::MAX) {
            return Err(EngineError::InvalidConfig(format!(
                "prize table has {} levels, at most {} supported",
                self.amounts.len(),
                u8::MAX
            )));
        }
        if self.amounts.windows(2).any(|w| w[0] >= w[1]) {
            return Err(EngineError::InvalidConfig(
                "prize amounts must be strictly increasing".into(),
            ));
        }
        if let Some(&bad) = self
            .fireproof_levels
            .iter()
            .find(|&&l| usize::from(l) >= self.amounts.len())
        {
            return Err(EngineError::InvalidConfig(format!(
                "fireproof level {} is beyond the last level {}",
                bad,
                self.max_level()
            )));
        }
        Ok(())
    }

    /// Number of levels.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.amounts.len()
    }

    /// Highest level index.
    #[must_use]
    pub fn max_level(&self) -> u8 {
        // validate() caps the table at u8::MAX levels
        (self.amounts.len().saturating_sub(1)) as u8
    }

    /// Cumulative prize for having answered `level`.
    ///
    /// Negative levels (nothing answered yet) pay 0.
    #[must_use]
    pub fn prize_at(&self, level: i32) -> u64 {
        usize::try_from(level)
            .ok()
            .and_then(|l| self.amounts.get(l))
            .copied()
            .unwrap_or(0)
    }

    /// Prize kept after a failure when `answered_level` was the last level answered.
    ///
    /// Pays the prize of the highest checkpoint at or below `answered_level`,
    /// or 0 if no checkpoint was reached.
    #[must_use]
    pub fn fireproof_prize(&self, answered_level: i32) -> u64 {
        self.fireproof_levels
            .iter()
            .rev()
            .find(|&&l| i32::from(l) <= answered_level)
            .map_or(0, |&l| self.prize_at(i32::from(l)))
    }

    /// Prize for answering the last question.
    #[must_use]
    pub fn grand_prize(&self) -> u64 {
        self.amounts.last().copied().unwrap_or(0)
    }

    /// Checkpoint levels, ascending.
    #[must_use]
    pub fn fireproof_levels(&self) -> &[u8] {
        &self.fireproof_levels
    }
}

impl Default for PrizeTable {
    fn default() -> Self {
        Self {
            amounts: DEFAULT_PRIZES.to_vec(),
            fireproof_levels: DEFAULT_FIREPROOF_LEVELS.to_vec(),
        }
    }
}

/// How often each hint kind may be used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintPolicy {
    /// Each kind once per question.
    #[default]
    OncePerQuestion,
    /// Each kind once per game, on whichever question the player chooses.
    OncePerGame,
}

/// Complete engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Wall time allowed for a whole game, in seconds.
    pub time_limit_secs: i64,

    /// Prize per level and fireproof checkpoints.
    pub prizes: PrizeTable,

    /// Hint usage limit.
    pub hint_policy: HintPolicy,

    /// Probability that phone-a-friend names the correct letter.
    pub friend_accuracy: f64,

    /// Inclusive percentage range for the correct letter in audience help.
    pub audience_correct_share: (u8, u8),

    /// Names used in phone-a-friend suggestions.
    pub friend_names: Vec<String>,

    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            prizes: PrizeTable::default(),
            hint_policy: HintPolicy::default(),
            friend_accuracy: 0.8,
            audience_correct_share: (45, 90),
            friend_names: ["Vasily", "Maria", "Oleg", "Anna"]
                .into_iter()
                .map(String::from)
                .collect(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time limit.
    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_secs = limit.num_seconds();
        self
    }

    /// Set the prize table.
    #[must_use]
    pub fn with_prizes(mut self, prizes: PrizeTable) -> Self {
        self.prizes = prizes;
        self
    }

    /// Set the hint policy.
    #[must_use]
    pub fn with_hint_policy(mut self, policy: HintPolicy) -> Self {
        self.hint_policy = policy;
        self
    }

    /// Set phone-a-friend accuracy.
    #[must_use]
    pub fn with_friend_accuracy(mut self, accuracy: f64) -> Self {
        self.friend_accuracy = accuracy;
        self
    }

    /// Set the audience share range for the correct letter.
    #[must_use]
    pub fn with_audience_share(mut self, min: u8, max: u8) -> Self {
        self.audience_correct_share = (min, max);
        self
    }

    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Time limit as a duration.
    #[must_use]
    pub fn time_limit(&self) -> Duration {
        Duration::seconds(self.time_limit_secs)
    }

    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        if self.time_limit_secs <= 0 || self.time_limit_secs >= 60 * 60 {
            return Err(EngineError::InvalidConfig(format!(
                "time limit must be between 0 and 3600 seconds exclusive, got {}",
                self.time_limit_secs
            )));
        }
        self.prizes.validate()?;
        if !(self.friend_accuracy > 0.0 && self.friend_accuracy < 1.0) {
            return Err(EngineError::InvalidConfig(format!(
                "friend accuracy must be in (0, 1), got {}",
                self.friend_accuracy
            )));
        }
        let (min, max) = self.audience_correct_share;
        if min > max || max >= 100 || min <= 25 {
            return Err(EngineError::InvalidConfig(format!(
                "audience share range {}..={} must lie within 26..=99",
                min, max
            )));
        }
        if self.friend_names.is_empty() {
            return Err(EngineError::InvalidConfig("no friend names configured".into()));
        }
        Ok(())
    }
}
