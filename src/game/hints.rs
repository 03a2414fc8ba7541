//! One-time hints derived from a question's answer key.
//!
//! Hints narrow or suggest the answer without changing the key:
//!
//! - **Fifty-fifty**: keeps the correct letter and one random wrong letter
//! - **Friend call**: names a letter, right most of the time but not always
//! - **Audience help**: a percentage split over all four letters summing to 100,
//!   with the correct letter strictly ahead of every other letter

use serde::{Deserialize, Serialize};

use super::answer_key::{AnswerKeyMapper, Letter};
use crate::core::{EngineConfig, GameRng};

/// Kind of hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HintKind {
    FiftyFifty,
    FriendCall,
    AudienceHelp,
}

impl HintKind {
    /// All hint kinds.
    pub const ALL: [HintKind; 3] = [HintKind::FiftyFifty, HintKind::FriendCall, HintKind::AudienceHelp];
}

impl std::fmt::Display for HintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HintKind::FiftyFifty => "fifty_fifty",
            HintKind::FriendCall => "friend_call",
            HintKind::AudienceHelp => "audience_help",
        };
        f.write_str(name)
    }
}

/// Result of using a hint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintPayload {
    /// The two letters left after removing two wrong ones, in letter order.
    FiftyFifty { remaining: [Letter; 2] },

    /// A friend's suggestion.
    FriendCall { suggestion: Letter, message: String },

    /// Audience vote percentages, indexed by `Letter::index`.
    AudienceHelp { shares: [u8; 4] },
}

impl HintPayload {
    /// The kind of hint that produced this payload.
    #[must_use]
    pub fn kind(&self) -> HintKind {
        match self {
            HintPayload::FiftyFifty { .. } => HintKind::FiftyFifty,
            HintPayload::FriendCall { .. } => HintKind::FriendCall,
            HintPayload::AudienceHelp { .. } => HintKind::AudienceHelp,
        }
    }

    /// Audience share for `letter`, if this is an audience payload.
    #[must_use]
    pub fn audience_share(&self, letter: Letter) -> Option<u8> {
        match self {
            HintPayload::AudienceHelp { shares } => Some(shares[letter.index()]),
            _ => None,
        }
    }
}

/// Generate a hint of `kind` for a question with answer key `key`.
pub(crate) fn generate(
    kind: HintKind,
    key: &AnswerKeyMapper,
    config: &EngineConfig,
    rng: &mut GameRng,
) -> HintPayload {
    match kind {
        HintKind::FiftyFifty => fifty_fifty(key, rng),
        HintKind::FriendCall => friend_call(key, config, rng),
        HintKind::AudienceHelp => audience_help(key, config.audience_correct_share, rng),
    }
}

/// Keep the correct letter plus one random wrong letter.
pub(crate) fn fifty_fifty(key: &AnswerKeyMapper, rng: &mut GameRng) -> HintPayload {
    let correct = key.correct_answer_key();
    let wrong = key.wrong_letters();
    let kept = wrong[rng.gen_range_usize(0..wrong.len())];

    let mut remaining = [correct, kept];
    remaining.sort_unstable();
    HintPayload::FiftyFifty { remaining }
}

/// Suggest the correct letter with probability `friend_accuracy`, otherwise a wrong one.
pub(crate) fn friend_call(key: &AnswerKeyMapper, config: &EngineConfig, rng: &mut GameRng) -> HintPayload {
    let suggestion = if rng.gen_bool(config.friend_accuracy) {
        key.correct_answer_key()
    } else {
        let wrong = key.wrong_letters();
        wrong[rng.gen_range_usize(0..wrong.len())]
    };

    let name = rng
        .choose(&config.friend_names)
        .map_or("Your friend", String::as_str);
    let message = format!(
        "{} thinks the answer is {}",
        name,
        suggestion.as_char().to_ascii_uppercase()
    );

    HintPayload::FriendCall { suggestion, message }
}

/// Split 100% over the four letters, favouring the correct one.
///
/// The correct letter draws a share from `correct_share` (inclusive).
/// The rest is divided randomly among the wrong letters, each capped one
/// point below the correct share. The lower bound must exceed 25 for the
/// cap to be satisfiable.
pub(crate) fn audience_help(
    key: &AnswerKeyMapper,
    correct_share: (u8, u8),
    rng: &mut GameRng,
) -> HintPayload {
    let (min, max) = correct_share;
    let hi = max.clamp(26, 99);
    let correct = rng.gen_range_u8(min.clamp(26, hi)..=hi);
    let cap = correct - 1;

    let mut wrong = key.wrong_letters();
    rng.shuffle(&mut wrong);

    let mut shares = [0u8; 4];
    shares[key.correct_answer_key().index()] = correct;

    let mut left = 100 - correct;
    for (i, letter) in wrong.iter().enumerate() {
        let still_to_fill = (wrong.len() - 1 - i) as u8;
        let share = if still_to_fill == 0 {
            left
        } else {
            let lo = left.saturating_sub(cap.saturating_mul(still_to_fill));
            let hi = left.min(cap);
            rng.gen_range_u8(lo..=hi)
        };
        shares[letter.index()] = share;
        left -= share;
    }

    HintPayload::AudienceHelp { shares }
}
