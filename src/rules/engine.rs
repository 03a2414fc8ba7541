//! Game progression engine.
//!
//! `GameEngine` owns the rules of a game's life:
//! - Creation with one random question per level
//! - Answer checking, level advancement and the time limit
//! - Cash-out and failure payouts via the `PrizeTable`
//! - One-time hints on the current question
//!
//! The engine holds no games. Callers load a `Game`, pass it in by
//! `&mut`, and store it afterwards; they must not run two mutating calls
//! on the same game at once.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Clock, EngineConfig, GameRng, HintPolicy, Ledger, SystemClock, UserId};
use crate::error::{EngineError, Result};
use crate::game::{hints, AnswerKeyMapper, Game, GameQuestion, GameStatus, HintKind, HintPayload, Letter};
use crate::questions::{Level, QuestionBank, QuestionId};

/// Result of `GameEngine::submit_answer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    /// True if the answer was correct and in time.
    pub success: bool,
    /// Status after the answer.
    pub status: GameStatus,
    /// Level after the answer.
    pub current_level: u8,
}

/// Result of `GameEngine::cash_out`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashOut {
    /// Amount credited.
    pub prize: u64,
    /// Status after cashing out (always `Money`).
    pub status: GameStatus,
}

/// Result of `GameEngine::use_hint`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintOutcome {
    /// The hint was stored on the current question.
    Granted(HintPayload),
    /// The game ran past the time limit before the hint could be given.
    /// It is now finished as `Timeout` and `prize` was credited.
    TimedOut { prize: u64 },
}

impl HintOutcome {
    /// The granted payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&HintPayload> {
        match self {
            HintOutcome::Granted(payload) => Some(payload),
            HintOutcome::TimedOut { .. } => None,
        }
    }

    /// Take the granted payload, if any.
    #[must_use]
    pub fn into_payload(self) -> Option<HintPayload> {
        match self {
            HintOutcome::Granted(payload) => Some(payload),
            HintOutcome::TimedOut { .. } => None,
        }
    }

    /// Status of the game after the call.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self {
            HintOutcome::Granted(_) => GameStatus::InProgress,
            HintOutcome::TimedOut { .. } => GameStatus::Timeout,
        }
    }
}

/// The quiz rules engine.
///
/// ## Example
///
/// ```
/// use quiz_engine::core::{EngineConfig, InMemoryLedger, UserId};
/// use quiz_engine::game::GameStatus;
/// use quiz_engine::questions::{InMemoryQuestionBank, Level};
/// use quiz_engine::rules::GameEngine;
///
/// let mut bank = InMemoryQuestionBank::new();
/// for level in 0..15 {
///     bank.add(Level::new(level), format!("Q{}", level), ["yes", "no", "maybe", "never"]);
/// }
///
/// let config = EngineConfig::default().with_seed(1);
/// let mut engine = GameEngine::new(bank, InMemoryLedger::new(), config).unwrap();
/// let user = UserId::new(1);
///
/// let mut game = engine.create(user).unwrap();
/// let right = game.current_game_question().unwrap().correct_answer_key();
/// engine.submit_answer(&mut game, right).unwrap();
///
/// let paid = engine.cash_out(&mut game).unwrap();
/// assert_eq!(paid.prize, 100);
/// assert_eq!(engine.status(&game), GameStatus::Money);
/// assert_eq!(engine.ledger().balance(user), 100);
/// ```
pub struct GameEngine<Q, L, C = SystemClock> {
    bank: Q,
    ledger: L,
    clock: C,
    config: EngineConfig,
    rng: GameRng,
}

impl<Q: QuestionBank, L: Ledger> GameEngine<Q, L, SystemClock> {
    /// Create an engine on the wall clock.
    pub fn new(bank: Q, ledger: L, config: EngineConfig) -> Result<Self> {
        Self::with_clock(bank, ledger, SystemClock, config)
    }
}

impl<Q: QuestionBank, L: Ledger, C: Clock> GameEngine<Q, L, C> {
    /// Create an engine with an explicit clock.
    ///
    /// Fails if the configuration is out of range.
    pub fn with_clock(bank: Q, ledger: L, clock: C, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self {
            bank,
            ledger,
            clock,
            config,
            rng,
        })
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The question bank.
    #[must_use]
    pub fn bank(&self) -> &Q {
        &self.bank
    }

    /// The ledger credited on payouts.
    #[must_use]
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Start a new game for `user`.
    ///
    /// Picks one question per level from the bank, never repeating a
    /// question within the game, and draws a fresh answer key for each.
    pub fn create(&mut self, user: UserId) -> Result<Game> {
        let level_count = self.config.prizes.level_count();
        let mut picked: Vec<QuestionId> = Vec::with_capacity(level_count);
        let mut questions = Vec::with_capacity(level_count);

        for index in 0..=self.config.prizes.max_level() {
            let level = Level::new(index);
            let question = self
                .bank
                .pick(level, &picked, &mut self.rng)
                .map_err(|source| {
                    warn!("{}: cannot create game, no question at {}", user, level);
                    EngineError::InsufficientQuestions { level, source }
                })?;
            debug_assert_eq!(question.level, level);

            picked.push(question.id);
            let key = AnswerKeyMapper::random(&mut self.rng);
            questions.push(GameQuestion::new(question, key));
        }

        let game = Game::new(user, questions, self.clock.now());
        info!("{}: created game with {} questions", user, game.questions.len());
        Ok(game)
    }

    /// Derived status of `game` under this engine's time limit.
    #[must_use]
    pub fn status(&self, game: &Game) -> GameStatus {
        game.status(self.config.time_limit())
    }

    /// The question being played.
    pub fn current_game_question<'g>(&self, game: &'g Game) -> Result<&'g GameQuestion> {
        game.current_game_question()
    }

    /// Answer the current question with `letter`.
    ///
    /// Wrong and late answers end the game and return `success: false`;
    /// they are not errors. Only answering a finished game is.
    pub fn submit_answer(&mut self, game: &mut Game, letter: Letter) -> Result<AnswerOutcome> {
        self.ensure_live(game)?;

        if self.check_timeout(game) {
            return Ok(self.outcome(game, false));
        }

        let correct = game.current_game_question()?.is_correct(letter);

        if !correct {
            game.is_failed = true;
            let prize = self.config.prizes.fireproof_prize(game.previous_level());
            self.finish(game, prize);
            return Ok(self.outcome(game, false));
        }

        let answered = game.current_level;
        game.current_level += 1;

        if answered >= game.max_level() {
            let prize = self.config.prizes.prize_at(i32::from(answered));
            self.finish(game, prize);
        } else {
            debug!("{}: advanced to level {}", game.user, game.current_level);
        }

        Ok(self.outcome(game, true))
    }

    /// End the game and bank the prize for the last answered level.
    ///
    /// A game already past the time limit finishes as `Timeout` instead,
    /// paying only the fireproof prize.
    pub fn cash_out(&mut self, game: &mut Game) -> Result<CashOut> {
        self.ensure_live(game)?;

        if self.check_timeout(game) {
            return Ok(CashOut {
                prize: game.prize,
                status: self.status(game),
            });
        }

        let prize = self.config.prizes.prize_at(game.previous_level());
        self.finish(game, prize);

        Ok(CashOut {
            prize,
            status: self.status(game),
        })
    }

    /// Use a hint on the current question.
    ///
    /// Fails with `AlreadyUsed` if the kind was used before (on this
    /// question, or anywhere in the game under `HintPolicy::OncePerGame`).
    /// A game past the time limit is finished instead and reported as
    /// `HintOutcome::TimedOut`.
    pub fn use_hint(&mut self, game: &mut Game, kind: HintKind) -> Result<HintOutcome> {
        self.ensure_live(game)?;

        if self.check_timeout(game) {
            return Ok(HintOutcome::TimedOut { prize: game.prize });
        }

        let used = match self.config.hint_policy {
            HintPolicy::OncePerQuestion => game.current_game_question()?.has_used(kind),
            HintPolicy::OncePerGame => game.questions.iter().any(|q| q.has_used(kind)),
        };
        if used {
            warn!("{}: hint {} already used", game.user, kind);
            return Err(EngineError::AlreadyUsed { kind });
        }

        let question = game.current_game_question_mut()?;
        let payload = hints::generate(kind, question.answer_key(), &self.config, &mut self.rng);
        let stored = question.record_hint(payload)?.clone();

        debug!("{}: used hint {} at level {}", game.user, kind, game.current_level);
        Ok(HintOutcome::Granted(stored))
    }

    /// Finish `game` as timed out if it ran past the limit.
    ///
    /// Pays the fireproof prize. Returns true if the game was finished
    /// by this call.
    pub fn check_timeout(&mut self, game: &mut Game) -> bool {
        if game.is_finished() || !game.is_overdue(self.config.time_limit(), self.clock.now()) {
            return false;
        }

        let prize = self.config.prizes.fireproof_prize(game.previous_level());
        self.finish(game, prize);
        true
    }

    fn ensure_live(&self, game: &Game) -> Result<()> {
        if game.is_finished() {
            let status = self.status(game);
            warn!("{}: rejected action on finished game ({})", game.user, status);
            return Err(EngineError::InvalidOperationOnTerminalGame { status });
        }
        Ok(())
    }

    fn finish(&mut self, game: &mut Game, prize: u64) {
        game.finished_at = Some(self.clock.now());
        game.prize = prize;
        self.ledger.credit(game.user, prize);

        info!(
            "{}: game finished as {} at level {}, prize {}",
            game.user,
            self.status(game),
            game.current_level,
            prize
        );
    }

    fn outcome(&self, game: &Game, success: bool) -> AnswerOutcome {
        AnswerOutcome {
            success,
            status: self.status(game),
            current_level: game.current_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::core::{InMemoryLedger, ManualClock};
    use crate::questions::InMemoryQuestionBank;

    fn bank() -> InMemoryQuestionBank {
        let mut bank = InMemoryQuestionBank::new();
        for level in 0..15 {
            for i in 0..2 {
                bank.add(Level::new(level), format!("L{} Q{}", level, i), ["right", "w1", "w2", "w3"]);
            }
        }
        bank
    }

    fn engine() -> (GameEngine<InMemoryQuestionBank, InMemoryLedger, ManualClock>, ManualClock) {
        let clock = ManualClock::default();
        let engine = GameEngine::with_clock(
            bank(),
            InMemoryLedger::new(),
            clock.clone(),
            EngineConfig::default().with_seed(42),
        )
        .unwrap();
        (engine, clock)
    }

    fn wrong(game: &Game) -> Letter {
        let key = game.current_game_question().unwrap().correct_answer_key();
        Letter::ALL.into_iter().find(|&l| l != key).unwrap()
    }

    fn right(game: &Game) -> Letter {
        game.current_game_question().unwrap().correct_answer_key()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = EngineConfig::default().with_time_limit(Duration::zero());
        assert!(GameEngine::new(bank(), InMemoryLedger::new(), config).is_err());
    }

    #[test]
    fn test_create_fills_levels() {
        let (mut engine, _) = engine();
        let game = engine.create(UserId::new(1)).unwrap();

        assert_eq!(game.questions.len(), 15);
        for (i, q) in game.questions.iter().enumerate() {
            assert_eq!(q.level().index(), i);
        }
        assert_eq!(engine.status(&game), GameStatus::InProgress);
    }

    #[test]
    fn test_create_reports_empty_level() {
        let mut bank = InMemoryQuestionBank::new();
        for level in 0..15 {
            if level != 7 {
                bank.add(Level::new(level), "Q", ["a", "b", "c", "d"]);
            }
        }
        let mut engine = GameEngine::new(bank, InMemoryLedger::new(), EngineConfig::default().with_seed(1)).unwrap();

        assert!(matches!(
            engine.create(UserId::new(1)),
            Err(EngineError::InsufficientQuestions { level, .. }) if level == Level::new(7)
        ));
    }

    #[test]
    fn test_wrong_answer_pays_fireproof() {
        let (mut engine, _) = engine();
        let user = UserId::new(1);
        let mut game = engine.create(user).unwrap();

        for _ in 0..6 {
            let letter = right(&game);
            engine.submit_answer(&mut game, letter).unwrap();
        }
        let letter = wrong(&game);
        let outcome = engine.submit_answer(&mut game, letter).unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.status, GameStatus::Fail);
        assert_eq!(game.prize, 1_000);
        assert_eq!(engine.ledger().balance(user), 1_000);
    }

    #[test]
    fn test_late_answer_times_out_with_fireproof() {
        let (mut engine, clock) = engine();
        let user = UserId::new(1);
        let mut game = engine.create(user).unwrap();

        for _ in 0..5 {
            let letter = right(&game);
            engine.submit_answer(&mut game, letter).unwrap();
        }
        clock.advance(Duration::minutes(36));

        let letter = right(&game);
        let outcome = engine.submit_answer(&mut game, letter).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.status, GameStatus::Timeout);
        assert_eq!(outcome.current_level, 5);
        assert!(!game.is_failed);
        assert_eq!(engine.ledger().balance(user), 1_000);
    }

    #[test]
    fn test_cash_out_after_time_limit_reports_timeout() {
        let (mut engine, clock) = engine();
        let user = UserId::new(1);
        let mut game = engine.create(user).unwrap();
        for _ in 0..6 {
            let letter = right(&game);
            engine.submit_answer(&mut game, letter).unwrap();
        }
        clock.advance(Duration::minutes(40));

        let paid = engine.cash_out(&mut game).unwrap();

        assert_eq!(paid, CashOut { prize: 1_000, status: GameStatus::Timeout });
        assert!(game.is_finished());
        assert_eq!(game.prize, 1_000);
        assert_eq!(engine.ledger().balance(user), 1_000);
        assert_eq!(engine.ledger().credit_count(), 1);

        // Finished now, so a second call is misuse
        assert_eq!(
            engine.cash_out(&mut game),
            Err(EngineError::InvalidOperationOnTerminalGame {
                status: GameStatus::Timeout
            })
        );
        assert_eq!(engine.ledger().credit_count(), 1);
    }

    #[test]
    fn test_hint_after_time_limit_reports_timeout() {
        let (mut engine, clock) = engine();
        let user = UserId::new(1);
        let mut game = engine.create(user).unwrap();
        for _ in 0..5 {
            let letter = right(&game);
            engine.submit_answer(&mut game, letter).unwrap();
        }
        clock.advance(Duration::minutes(40));

        let outcome = engine.use_hint(&mut game, HintKind::FiftyFifty).unwrap();

        assert_eq!(outcome, HintOutcome::TimedOut { prize: 1_000 });
        assert_eq!(outcome.status(), GameStatus::Timeout);
        assert!(outcome.payload().is_none());
        assert_eq!(engine.status(&game), GameStatus::Timeout);
        assert_eq!(engine.ledger().balance(user), 1_000);
    }

    #[test]
    fn test_cash_out_at_start_pays_nothing() {
        let (mut engine, _) = engine();
        let mut game = engine.create(UserId::new(1)).unwrap();

        let paid = engine.cash_out(&mut game).unwrap();
        assert_eq!(paid, CashOut { prize: 0, status: GameStatus::Money });
    }

    #[test]
    fn test_check_timeout_leaves_live_game() {
        let (mut engine, clock) = engine();
        let mut game = engine.create(UserId::new(1)).unwrap();
        clock.advance(Duration::minutes(34));

        assert!(!engine.check_timeout(&mut game));
        assert!(!game.is_finished());

        clock.advance(Duration::minutes(2));
        assert!(engine.check_timeout(&mut game));
        assert_eq!(engine.status(&game), GameStatus::Timeout);
        assert!(!engine.check_timeout(&mut game));
    }

    #[test]
    fn test_hint_once_per_game_policy() {
        let clock = ManualClock::default();
        let config = EngineConfig::default()
            .with_seed(3)
            .with_hint_policy(HintPolicy::OncePerGame);
        let mut engine = GameEngine::with_clock(bank(), InMemoryLedger::new(), clock, config).unwrap();
        let mut game = engine.create(UserId::new(1)).unwrap();

        engine.use_hint(&mut game, HintKind::FriendCall).unwrap();
        let letter = right(&game);
        engine.submit_answer(&mut game, letter).unwrap();

        assert_eq!(
            engine.use_hint(&mut game, HintKind::FriendCall),
            Err(EngineError::AlreadyUsed {
                kind: HintKind::FriendCall
            })
        );
        let granted = engine.use_hint(&mut game, HintKind::FiftyFifty).unwrap();
        assert_eq!(granted.status(), GameStatus::InProgress);
        assert!(granted.payload().is_some());
    }

    #[test]
    fn test_hint_once_per_question_policy() {
        let (mut engine, _) = engine();
        let mut game = engine.create(UserId::new(1)).unwrap();

        engine.use_hint(&mut game, HintKind::AudienceHelp).unwrap();
        let letter = right(&game);
        engine.submit_answer(&mut game, letter).unwrap();

        let granted = engine.use_hint(&mut game, HintKind::AudienceHelp).unwrap();
        assert_eq!(
            granted.into_payload().map(|p| p.kind()),
            Some(HintKind::AudienceHelp)
        );
    }
}
