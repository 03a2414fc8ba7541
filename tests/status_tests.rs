//! Derived status tests.
//!
//! Status is a pure function of the stored facts. These tests set the
//! facts directly, the way a storage layer would rebuild a game, and
//! check the precedence: in progress, timeout, fail, won, money.

use std::sync::Arc;

use chrono::{Duration, Utc};
use quiz_engine::core::{EngineConfig, InMemoryLedger, ManualClock, UserId};
use quiz_engine::game::{AnswerKeyMapper, Game, GameQuestion, GameStatus};
use quiz_engine::questions::{InMemoryQuestionBank, Level, Question, QuestionId};
use quiz_engine::rules::GameEngine;

fn game() -> Game {
    let questions = (0..15u8)
        .map(|level| {
            let q = Question::new(
                QuestionId::new(u32::from(level)),
                Level::new(level),
                format!("Question {}", level),
                ["right", "wrong 1", "wrong 2", "wrong 3"],
            );
            GameQuestion::new(Arc::new(q), AnswerKeyMapper::from_slots([2, 1, 4, 3]).unwrap())
        })
        .collect();
    Game::new(UserId::new(1), questions, Utc::now())
}

/// Game with `finished_at` set shortly after creation.
fn finished_game() -> Game {
    let mut g = game();
    g.finished_at = Some(g.created_at + Duration::minutes(1));
    assert!(g.is_finished());
    g
}

fn limit() -> Duration {
    EngineConfig::default().time_limit()
}

#[test]
fn test_unfinished_game_is_in_progress() {
    let mut g = game();
    g.is_failed = true;
    g.created_at = Utc::now() - Duration::hours(2);
    assert_eq!(g.status(limit()), GameStatus::InProgress);
}

#[test]
fn test_status_won() {
    let mut g = finished_game();
    g.current_level = 15;
    assert_eq!(g.status(limit()), GameStatus::Won);
}

#[test]
fn test_status_fail() {
    let mut g = finished_game();
    g.is_failed = true;
    assert_eq!(g.status(limit()), GameStatus::Fail);
}

#[test]
fn test_status_timeout_dominates_fail() {
    let mut g = finished_game();
    g.created_at = g.created_at - Duration::hours(1);
    g.is_failed = true;
    assert_eq!(g.status(limit()), GameStatus::Timeout);
}

#[test]
fn test_status_money() {
    let g = finished_game();
    assert_eq!(g.status(limit()), GameStatus::Money);
}

#[test]
fn test_previous_level() {
    let mut g = game();
    g.current_level = 0;
    assert_eq!(g.previous_level(), -1);
    g.current_level = 12;
    assert_eq!(g.previous_level(), 11);
}

#[test]
fn test_current_game_question_is_first_at_start() {
    let g = game();
    assert_eq!(g.current_game_question().unwrap(), &g.questions[0]);
}

#[test]
fn test_engine_uses_configured_limit() {
    let clock = ManualClock::default();
    let config = EngineConfig::default()
        .with_seed(1)
        .with_time_limit(Duration::minutes(5));
    let engine = GameEngine::with_clock(
        InMemoryQuestionBank::new(),
        InMemoryLedger::new(),
        clock,
        config,
    )
    .unwrap();

    let mut g = game();
    g.finished_at = Some(g.created_at + Duration::minutes(6));
    assert_eq!(engine.status(&g), GameStatus::Timeout);
    assert_eq!(g.status(Duration::minutes(35)), GameStatus::Money);
}
