//! # flip-engine
//!
//! Rule engine for a push-your-luck card game. Players draw from one shared
//! 94-card deck and collect distinct numbers and modifiers. Each turn they
//! either bank their round score or draw again and risk a duplicate number
//! (a bust).
//!
//! ## Design Principles
//!
//! 1. **Pluggable decisions**: the engine never chooses for a player. Every
//!    seat has a `Strategy` that sees a fixed 23-element `Observation` and
//!    reports back through `learn`.
//!
//! 2. **Deterministic**: shuffles go through a seeded `GameRng`, so a seed
//!    and a set of strategies replay the same game.
//!
//! 3. **Typed cards**: `Card::Number` and `Card::Modifier` are distinct
//!    variants; a bust is a state transition, not an error.
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, configuration, errors
//! - `cards`: Cards, the deck, hands and scoring
//! - `strategy`: Decision and learning hooks, baseline strategies
//! - `training`: Transition recording for external learners
//! - `game`: Turn state machine and round/game coordination

pub mod cards;
pub mod core;
pub mod game;
pub mod strategy;
pub mod training;

// Re-export commonly used types
pub use crate::core::{
    FlipError, FreezePolicy, GameConfig, GameRng, GameRngState, PlayerId, PlayerMap,
    ReshufflePolicy, Result,
};

pub use crate::cards::{Card, Deck, Hand, Modifier, STANDARD_DECK_SIZE};

pub use crate::strategy::{AlwaysDraw, BankAt, Decision, Observation, RandomStrategy, Strategy};

pub use crate::training::{Trajectory, TrajectoryRecorder, Transition};

pub use crate::game::{
    Game, GameBuilder, GameEnd, GameResult, GameSummary, Player, PlayerState, RoundSummary,
    TurnOutcome,
};
