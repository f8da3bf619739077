//! Core engine types: players, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{FreezePolicy, GameConfig, ReshufflePolicy};
pub use error::{FlipError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
