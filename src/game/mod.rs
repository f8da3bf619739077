//! Turn state machine and round coordination.
//!
//! ## Flow
//!
//! - `Game::play_game` repeats `play_round` until a target score or the round cap
//! - `Game::play_round` gives each active seat a turn, in order, until nobody is
//!   active or a player collects enough distinct numbers for the round-win bonus
//! - `Game::turn` asks the seat's strategy to bank or draw and applies the card;
//!   Freeze and Draw3 are resolved against the table before the turn ends

mod game;
mod player;

pub use game::{
    EffectOutcome, Game, GameBuilder, GameEnd, GameResult, GameSummary, RoundSummary, RoundWin,
    TurnOutcome, DRAW3_TURNS,
};
pub use player::{Effect, Player, PlayerState, Receipt};
