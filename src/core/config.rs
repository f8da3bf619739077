//! Game configuration.
//!
//! Every rule constant the coordinator consults lives here, together with
//! the policies for the behaviours the rules leave open (what a freeze does
//! to the frozen player's points, how long the deck lives, when the game ends).

use serde::{Deserialize, Serialize};

use super::error::{FlipError, Result};

/// What happens to a frozen player's round score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreezePolicy {
    /// Fold the round score into the game score, exactly like locking in.
    #[default]
    Bank,
    /// Drop the round score at round reset.
    Discard,
}

/// How long a shuffled deck lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReshufflePolicy {
    /// One shared deck, shuffled at construction and depleted across rounds.
    #[default]
    PerGame,
    /// Rebuild and reshuffle the full deck at the start of every round.
    PerRound,
}

/// Complete configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (1-255).
    pub player_count: usize,

    /// Seed for deck shuffles. Same seed and strategies replay the same game.
    pub seed: u64,

    /// Game ends after the round in which any player reaches this score.
    /// `None` plays until the deck runs out.
    pub target_score: Option<i64>,

    /// Hard cap on rounds per game.
    pub max_rounds: u32,

    /// Treatment of a frozen player's round score.
    pub freeze_policy: FreezePolicy,

    /// Deck lifetime.
    pub reshuffle: ReshufflePolicy,

    /// Distinct numbers needed to end the round with a bonus.
    pub round_win_threshold: usize,

    /// Points added on top of the round score for a round win.
    pub round_win_bonus: i64,

    /// Reward handed to the learning hook on a bust.
    pub bust_reward: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            seed: 42,
            target_score: Some(200),
            max_rounds: 1000,
            freeze_policy: FreezePolicy::Bank,
            reshuffle: ReshufflePolicy::PerGame,
            round_win_threshold: 7,
            round_win_bonus: 15,
            bust_reward: -5,
        }
    }
}

impl GameConfig {
    /// Set the number of players.
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set (or clear) the target score.
    pub fn with_target_score(mut self, target: Option<i64>) -> Self {
        self.target_score = target;
        self
    }

    /// Set the round cap.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the freeze policy.
    pub fn with_freeze_policy(mut self, policy: FreezePolicy) -> Self {
        self.freeze_policy = policy;
        self
    }

    /// Set the deck lifetime.
    pub fn with_reshuffle(mut self, policy: ReshufflePolicy) -> Self {
        self.reshuffle = policy;
        self
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.player_count == 0 {
            return Err(FlipError::InvalidConfig("at least 1 player required".into()));
        }
        if self.player_count > 255 {
            return Err(FlipError::InvalidConfig(format!(
                "at most 255 players supported, got {}",
                self.player_count
            )));
        }
        // 13 distinct numbers exist (0-12).
        if self.round_win_threshold == 0 || self.round_win_threshold > 13 {
            return Err(FlipError::InvalidConfig(format!(
                "round win threshold must be 1-13, got {}",
                self.round_win_threshold
            )));
        }
        Ok(())
    }
}
