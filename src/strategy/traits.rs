//! Decision and learning hooks.
//!
//! The engine never decides for a player. Each turn it builds an
//! `Observation`, asks the player's `Strategy` to `decide`, and afterwards
//! reports what happened through `learn`.

use serde::{Deserialize, Serialize};

use crate::cards::{Hand, HAND_FLAGS};

/// Length of the observation vector: 20 hand flags plus 3 scalars.
pub const OBSERVATION_LEN: usize = HAND_FLAGS + 3;

/// Numeric view of a player's position at the start of a decision.
///
/// Layout: `[flag_0..flag_12, +2, +4, +6, +8, +10, x2, life,
/// round_score, game_score, max_score_seen]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    values: [i64; OBSERVATION_LEN],
}

impl Observation {
    /// Index of the round score.
    pub const ROUND_SCORE: usize = HAND_FLAGS;
    /// Index of the game score.
    pub const GAME_SCORE: usize = HAND_FLAGS + 1;
    /// Index of the highest game score seen at the table.
    pub const MAX_SCORE: usize = HAND_FLAGS + 2;

    /// Build from a hand and the three scalars.
    #[must_use]
    pub fn new(hand: &Hand, round_score: i64, game_score: i64, max_score: i64) -> Self {
        let mut values = [0; OBSERVATION_LEN];
        values[..HAND_FLAGS].copy_from_slice(&hand.flags());
        values[Self::ROUND_SCORE] = round_score;
        values[Self::GAME_SCORE] = game_score;
        values[Self::MAX_SCORE] = max_score;
        Self { values }
    }

    /// The raw vector.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// The 20 hand flags.
    #[must_use]
    pub fn hand_flags(&self) -> &[i64] {
        &self.values[..HAND_FLAGS]
    }

    #[must_use]
    pub fn round_score(&self) -> i64 {
        self.values[Self::ROUND_SCORE]
    }

    #[must_use]
    pub fn game_score(&self) -> i64 {
        self.values[Self::GAME_SCORE]
    }

    #[must_use]
    pub fn max_score(&self) -> i64 {
        self.values[Self::MAX_SCORE]
    }

    /// Float copy for numeric learners.
    pub fn to_features(&self) -> Vec<f32> {
        self.values.iter().map(|v| *v as f32).collect()
    }
}

/// Bank the round score or draw another card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Bank,
    Draw,
}

impl Decision {
    /// Numeric action code: 0 banks, anything else draws.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        if code == 0 {
            Decision::Bank
        } else {
            Decision::Draw
        }
    }

    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Decision::Bank => 0,
            Decision::Draw => 1,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Bank => f.write_str("bank"),
            Decision::Draw => f.write_str("draw"),
        }
    }
}

/// Pluggable player policy.
///
/// `learn` is an observation point: it receives the observation the
/// decision was made from, the decision, a reward, and the observation
/// after the turn resolved. The default does nothing.
pub trait Strategy: Send {
    /// Choose bank or draw.
    fn decide(&mut self, observation: &Observation) -> Decision;

    /// Observe the outcome of a decision.
    fn learn(
        &mut self,
        _prior: &Observation,
        _decision: Decision,
        _reward: i64,
        _next: &Observation,
    ) {
    }
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn decide(&mut self, observation: &Observation) -> Decision {
        (**self).decide(observation)
    }

    fn learn(&mut self, prior: &Observation, decision: Decision, reward: i64, next: &Observation) {
        (**self).learn(prior, decision, reward, next)
    }
}
