//! Transition log for external learners.
//!
//! Every call to `Strategy::learn` is one `Transition`. A
//! `TrajectoryRecorder` wraps any strategy and appends those transitions to
//! a shared `Trajectory` that the caller keeps a handle to, so the log
//! outlives the game that owns the strategy.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::strategy::{Decision, Observation, Strategy};

/// One observed decision and its outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Observation the decision was made from.
    pub prior: Observation,
    /// Decision taken.
    pub decision: Decision,
    /// Reward reported by the engine.
    pub reward: i64,
    /// Observation after the turn resolved.
    pub next: Observation,
}

/// Ordered transitions for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    pub transitions: Vec<Transition>,
}

impl Trajectory {
    /// Create an empty trajectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transition.
    pub fn push(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    /// Get the number of transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if trajectory is empty.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Iterate over transitions in order.
    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.iter()
    }

    /// Sum of all rewards.
    pub fn total_reward(&self) -> i64 {
        self.transitions.iter().map(|t| t.reward).sum()
    }

    /// Transitions where the decision was `decision`.
    pub fn count(&self, decision: Decision) -> usize {
        self.transitions.iter().filter(|t| t.decision == decision).count()
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode from `to_bytes` output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Handle to a trajectory being recorded.
pub type SharedTrajectory = Arc<Mutex<Trajectory>>;

/// Strategy wrapper that records every `learn` call.
pub struct TrajectoryRecorder<S> {
    inner: S,
    log: SharedTrajectory,
}

impl<S: Strategy> TrajectoryRecorder<S> {
    /// Wrap `inner`; returns the recorder and a handle to its log.
    pub fn new(inner: S) -> (Self, SharedTrajectory) {
        let log = SharedTrajectory::default();
        (
            Self {
                inner,
                log: Arc::clone(&log),
            },
            log,
        )
    }
}

impl<S: Strategy> Strategy for TrajectoryRecorder<S> {
    fn decide(&mut self, observation: &Observation) -> Decision {
        self.inner.decide(observation)
    }

    fn learn(&mut self, prior: &Observation, decision: Decision, reward: i64, next: &Observation) {
        self.inner.learn(prior, decision, reward, next);
        // Poisoned only if a reader panicked; the log itself is intact.
        let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);
        log.push(Transition {
            prior: *prior,
            decision,
            reward,
            next: *next,
        });
    }
}
