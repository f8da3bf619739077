//! Per-player round state.
//!
//! A player is `Active` until it locks in, busts, or is frozen by an
//! opponent. The in-progress draw is not stored; it only exists inside
//! `Game::turn`. These methods are the individual transitions the
//! coordinator strings together into a turn.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Hand, Modifier};
use crate::core::{FreezePolicy, PlayerId};
use crate::strategy::{AlwaysDraw, Decision, Observation, Strategy};

/// Where a player stands in the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerState {
    /// Still taking turns.
    Active,
    /// Banked voluntarily (or won the round).
    Locked,
    /// Drew a duplicate number without an extra life.
    Busted,
    /// Forced out by an opponent's Freeze.
    Frozen,
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PlayerState::Active => "active",
            PlayerState::Locked => "locked",
            PlayerState::Busted => "busted",
            PlayerState::Frozen => "frozen",
        };
        f.write_str(label)
    }
}

/// Cards that act on the table instead of joining the drawer's hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    Freeze,
    Draw3,
}

impl From<Effect> for Modifier {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::Freeze => Modifier::Freeze,
            Effect::Draw3 => Modifier::Draw3,
        }
    }
}

/// What receiving a drawn card did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Receipt {
    /// Card joined the hand; round score recomputed.
    Held,
    /// Duplicate number forgiven by the extra life. The duplicate is discarded.
    LifeUsed,
    /// Duplicate number with no extra life.
    Busted,
    /// Card must be resolved by the coordinator.
    Effect(Effect),
}

/// A seat at the table.
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Hand,
    round_score: i64,
    game_score: i64,
    state: PlayerState,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Create a player with the default `AlwaysDraw` strategy.
    pub fn new(id: PlayerId) -> Self {
        Self::with_strategy(id, Box::new(AlwaysDraw))
    }

    /// Create a player with a custom strategy.
    pub fn with_strategy(id: PlayerId, strategy: Box<dyn Strategy>) -> Self {
        Self {
            id,
            name: id.to_string(),
            hand: Hand::new(),
            round_score: 0,
            game_score: 0,
            state: PlayerState::Active,
            strategy,
        }
    }

    /// Override the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn round_score(&self) -> i64 {
        self.round_score
    }

    pub fn game_score(&self) -> i64 {
        self.game_score
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == PlayerState::Active
    }

    /// Score used for Freeze and Draw3 targeting.
    pub fn table_score(&self) -> i64 {
        self.game_score + self.round_score
    }

    /// Observation vector for the decision hook.
    pub fn observe(&self, max_score: i64) -> Observation {
        Observation::new(&self.hand, self.round_score, self.game_score, max_score)
    }

    pub(crate) fn decide(&mut self, observation: &Observation) -> Decision {
        self.strategy.decide(observation)
    }

    pub(crate) fn learn(
        &mut self,
        prior: &Observation,
        decision: Decision,
        reward: i64,
        next: &Observation,
    ) {
        self.strategy.learn(prior, decision, reward, next);
    }

    /// Bank the round score. Returns the points banked.
    pub(crate) fn lock_in(&mut self) -> i64 {
        let banked = self.round_score;
        self.state = PlayerState::Locked;
        self.game_score += banked;
        self.round_score = 0;
        banked
    }

    /// Apply a drawn card to this player.
    pub(crate) fn receive(&mut self, card: Card) -> Receipt {
        match card {
            Card::Number(_) if self.hand.contains(card) => {
                if self.hand.consume_extra_life() {
                    Receipt::LifeUsed
                } else {
                    self.state = PlayerState::Busted;
                    self.round_score = 0;
                    Receipt::Busted
                }
            }
            Card::Modifier(Modifier::Freeze) => Receipt::Effect(Effect::Freeze),
            Card::Modifier(Modifier::Draw3) => Receipt::Effect(Effect::Draw3),
            _ => {
                self.hand.add(card);
                self.round_score = self.hand.score();
                Receipt::Held
            }
        }
    }

    /// Force this player out of the round. Returns the points banked.
    pub(crate) fn freeze(&mut self, policy: FreezePolicy) -> i64 {
        self.state = PlayerState::Frozen;
        match policy {
            FreezePolicy::Bank => {
                let banked = self.round_score;
                self.game_score += banked;
                self.round_score = 0;
                banked
            }
            FreezePolicy::Discard => 0,
        }
    }

    /// Award the round-win bonus and end this player's round.
    pub(crate) fn award_round_win(&mut self, bonus: i64) -> i64 {
        let award = self.round_score + bonus;
        self.game_score += award;
        self.round_score = 0;
        self.state = PlayerState::Locked;
        award
    }

    /// Clear the hand once the player is out of the round.
    pub(crate) fn end_turn(&mut self) {
        if !self.is_active() {
            self.hand.clear();
        }
    }

    /// Prepare for the next round.
    pub(crate) fn reset_for_round(&mut self) {
        self.hand.clear();
        self.state = PlayerState::Active;
        self.round_score = 0;
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("round_score", &self.round_score)
            .field("game_score", &self.game_score)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
