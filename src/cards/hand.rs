//! A player's cards for the current round.
//!
//! A hand is a set of flags: one per number 0-12 and one per holdable
//! modifier. Holding the same number twice is impossible by construction;
//! the player's turn logic intercepts a duplicate before it reaches `add`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Modifier, NUMBER_KINDS};

/// Length of the flag view: 13 numbers followed by the 7 holdable modifiers.
pub const HAND_FLAGS: usize = NUMBER_KINDS + Modifier::HELD.len();

/// Cards collected this round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    numbers: [bool; NUMBER_KINDS],
    modifiers: [bool; 7],
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a card as held.
    ///
    /// Returns `false` for Freeze and Draw3, which are never held.
    pub fn add(&mut self, card: Card) -> bool {
        match card {
            Card::Number(n) => {
                debug_assert!(
                    !self.numbers[n as usize],
                    "duplicate number {} must be resolved as a bust",
                    n
                );
                self.numbers[n as usize] = true;
                true
            }
            Card::Modifier(m) => match m.held_slot() {
                Some(slot) => {
                    self.modifiers[slot] = true;
                    true
                }
                None => false,
            },
        }
    }

    /// Check if a card is held.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        match card {
            Card::Number(n) => self.numbers.get(n as usize).copied().unwrap_or(false),
            Card::Modifier(m) => m.held_slot().is_some_and(|slot| self.modifiers[slot]),
        }
    }

    /// Round score of this hand.
    ///
    /// Face values plus flat `+N` bonuses; `x2` doubles the whole total,
    /// bonuses included.
    #[must_use]
    pub fn score(&self) -> i64 {
        let numbers: i64 = self
            .numbers
            .iter()
            .enumerate()
            .filter(|(_, held)| **held)
            .map(|(value, _)| value as i64)
            .sum();

        let bonuses: i64 = Modifier::HELD
            .iter()
            .filter(|m| self.contains(Card::Modifier(**m)))
            .filter_map(|m| m.bonus())
            .sum();

        let total = numbers + bonuses;
        if self.contains(Card::Modifier(Modifier::DoubleScore)) {
            total * 2
        } else {
            total
        }
    }

    /// Distinct numbers held.
    #[must_use]
    pub fn number_count(&self) -> usize {
        self.numbers.iter().filter(|held| **held).count()
    }

    /// Check for an unused extra life.
    #[must_use]
    pub fn has_extra_life(&self) -> bool {
        self.contains(Card::Modifier(Modifier::ExtraLife))
    }

    /// Spend the extra life. Returns `false` if there was none.
    pub fn consume_extra_life(&mut self) -> bool {
        let slot = Modifier::HELD.len() - 1;
        std::mem::replace(&mut self.modifiers[slot], false)
    }

    /// Drop every card.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.iter().chain(self.modifiers.iter()).all(|held| !held)
    }

    /// Held cards: numbers ascending, then modifiers in `Modifier::HELD` order.
    pub fn cards(&self) -> SmallVec<[Card; HAND_FLAGS]> {
        let numbers = self
            .numbers
            .iter()
            .enumerate()
            .filter(|(_, held)| **held)
            .map(|(value, _)| Card::Number(value as u8));
        let modifiers = Modifier::HELD
            .iter()
            .zip(self.modifiers.iter())
            .filter(|(_, held)| **held)
            .map(|(m, _)| Card::Modifier(*m));
        numbers.chain(modifiers).collect()
    }

    /// 0/1 flags in observation order.
    #[must_use]
    pub fn flags(&self) -> [i64; HAND_FLAGS] {
        let mut flags = [0; HAND_FLAGS];
        for (slot, held) in self.numbers.iter().chain(self.modifiers.iter()).enumerate() {
            flags[slot] = i64::from(*held);
        }
        flags
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tokens: Vec<String> = self.cards().iter().map(Card::to_string).collect();
        f.write_str(&tokens.join(" "))
    }
}
