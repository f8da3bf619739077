//! The shared draw pile.
//!
//! Cards are drawn from the back of the sequence only, and the deck is never
//! topped up. Drawing from an empty deck is `FlipError::DeckExhausted`.
//!
//! The pile is an `im::Vector`, so cloning a deck (for a snapshot or a
//! what-if evaluation) is O(1).

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, Modifier, MAX_NUMBER};
use crate::core::{FlipError, GameRng, Result};

/// Cards in a standard deck: one 0, n copies of each n in 1..=12,
/// six single modifiers and three copies each of Draw3, Freeze, ExtraLife.
pub const STANDARD_DECK_SIZE: usize = 94;

/// Ordered draw pile. The last card is the top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
    drawn: usize,
}

impl Deck {
    /// The full card multiset in its deterministic, unshuffled order.
    pub fn standard_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);
        cards.push(Card::Number(0));
        for value in 1..=MAX_NUMBER {
            cards.extend(std::iter::repeat(Card::Number(value)).take(value as usize));
        }
        for modifier in Modifier::ALL {
            cards.extend(std::iter::repeat(Card::Modifier(modifier)).take(modifier.copies()));
        }
        cards
    }

    /// Build an unshuffled standard deck.
    #[must_use]
    pub fn build() -> Self {
        Self::stacked(Self::standard_cards())
    }

    /// Build a standard deck and shuffle it.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck
    }

    /// Deck with a fixed order; the last card is drawn first.
    pub fn stacked(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            drawn: 0,
        }
    }

    /// Restore the full standard deck in a fresh random order.
    ///
    /// Any prior draw state is discarded.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards = Self::standard_cards();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
        self.drawn = 0;
        log::debug!("deck shuffled (seed {})", rng.seed());
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card> {
        match self.cards.pop_back() {
            Some(card) => {
                self.drawn += 1;
                Ok(card)
            }
            None => {
                log::warn!("deck exhausted after {} draws", self.drawn);
                Err(FlipError::DeckExhausted { drawn: self.drawn })
            }
        }
    }

    /// Cards left to draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards drawn since the deck was built or last shuffled.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Remaining cards, bottom first.
    pub fn remaining(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Tally of remaining cards by value.
    pub fn composition(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }
}
