//! Cards, the shared deck, and per-player hands.
//!
//! ## Key Types
//!
//! - `Card`: tagged value, either `Number(0..=12)` or a `Modifier`
//! - `Deck`: the 94-card draw pile, drawn from the top only
//! - `Hand`: which numbers and modifiers a player holds this round

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, Modifier, MAX_NUMBER, NUMBER_KINDS};
pub use deck::{Deck, STANDARD_DECK_SIZE};
pub use hand::{Hand, HAND_FLAGS};
