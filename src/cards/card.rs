//! Card values.
//!
//! A card is either a numbered card (0-12) or one of nine modifiers.
//! Cards print and parse as the short tokens used in the turn trace:
//! `"7"`, `"+4"`, `"x2"`, `"draw 3"`, `"freeze"`, `"life"`.

use serde::{Deserialize, Serialize};

use crate::core::{FlipError, Result};

/// Highest face value of a numbered card.
pub const MAX_NUMBER: u8 = 12;

/// Number of distinct numbered cards (0 through `MAX_NUMBER`).
pub const NUMBER_KINDS: usize = MAX_NUMBER as usize + 1;

/// Non-numbered cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Plus2,
    Plus4,
    Plus6,
    Plus8,
    Plus10,
    DoubleScore,
    Draw3,
    Freeze,
    ExtraLife,
}

impl Modifier {
    /// All modifiers in deck order.
    pub const ALL: [Modifier; 9] = [
        Modifier::Plus2,
        Modifier::Plus4,
        Modifier::Plus6,
        Modifier::Plus8,
        Modifier::Plus10,
        Modifier::DoubleScore,
        Modifier::Draw3,
        Modifier::Freeze,
        Modifier::ExtraLife,
    ];

    /// Modifiers a hand can hold, in observation-vector order.
    pub const HELD: [Modifier; 7] = [
        Modifier::Plus2,
        Modifier::Plus4,
        Modifier::Plus6,
        Modifier::Plus8,
        Modifier::Plus10,
        Modifier::DoubleScore,
        Modifier::ExtraLife,
    ];

    /// Copies of this modifier in a standard deck.
    #[must_use]
    pub const fn copies(self) -> usize {
        match self {
            Modifier::Draw3 | Modifier::Freeze | Modifier::ExtraLife => 3,
            _ => 1,
        }
    }

    /// Flat score bonus, for the `+N` modifiers.
    #[must_use]
    pub const fn bonus(self) -> Option<i64> {
        match self {
            Modifier::Plus2 => Some(2),
            Modifier::Plus4 => Some(4),
            Modifier::Plus6 => Some(6),
            Modifier::Plus8 => Some(8),
            Modifier::Plus10 => Some(10),
            _ => None,
        }
    }

    /// Whether drawing this card targets another player instead of joining the hand.
    #[must_use]
    pub const fn is_effect(self) -> bool {
        matches!(self, Modifier::Draw3 | Modifier::Freeze)
    }

    /// Position among `HELD`, or `None` for effect cards.
    #[must_use]
    pub const fn held_slot(self) -> Option<usize> {
        match self {
            Modifier::Plus2 => Some(0),
            Modifier::Plus4 => Some(1),
            Modifier::Plus6 => Some(2),
            Modifier::Plus8 => Some(3),
            Modifier::Plus10 => Some(4),
            Modifier::DoubleScore => Some(5),
            Modifier::ExtraLife => Some(6),
            Modifier::Draw3 | Modifier::Freeze => None,
        }
    }

    /// Trace token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Modifier::Plus2 => "+2",
            Modifier::Plus4 => "+4",
            Modifier::Plus6 => "+6",
            Modifier::Plus8 => "+8",
            Modifier::Plus10 => "+10",
            Modifier::DoubleScore => "x2",
            Modifier::Draw3 => "draw 3",
            Modifier::Freeze => "freeze",
            Modifier::ExtraLife => "life",
        }
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Numbered card, face value 0-12.
    Number(u8),
    /// Modifier card.
    Modifier(Modifier),
}

impl Card {
    /// Create a numbered card, rejecting values above `MAX_NUMBER`.
    pub fn number(value: u8) -> Result<Self> {
        if value > MAX_NUMBER {
            return Err(FlipError::InvalidCardValue(value.to_string()));
        }
        Ok(Card::Number(value))
    }

    /// Face value for numbered cards.
    #[must_use]
    pub const fn face_value(self) -> Option<u8> {
        match self {
            Card::Number(n) => Some(n),
            Card::Modifier(_) => None,
        }
    }
}

impl From<Modifier> for Card {
    fn from(modifier: Modifier) -> Self {
        Card::Modifier(modifier)
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Number(n) => write!(f, "{}", n),
            Card::Modifier(m) => write!(f, "{}", m),
        }
    }
}

impl std::str::FromStr for Card {
    type Err = FlipError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if let Some(modifier) = Modifier::ALL.iter().find(|m| m.token() == token) {
            return Ok(Card::Modifier(*modifier));
        }
        match token.parse::<u8>() {
            Ok(value) => Card::number(value),
            Err(_) => Err(FlipError::InvalidCardValue(token.to_string())),
        }
    }
}
