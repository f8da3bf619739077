//! Engine errors.
//!
//! Only conditions that stop a game are errors. Busting is an ordinary
//! state transition and never surfaces here.

/// Errors that end the current game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlipError {
    /// A draw was attempted on an empty deck.
    DeckExhausted {
        /// Cards drawn from this deck before it ran out.
        drawn: usize,
    },
    /// A card token or number outside the known vocabulary.
    InvalidCardValue(String),
    /// Configuration rejected by `GameConfig::validate`.
    InvalidConfig(String),
}

impl std::fmt::Display for FlipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlipError::DeckExhausted { drawn } => {
                write!(f, "Deck exhausted after {} draws", drawn)
            }
            FlipError::InvalidCardValue(value) => write!(f, "Invalid card value: {}", value),
            FlipError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for FlipError {}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, FlipError>;
