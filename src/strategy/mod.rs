//! Player decision hooks.
//!
//! ## Overview
//!
//! - **Traits**: `Strategy` with `decide` and `learn`
//! - **Observation**: the 23-element numeric vector handed to `decide`
//! - **Baseline**: `AlwaysDraw`, `BankAt`, `RandomStrategy`
//!
//! ## Usage
//!
//! ```
//! use flip_engine::cards::Hand;
//! use flip_engine::strategy::{BankAt, Decision, Observation, Strategy};
//!
//! let mut strategy = BankAt::new(15);
//! let observation = Observation::new(&Hand::new(), 18, 0, 0);
//! assert_eq!(strategy.decide(&observation), Decision::Bank);
//! ```

pub mod baseline;
pub mod traits;

pub use baseline::{AlwaysDraw, BankAt, RandomStrategy};
pub use traits::{Decision, Observation, Strategy, OBSERVATION_LEN};
