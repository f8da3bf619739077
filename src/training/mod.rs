//! Recording infrastructure for external learners.
//!
//! The engine ships no learning algorithm. This module only captures what
//! the learning hook sees so that a learner outside the engine can consume it.
//!
//! ## Usage
//!
//! ```
//! use flip_engine::game::GameBuilder;
//! use flip_engine::strategy::BankAt;
//! use flip_engine::training::TrajectoryRecorder;
//!
//! let (recorder, log) = TrajectoryRecorder::new(BankAt::new(20));
//! let mut game = GameBuilder::new()
//!     .player_count(2)
//!     .seed(7)
//!     .strategy(0, recorder)
//!     .build()
//!     .unwrap();
//!
//! game.play_round().unwrap();
//! assert!(!log.lock().unwrap().is_empty());
//! ```

pub mod trajectory;

pub use trajectory::{SharedTrajectory, Trajectory, TrajectoryRecorder, Transition};
