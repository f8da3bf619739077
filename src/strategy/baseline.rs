//! Baseline strategies for testing and simulation.

use super::traits::{Decision, Observation, Strategy};
use crate::core::GameRng;

/// Always draws, never learns. The default for every seat.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysDraw;

impl Strategy for AlwaysDraw {
    fn decide(&mut self, _observation: &Observation) -> Decision {
        Decision::Draw
    }
}

/// Banks as soon as the round score reaches `threshold`.
#[derive(Clone, Copy, Debug)]
pub struct BankAt {
    pub threshold: i64,
}

impl BankAt {
    pub fn new(threshold: i64) -> Self {
        Self { threshold }
    }
}

impl Strategy for BankAt {
    fn decide(&mut self, observation: &Observation) -> Decision {
        if observation.round_score() >= self.threshold {
            Decision::Bank
        } else {
            Decision::Draw
        }
    }
}

/// Draws with a fixed probability, from its own RNG stream.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    draw_probability: f64,
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a random strategy.
    ///
    /// Give it a forked `GameRng` so its coin flips never shift the deck order.
    /// A NaN probability never draws.
    pub fn new(draw_probability: f64, rng: GameRng) -> Self {
        let draw_probability = if draw_probability.is_nan() {
            0.0
        } else {
            draw_probability.clamp(0.0, 1.0)
        };
        Self {
            draw_probability,
            rng,
        }
    }
}

impl Strategy for RandomStrategy {
    fn decide(&mut self, _observation: &Observation) -> Decision {
        if self.rng.gen_bool(self.draw_probability) {
            Decision::Draw
        } else {
            Decision::Bank
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;

    fn obs(round_score: i64) -> Observation {
        Observation::new(&Hand::new(), round_score, 0, 0)
    }

    #[test]
    fn test_always_draw() {
        let mut strategy = AlwaysDraw;
        assert_eq!(strategy.decide(&obs(0)), Decision::Draw);
        assert_eq!(strategy.decide(&obs(500)), Decision::Draw);
    }

    #[test]
    fn test_bank_at_threshold() {
        let mut strategy = BankAt::new(20);
        assert_eq!(strategy.decide(&obs(19)), Decision::Draw);
        assert_eq!(strategy.decide(&obs(20)), Decision::Bank);
    }

    #[test]
    fn test_random_strategy_extremes() {
        let mut always = RandomStrategy::new(1.0, GameRng::new(1));
        let mut never = RandomStrategy::new(0.0, GameRng::new(1));
        for _ in 0..20 {
            assert_eq!(always.decide(&obs(0)), Decision::Draw);
            assert_eq!(never.decide(&obs(0)), Decision::Bank);
        }
    }

    #[test]
    fn test_random_strategy_nan_probability_banks() {
        let mut strategy = RandomStrategy::new(f64::NAN, GameRng::new(3));
        for _ in 0..20 {
            assert_eq!(strategy.decide(&obs(0)), Decision::Bank);
        }
    }

    #[test]
    fn test_random_strategy_is_seeded() {
        let mut a = RandomStrategy::new(0.5, GameRng::new(77));
        let mut b = RandomStrategy::new(0.5, GameRng::new(77));
        let seq_a: Vec<_> = (0..32).map(|_| a.decide(&obs(0))).collect();
        let seq_b: Vec<_> = (0..32).map(|_| b.decide(&obs(0))).collect();
        assert_eq!(seq_a, seq_b);
    }
}
