//! KL-UCB selection.

use super::BanditPolicy;
use crate::error::Result;
use crate::math::kl_upper_bound;
use crate::random::RandomSource;
use crate::stats::{ArmStatistics, argmax_first};

/// UCB with Bernoulli KL confidence bounds.
///
/// Shares the UCB1 warm-up. Afterwards every arm's bound is recomputed by
/// bisection each round.
#[derive(Debug, Clone)]
pub struct KlUcb {
    stats: ArmStatistics,
    bounds: Vec<f64>,
    c: f64,
}

impl KlUcb {
    pub fn new(num_arms: usize, c: f64) -> Self {
        Self {
            stats: ArmStatistics::new(num_arms),
            bounds: vec![0.0; num_arms],
            c,
        }
    }

    pub fn exploration_constant(&self) -> f64 {
        self.c
    }

    /// Bounds computed on the most recent post-warm-up round.
    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }
}

impl BanditPolicy for KlUcb {
    fn select_arm(&mut self, round: u64, _rng: &mut dyn RandomSource) -> Result<usize> {
        if round < self.stats.num_arms() as u64 {
            return Ok(self.stats.choose(round as usize));
        }
        for (arm, slot) in self.bounds.iter_mut().enumerate() {
            *slot = kl_upper_bound(
                self.stats.estimated_mean[arm],
                self.stats.pull_count[arm],
                round,
                self.c,
            );
        }
        let arm = argmax_first(&self.bounds);
        Ok(self.stats.choose(arm))
    }

    fn record_outcome(&mut self, reward: f64) {
        self.stats.record_mean(reward);
    }

    fn statistics(&self) -> &ArmStatistics {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    fn warmed_up(rewards: &[f64]) -> KlUcb {
        let mut policy = KlUcb::new(rewards.len(), 3.0);
        let mut rng = ScriptedRandom::new();
        for (round, &reward) in rewards.iter().enumerate() {
            assert_eq!(policy.select_arm(round as u64, &mut rng).unwrap(), round);
            policy.record_outcome(reward);
        }
        policy
    }

    #[test]
    fn test_warm_up_order() {
        let policy = warmed_up(&[0.0, 1.0, 0.0]);
        assert_eq!(policy.statistics().pull_count, vec![1, 1, 1]);
    }

    #[test]
    fn test_higher_mean_gets_higher_bound() {
        let mut policy = warmed_up(&[0.2, 0.7, 0.4]);
        let mut rng = ScriptedRandom::new();
        let arm = policy.select_arm(10, &mut rng).unwrap();
        let bounds = policy.bounds();
        assert!(bounds[1] >= bounds[2]);
        assert!(bounds[2] >= bounds[0]);
        assert_eq!(arm, 1);
    }

    #[test]
    fn test_bounds_dominate_means() {
        let mut policy = warmed_up(&[0.1, 0.5, 0.9]);
        let mut rng = ScriptedRandom::new();
        policy.select_arm(20, &mut rng).unwrap();
        for (bound, mean) in policy.bounds().iter().zip(&policy.statistics().estimated_mean) {
            assert!(*bound >= *mean - 1e-8);
            assert!(*bound <= 1.0);
        }
    }

    #[test]
    fn test_perfect_arm_terminates() {
        let mut policy = warmed_up(&[1.0, 1.0]);
        let mut rng = ScriptedRandom::new();
        assert_eq!(policy.select_arm(2, &mut rng).unwrap(), 0);
        assert_eq!(policy.bounds(), &[1.0, 1.0]);
    }
}
