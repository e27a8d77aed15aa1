//! UCB1 selection.

use super::BanditPolicy;
use crate::error::Result;
use crate::math::ucb1_index;
use crate::random::RandomSource;
use crate::stats::{ArmStatistics, argmax_first};

/// Optimistic selection by `mean + sqrt(2 ln(t) / n)`.
///
/// The first `num_arms` rounds pull each arm once in index order, so every
/// arm has a pull before any index is computed.
#[derive(Debug, Clone)]
pub struct Ucb1 {
    stats: ArmStatistics,
    ucb: Vec<f64>,
}

impl Ucb1 {
    pub fn new(num_arms: usize) -> Self {
        Self {
            stats: ArmStatistics::new(num_arms),
            ucb: vec![0.0; num_arms],
        }
    }

    /// Indices computed on the most recent post-warm-up round.
    pub fn indices(&self) -> &[f64] {
        &self.ucb
    }
}

impl BanditPolicy for Ucb1 {
    fn select_arm(&mut self, round: u64, _rng: &mut dyn RandomSource) -> Result<usize> {
        if round < self.stats.num_arms() as u64 {
            return Ok(self.stats.choose(round as usize));
        }
        for (arm, slot) in self.ucb.iter_mut().enumerate() {
            *slot = ucb1_index(
                self.stats.estimated_mean[arm],
                self.stats.pull_count[arm],
                round,
            );
        }
        let arm = argmax_first(&self.ucb);
        Ok(self.stats.choose(arm))
    }

    fn record_outcome(&mut self, reward: f64) {
        self.stats.record_mean(reward);
    }

    fn statistics(&self) -> &ArmStatistics {
        &self.stats
    }
}
