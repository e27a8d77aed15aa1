//! Beta-Bernoulli Thompson sampling.

use super::BanditPolicy;
use crate::error::Result;
use crate::random::{RandomSource, beta_sample};
use crate::stats::{ArmStatistics, argmax_first};

/// Samples each arm's Beta posterior and plays the largest draw.
///
/// Rewards are treated as Bernoulli: exact 0 and 1 update the posterior,
/// anything else is ignored.
#[derive(Debug, Clone)]
pub struct ThompsonSampling {
    stats: ArmStatistics,
    samples: Vec<f64>,
}

impl ThompsonSampling {
    pub fn new(num_arms: usize) -> Self {
        Self {
            stats: ArmStatistics::new(num_arms),
            samples: vec![0.0; num_arms],
        }
    }

    /// Posterior draws from the most recent selection.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

impl BanditPolicy for ThompsonSampling {
    fn select_arm(&mut self, _round: u64, rng: &mut dyn RandomSource) -> Result<usize> {
        for (arm, slot) in self.samples.iter_mut().enumerate() {
            let alpha = (self.stats.success_count[arm] + 1) as f64;
            let beta = (self.stats.failure_count[arm] + 1) as f64;
            *slot = beta_sample(rng, alpha, beta)?;
        }
        let arm = argmax_first(&self.samples);
        Ok(self.stats.choose(arm))
    }

    fn record_outcome(&mut self, reward: f64) {
        self.stats.record_binary(reward);
    }

    fn statistics(&self) -> &ArmStatistics {
        &self.stats
    }
}
