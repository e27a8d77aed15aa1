//! Epsilon-greedy selection.

use super::{BanditPolicy, cyclic_arm};
use crate::error::Result;
use crate::random::RandomSource;
use crate::stats::{ArmStatistics, argmax_first};

/// Exploits the best empirical mean, exploring with probability `epsilon`.
///
/// Exploration walks the arms by round index rather than drawing a second
/// random arm, so each round consumes exactly one uniform draw.
#[derive(Debug, Clone)]
pub struct EpsilonGreedy {
    stats: ArmStatistics,
    epsilon: f64,
}

impl EpsilonGreedy {
    pub fn new(num_arms: usize, epsilon: f64) -> Self {
        Self {
            stats: ArmStatistics::new(num_arms),
            epsilon,
        }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl BanditPolicy for EpsilonGreedy {
    fn select_arm(&mut self, round: u64, rng: &mut dyn RandomSource) -> Result<usize> {
        let arm = if rng.uniform() < self.epsilon {
            cyclic_arm(round, self.stats.num_arms())
        } else {
            argmax_first(&self.stats.estimated_mean)
        };
        Ok(self.stats.choose(arm))
    }

    fn record_outcome(&mut self, reward: f64) {
        self.stats.record_mean(reward);
    }

    fn statistics(&self) -> &ArmStatistics {
        &self.stats
    }
}
