//! Round-robin baseline.

use super::{BanditPolicy, cyclic_arm};
use crate::error::Result;
use crate::random::RandomSource;
use crate::stats::ArmStatistics;

/// Cycles through the arms in index order and ignores rewards.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    stats: ArmStatistics,
}

impl RoundRobin {
    pub fn new(num_arms: usize) -> Self {
        Self {
            stats: ArmStatistics::new(num_arms),
        }
    }
}

impl BanditPolicy for RoundRobin {
    fn select_arm(&mut self, round: u64, _rng: &mut dyn RandomSource) -> Result<usize> {
        let arm = cyclic_arm(round, self.stats.num_arms());
        Ok(self.stats.choose(arm))
    }

    fn record_outcome(&mut self, _reward: f64) {}

    fn statistics(&self) -> &ArmStatistics {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn test_cycles_regardless_of_rewards() {
        let mut policy = RoundRobin::new(3);
        let mut rng = ScriptedRandom::new();
        let arms: Vec<usize> = (0..7)
            .map(|round| {
                let arm = policy.select_arm(round, &mut rng).unwrap();
                policy.record_outcome(if arm == 2 { 1.0 } else { 0.0 });
                arm
            })
            .collect();
        assert_eq!(arms, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_keeps_no_statistics() {
        let mut policy = RoundRobin::new(2);
        let mut rng = ScriptedRandom::new();
        policy.select_arm(0, &mut rng).unwrap();
        policy.record_outcome(1.0);
        assert_eq!(policy.statistics().pull_count, vec![0, 0]);
        assert_eq!(policy.statistics().estimated_mean, vec![0.0, 0.0]);
    }
}
