//! Arm-selection policies
//!
//! Five policies share one contract: `select_arm` picks the next arm and
//! remembers it, `record_outcome` attributes a reward to that arm. The
//! closed [`Policy`] enum is what a session owns; [`Policy::from_config`]
//! builds the variant named by the configured [`Algorithm`].

mod epsilon_greedy;
mod kl_ucb;
mod round_robin;
mod thompson;
mod ucb;

pub use epsilon_greedy::EpsilonGreedy;
pub use kl_ucb::KlUcb;
pub use round_robin::RoundRobin;
pub use thompson::ThompsonSampling;
pub use ucb::Ucb1;

use crate::config::{AgentConfig, Algorithm};
use crate::error::Result;
use crate::random::RandomSource;
use crate::stats::ArmStatistics;

/// Capability shared by every policy.
pub trait BanditPolicy {
    /// Choose the arm to pull given the number of completed rounds.
    fn select_arm(&mut self, round: u64, rng: &mut dyn RandomSource) -> Result<usize>;

    /// Attribute `reward` to the last chosen arm. No-op before the first choice.
    fn record_outcome(&mut self, reward: f64);

    /// Statistics gathered so far.
    fn statistics(&self) -> &ArmStatistics;
}

/// The policy a session runs, fixed at session start.
#[derive(Debug, Clone)]
pub enum Policy {
    RoundRobin(RoundRobin),
    EpsilonGreedy(EpsilonGreedy),
    Ucb1(Ucb1),
    KlUcb(KlUcb),
    ThompsonSampling(ThompsonSampling),
}

impl Policy {
    /// Build the policy named by `config.algorithm`.
    pub fn from_config(config: &AgentConfig) -> Result<Self> {
        config.validate()?;
        let arms = config.num_arms;
        Ok(match config.algorithm {
            Algorithm::RoundRobin => Self::RoundRobin(RoundRobin::new(arms)),
            Algorithm::EpsilonGreedy => {
                Self::EpsilonGreedy(EpsilonGreedy::new(arms, config.epsilon))
            }
            Algorithm::Ucb => Self::Ucb1(Ucb1::new(arms)),
            Algorithm::KlUcb => Self::KlUcb(KlUcb::new(arms, config.kl_ucb_c)),
            Algorithm::ThompsonSampling => Self::ThompsonSampling(ThompsonSampling::new(arms)),
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::RoundRobin(_) => Algorithm::RoundRobin,
            Self::EpsilonGreedy(_) => Algorithm::EpsilonGreedy,
            Self::Ucb1(_) => Algorithm::Ucb,
            Self::KlUcb(_) => Algorithm::KlUcb,
            Self::ThompsonSampling(_) => Algorithm::ThompsonSampling,
        }
    }

    fn inner(&self) -> &dyn BanditPolicy {
        match self {
            Self::RoundRobin(p) => p,
            Self::EpsilonGreedy(p) => p,
            Self::Ucb1(p) => p,
            Self::KlUcb(p) => p,
            Self::ThompsonSampling(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn BanditPolicy {
        match self {
            Self::RoundRobin(p) => p,
            Self::EpsilonGreedy(p) => p,
            Self::Ucb1(p) => p,
            Self::KlUcb(p) => p,
            Self::ThompsonSampling(p) => p,
        }
    }
}

impl BanditPolicy for Policy {
    fn select_arm(&mut self, round: u64, rng: &mut dyn RandomSource) -> Result<usize> {
        self.inner_mut().select_arm(round, rng)
    }

    fn record_outcome(&mut self, reward: f64) {
        self.inner_mut().record_outcome(reward)
    }

    fn statistics(&self) -> &ArmStatistics {
        self.inner().statistics()
    }
}

/// `round mod num_arms` as an arm index.
pub(crate) fn cyclic_arm(round: u64, num_arms: usize) -> usize {
    (round % num_arms as u64) as usize
}
