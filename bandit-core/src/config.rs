//! Agent parameters consumed by the policy factory and session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BanditError, Result};

/// Default number of arms
pub const DEFAULT_NUM_ARMS: usize = 5;
/// Default horizon (informational, the peer decides when to stop)
pub const DEFAULT_HORIZON: u64 = 200;
/// Default epsilon for epsilon-greedy
pub const DEFAULT_EPSILON: f64 = 0.0;
/// Default KL-UCB exploration constant
pub const DEFAULT_KL_UCB_C: f64 = 3.0;

/// Arm-selection algorithm, named as on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "rr")]
    RoundRobin,
    #[serde(rename = "epsilon-greedy")]
    EpsilonGreedy,
    #[serde(rename = "UCB")]
    Ucb,
    #[serde(rename = "KL-UCB")]
    KlUcb,
    #[serde(rename = "Thompson-Sampling")]
    ThompsonSampling,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::RoundRobin,
        Algorithm::EpsilonGreedy,
        Algorithm::Ucb,
        Algorithm::KlUcb,
        Algorithm::ThompsonSampling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "rr",
            Self::EpsilonGreedy => "epsilon-greedy",
            Self::Ucb => "UCB",
            Self::KlUcb => "KL-UCB",
            Self::ThompsonSampling => "Thompson-Sampling",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = BanditError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| BanditError::UnknownAlgorithm(s.to_string()))
    }
}

/// Validated parameters for one agent session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub algorithm: Algorithm,
    pub num_arms: usize,
    pub random_seed: u64,
    pub horizon: u64,
    pub epsilon: f64,
    pub kl_ucb_c: f64,
}

impl AgentConfig {
    /// Config with defaults for everything but the algorithm and seed.
    pub fn new(algorithm: Algorithm, random_seed: u64) -> Self {
        Self {
            algorithm,
            num_arms: DEFAULT_NUM_ARMS,
            random_seed,
            horizon: DEFAULT_HORIZON,
            epsilon: DEFAULT_EPSILON,
            kl_ucb_c: DEFAULT_KL_UCB_C,
        }
    }

    #[must_use]
    pub fn with_num_arms(mut self, num_arms: usize) -> Self {
        self.num_arms = num_arms;
        self
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_kl_ucb_c(mut self, c: f64) -> Self {
        self.kl_ucb_c = c;
        self
    }

    /// Reject parameters no policy can run with.
    pub fn validate(&self) -> Result<()> {
        if self.num_arms == 0 {
            return Err(BanditError::InvalidConfig(
                "number of arms must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(BanditError::InvalidConfig(format!(
                "epsilon must be in [0, 1], got {}",
                self.epsilon
            )));
        }
        if !self.kl_ucb_c.is_finite() {
            return Err(BanditError::InvalidConfig(format!(
                "KL-UCB constant must be finite, got {}",
                self.kl_ucb_c
            )));
        }
        Ok(())
    }
}
