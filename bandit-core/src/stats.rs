//! Per-arm running statistics owned by a policy.

/// Running estimates for every arm of one session.
///
/// `pull_count[a]` counts how many rewards were attributed to arm `a`, and
/// `estimated_mean[a]` is the running mean of exactly those rewards.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmStatistics {
    pub estimated_mean: Vec<f64>,
    pub pull_count: Vec<u64>,
    pub success_count: Vec<u64>,
    pub failure_count: Vec<u64>,
    pub last_chosen: Option<usize>,
}

impl ArmStatistics {
    pub fn new(num_arms: usize) -> Self {
        Self {
            estimated_mean: vec![0.0; num_arms],
            pull_count: vec![0; num_arms],
            success_count: vec![0; num_arms],
            failure_count: vec![0; num_arms],
            last_chosen: None,
        }
    }

    pub fn num_arms(&self) -> usize {
        self.pull_count.len()
    }

    /// Remember `arm` as the target of the next reward and return it.
    pub fn choose(&mut self, arm: usize) -> usize {
        self.last_chosen = Some(arm);
        arm
    }

    /// Fold `reward` into the running mean of the last chosen arm.
    ///
    /// No-op until an arm has been chosen.
    pub fn record_mean(&mut self, reward: f64) {
        let Some(arm) = self.last_chosen else {
            return;
        };
        let n = self.pull_count[arm] as f64;
        self.estimated_mean[arm] = (self.estimated_mean[arm] * n + reward) / (n + 1.0);
        self.pull_count[arm] += 1;
    }

    /// Count a Bernoulli outcome for the last chosen arm.
    ///
    /// Only exact 0 and 1 are counted; anything else is ignored.
    pub fn record_binary(&mut self, reward: f64) {
        let Some(arm) = self.last_chosen else {
            return;
        };
        if reward == 0.0 {
            self.failure_count[arm] += 1;
        } else if reward == 1.0 {
            self.success_count[arm] += 1;
        }
    }

    /// True while nothing has been chosen or recorded.
    pub fn is_pristine(&self) -> bool {
        self.last_chosen.is_none()
            && self.estimated_mean.iter().all(|&m| m == 0.0)
            && self.pull_count.iter().all(|&c| c == 0)
            && self.success_count.iter().all(|&c| c == 0)
            && self.failure_count.iter().all(|&c| c == 0)
    }
}

/// Index of the first maximum.
///
/// A later value replaces the incumbent only when strictly greater, so ties
/// resolve to the lowest index and NaN never wins unless it sits at index 0.
pub fn argmax_first(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if values[best] < v {
            best = i;
        }
    }
    best
}
