//! Confidence-bound math for the UCB family.

use crate::random::MACHINE_EPSILON;

/// Smoothed KL divergence between Bernoulli(p) and Bernoulli(q).
pub fn kl_bernoulli(p: f64, q: f64) -> f64 {
    p * ((p + MACHINE_EPSILON) / q + MACHINE_EPSILON).ln()
        + (1.0 - p) * ((1.0 - p + MACHINE_EPSILON) / (1.0 - q + MACHINE_EPSILON)).ln()
}

/// UCB1 index: `mean + sqrt(2 ln(round) / pulls)`.
pub fn ucb1_index(mean: f64, pulls: u64, round: u64) -> f64 {
    mean + (2.0 * (round as f64).ln() / pulls as f64).sqrt()
}

/// Largest `q` in `[mean, 1]` with `KL(mean, q)` below
/// `(ln(round) + c ln(ln(round))) / pulls`, found by bisection.
///
/// The loop has no iteration cap. It stops once `high - mid` drops below
/// `MACHINE_EPSILON`, which finite endpoints always reach because halving
/// the interval eventually collapses `mid` onto an endpoint. With
/// `mean == 1.0` the interval is empty and `1.0` is returned at once.
pub fn kl_upper_bound(mean: f64, pulls: u64, round: u64, c: f64) -> f64 {
    let log_round = (round as f64).ln();
    let bound = (log_round + c * log_round.ln()) / pulls as f64;

    let mut low = mean;
    let mut high = 1.0;
    loop {
        let mid = (high + low) / 2.0;
        if (high - mid).abs() < MACHINE_EPSILON {
            return mid;
        }
        if kl_bernoulli(mean, mid) < bound {
            low = mid;
        } else {
            high = mid;
        }
    }
}
