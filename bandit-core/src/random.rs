//! Random source shared by the randomized policies.
//!
//! A single generator is seeded once per process and handed by reference to
//! whichever policy is active, so the draw order is fixed by the sequence of
//! `select_arm` calls and a run is reproducible from its seed.

use std::collections::VecDeque;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Gamma};

use crate::error::{BanditError, Result};

/// Additive smoothing used by the Beta construction and KL divergence.
pub const MACHINE_EPSILON: f64 = 1e-8;

/// Source of uniform and Gamma draws.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Draw from `Gamma(shape, 1)`.
    fn gamma(&mut self, shape: f64) -> Result<f64>;
}

/// Seeded pseudo-random generator used in production.
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    /// Create a generator from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    fn gamma(&mut self, shape: f64) -> Result<f64> {
        let gamma = Gamma::new(shape, 1.0)
            .map_err(|e| BanditError::Distribution(format!("Gamma({shape}, 1): {e}")))?;
        Ok(gamma.sample(&mut self.rng))
    }
}

/// Deterministic source that replays scripted draws.
///
/// Once a script runs dry, uniform draws return `0.0` and Gamma draws return
/// the shape parameter (the distribution mean).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    uniforms: VecDeque<f64>,
    gammas: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_uniforms(mut self, draws: impl IntoIterator<Item = f64>) -> Self {
        self.uniforms.extend(draws);
        self
    }

    #[must_use]
    pub fn with_gammas(mut self, draws: impl IntoIterator<Item = f64>) -> Self {
        self.gammas.extend(draws);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self) -> f64 {
        self.uniforms.pop_front().unwrap_or(0.0)
    }

    fn gamma(&mut self, shape: f64) -> Result<f64> {
        Ok(self.gammas.pop_front().unwrap_or(shape))
    }
}

/// Draw from `Beta(alpha, beta)` as `X / (X + Y + eps)` with `X ~ Gamma(alpha)`
/// drawn before `Y ~ Gamma(beta)`.
pub fn beta_sample(rng: &mut dyn RandomSource, alpha: f64, beta: f64) -> Result<f64> {
    let x = rng.gamma(alpha)?;
    let y = rng.gamma(beta)?;
    Ok(x / (x + y + MACHINE_EPSILON))
}
