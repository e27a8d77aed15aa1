use anyhow::{Context, Result};
use bandit_core::config::{DEFAULT_EPSILON, DEFAULT_HORIZON, DEFAULT_KL_UCB_C, DEFAULT_NUM_ARMS};
use bandit_core::{AgentConfig, Algorithm};
use serde::{Deserialize, Serialize};

/// Default environment host
pub const DEFAULT_HOSTNAME: &str = "localhost";

/// Default environment port
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawBanditConfig {
    #[serde(default)]
    pub agent: RawAgentConfig,

    #[serde(default)]
    pub server: RawServerConfig,
}

/// Agent parameters as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawAgentConfig {
    pub num_arms: Option<usize>,
    pub random_seed: Option<u64>,
    pub horizon: Option<u64>,
    /// Kept as text so unknown names surface as a configuration error
    pub algorithm: Option<String>,
    pub epsilon: Option<f64>,
    pub kl_ucb_c: Option<f64>,
}

/// Environment address as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServerConfig {
    pub hostname: Option<String>,
    pub port: Option<u16>,
}

impl RawBanditConfig {
    /// Overlay `overlay` on `self`; values set in the overlay win.
    pub fn merge(self, overlay: RawBanditConfig) -> RawBanditConfig {
        RawBanditConfig {
            agent: RawAgentConfig {
                num_arms: overlay.agent.num_arms.or(self.agent.num_arms),
                random_seed: overlay.agent.random_seed.or(self.agent.random_seed),
                horizon: overlay.agent.horizon.or(self.agent.horizon),
                algorithm: overlay.agent.algorithm.or(self.agent.algorithm),
                epsilon: overlay.agent.epsilon.or(self.agent.epsilon),
                kl_ucb_c: overlay.agent.kl_ucb_c.or(self.agent.kl_ucb_c),
            },
            server: RawServerConfig {
                hostname: overlay.server.hostname.or(self.server.hostname),
                port: overlay.server.port.or(self.server.port),
            },
        }
    }

    /// Apply defaults and validate.
    ///
    /// `default_seed` is used when no layer set a seed.
    pub fn finalize(self, default_seed: u64) -> Result<BanditConfig> {
        let name = self
            .agent
            .algorithm
            .context("No algorithm configured (use --algorithm)")?;
        let algorithm: Algorithm = name.parse()?;

        let agent = AgentConfig {
            algorithm,
            num_arms: self.agent.num_arms.unwrap_or(DEFAULT_NUM_ARMS),
            random_seed: self.agent.random_seed.unwrap_or(default_seed),
            horizon: self.agent.horizon.unwrap_or(DEFAULT_HORIZON),
            epsilon: self.agent.epsilon.unwrap_or(DEFAULT_EPSILON),
            kl_ucb_c: self.agent.kl_ucb_c.unwrap_or(DEFAULT_KL_UCB_C),
        };
        agent.validate()?;

        Ok(BanditConfig {
            agent,
            server: ServerConfig {
                hostname: self
                    .server
                    .hostname
                    .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string()),
                port: self.server.port.unwrap_or(DEFAULT_PORT),
            },
        })
    }
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BanditConfig {
    pub agent: AgentConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub hostname: String,
    pub port: u16,
}
