use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use bandit_core::{BanditPolicy, SeededRandom, Session};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;
mod connection;

use config::{ConfigLoader, RawAgentConfig, RawBanditConfig, RawServerConfig};

#[derive(Debug, Parser)]
#[command(name = "bandit-agent", about = "Multi-armed bandit agent for a remote environment")]
#[command(version)]
struct Cli {
    /// Number of arms
    #[arg(long = "numArms")]
    num_arms: Option<usize>,

    /// Random seed (defaults to the current time)
    #[arg(long = "randomSeed")]
    random_seed: Option<u64>,

    /// Horizon reported in logs; the environment decides when to stop
    #[arg(long)]
    horizon: Option<u64>,

    /// Environment host
    #[arg(long)]
    hostname: Option<String>,

    /// Environment port
    #[arg(long)]
    port: Option<u16>,

    /// One of rr, epsilon-greedy, UCB, KL-UCB, Thompson-Sampling
    #[arg(long)]
    algorithm: Option<String>,

    /// Exploration rate for epsilon-greedy
    #[arg(long)]
    epsilon: Option<f64>,

    /// Exploration constant for KL-UCB
    #[arg(long = "klUcbC")]
    kl_ucb_c: Option<f64>,

    /// Extra config file layered over user and project config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Flags as the top configuration layer
    fn overrides(&self) -> RawBanditConfig {
        RawBanditConfig {
            agent: RawAgentConfig {
                num_arms: self.num_arms,
                random_seed: self.random_seed,
                horizon: self.horizon,
                algorithm: self.algorithm.clone(),
                epsilon: self.epsilon,
                kl_ucb_c: self.kl_ucb_c,
            },
            server: RawServerConfig {
                hostname: self.hostname.clone(),
                port: self.port,
            },
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ConfigLoader::load(cli.config.as_deref())?
        .merge(cli.overrides())
        .finalize(time_seed())?;
    info!(
        algorithm = %config.agent.algorithm,
        arms = config.agent.num_arms,
        seed = config.agent.random_seed,
        horizon = config.agent.horizon,
        "Agent configured"
    );

    let rng = SeededRandom::new(config.agent.random_seed);
    let mut session = Session::from_config(&config.agent, rng)?;

    let mut stream = connection::connect(&config).await?;
    info!("Connected to {}:{}", config.server.hostname, config.server.port);

    let summary = session.run(&mut stream).await?;
    debug!(stats = ?session.policy().statistics(), "Final statistics");
    info!(
        rounds = summary.rounds,
        last_reward = summary.last_reward,
        "Session ended"
    );
    Ok(())
}
