//! bandit-core: Multi-armed bandit policies and the round protocol
//!
//! This crate provides the decision-making core of the bandit agent:
//!
//! - **Policies** - [`Policy`] over round-robin, epsilon-greedy, UCB1,
//!   KL-UCB and Thompson sampling, all behind [`BanditPolicy`]
//! - **Statistics** - [`ArmStatistics`] with the running means and counters
//!   each policy keeps
//! - **Randomness** - [`RandomSource`] with the seeded [`SeededRandom`] and
//!   the replaying [`ScriptedRandom`]
//! - **Protocol** - [`protocol`] encoding of actions and parsing of rewards
//! - **Session** - [`Session`] driving a policy over any async byte stream
//!
//! # Quick Start
//!
//! ```no_run
//! use bandit_core::{AgentConfig, Algorithm, SeededRandom, Session};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AgentConfig::new(Algorithm::KlUcb, 42).with_num_arms(10);
//!     let mut session = Session::from_config(&config, SeededRandom::new(config.random_seed))?;
//!
//!     let mut stream = tokio::net::TcpStream::connect(("localhost", 5000)).await?;
//!     let summary = session.run(&mut stream).await?;
//!     println!("Finished after {} rounds", summary.rounds);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod math;
pub mod policy;
pub mod protocol;
pub mod random;
pub mod session;
pub mod stats;

// Re-export key types for convenience
pub use config::{AgentConfig, Algorithm};
pub use error::{BanditError, Result};
pub use policy::{
    BanditPolicy, EpsilonGreedy, KlUcb, Policy, RoundRobin, ThompsonSampling, Ucb1,
};
pub use protocol::{Response, encode_action, parse_response};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use session::{Session, SessionSummary};
pub use stats::ArmStatistics;
