//! Session loop driving one policy against a remote environment
//!
//! Each round the session records the last reward, asks the policy for an
//! arm, sends it and blocks for the next response. The loop ends when the
//! channel closes: a failed send, or a receive that reports the peer is gone.
//! Neither counts as an error. There is no receive timeout.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::config::AgentConfig;
use crate::error::Result;
use crate::policy::{BanditPolicy, Policy};
use crate::protocol::{RECV_BUFFER_SIZE, Response, encode_action, parse_response};
use crate::random::RandomSource;

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    /// Rounds completed, as last reported by the environment
    pub rounds: u64,
    /// Actions successfully transmitted
    pub actions_sent: u64,
    /// Most recent reward received
    pub last_reward: f64,
}

/// One agent session: owns the policy and the random source.
pub struct Session<R: RandomSource> {
    policy: Policy,
    rng: R,
    round: u64,
    last_reward: f64,
    horizon: u64,
}

impl<R: RandomSource> Session<R> {
    pub fn new(policy: Policy, rng: R, horizon: u64) -> Self {
        Self {
            policy,
            rng,
            round: 0,
            last_reward: 0.0,
            horizon,
        }
    }

    /// Build the configured policy and wrap it in a session.
    pub fn from_config(config: &AgentConfig, rng: R) -> Result<Self> {
        let policy = Policy::from_config(config)?;
        Ok(Self::new(policy, rng, config.horizon))
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn last_reward(&self) -> f64 {
        self.last_reward
    }

    /// Feed the last reward to the policy and pick the next arm.
    fn next_action(&mut self) -> Result<usize> {
        self.policy.record_outcome(self.last_reward);
        self.policy.select_arm(self.round, &mut self.rng)
    }

    /// Run rounds over `stream` until the channel closes.
    pub async fn run<S>(&mut self, stream: &mut S) -> Result<SessionSummary>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        info!(
            algorithm = %self.policy.algorithm(),
            arms = self.policy.statistics().num_arms(),
            horizon = self.horizon,
            "Starting session"
        );

        let mut buf = [0u8; RECV_BUFFER_SIZE];
        let mut response = Response {
            reward: self.last_reward,
            rounds: self.round,
        };
        let mut actions_sent = 0;
        let mut horizon_noted = false;

        let mut arm = self.next_action()?;
        loop {
            debug!(arm, "Sending action");
            if let Err(e) = send_action(stream, arm).await {
                debug!(error = %e, "Send failed, ending session");
                break;
            }
            actions_sent += 1;

            let n = match stream.read(&mut buf).await {
                Ok(0) => {
                    debug!("Peer closed the channel");
                    break;
                }
                Ok(n) => n,
                Err(e) => {
                    debug!(error = %e, "Receive failed, ending session");
                    break;
                }
            };

            response = parse_response(&buf[..n], response);
            self.last_reward = response.reward;
            self.round = response.rounds;
            debug!(reward = self.last_reward, rounds = self.round, "Received reward");

            if !horizon_noted && self.round >= self.horizon {
                debug!(horizon = self.horizon, "Horizon reached, waiting for peer to close");
                horizon_noted = true;
            }

            arm = self.next_action()?;
        }

        info!(rounds = self.round, actions_sent, "Terminating");
        Ok(SessionSummary {
            rounds: self.round,
            actions_sent,
            last_reward: self.last_reward,
        })
    }
}

async fn send_action<S>(stream: &mut S, arm: usize) -> std::io::Result<()>
where
    S: AsyncWrite + Unpin,
{
    stream.write_all(&encode_action(arm)).await?;
    stream.flush().await
}
