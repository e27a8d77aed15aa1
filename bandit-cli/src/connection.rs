//! TCP connection to the bandit environment

use anyhow::{Context, Result};
use tokio::net::{TcpStream, lookup_host};
use tracing::debug;

use crate::config::BanditConfig;

/// Resolve the configured host and connect to the first address that accepts.
pub async fn connect(config: &BanditConfig) -> Result<TcpStream> {
    let host = config.server.hostname.as_str();
    let port = config.server.port;

    let addrs: Vec<_> = lookup_host((host, port))
        .await
        .with_context(|| format!("Failed to resolve {}", host))?
        .collect();
    if addrs.is_empty() {
        anyhow::bail!("No addresses found for {}", host);
    }
    debug!(?addrs, "Resolved environment address");

    let stream = TcpStream::connect(&addrs[..])
        .await
        .with_context(|| format!("Failed to connect to {}:{}", host, port))?;
    debug!(peer = ?stream.peer_addr().ok(), "Connected");
    Ok(stream)
}
