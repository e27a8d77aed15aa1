mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BanditConfig, RawAgentConfig, RawBanditConfig, RawServerConfig};
