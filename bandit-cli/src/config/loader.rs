use super::types::RawBanditConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged file configuration (user, then project, then explicit file)
    ///
    /// Missing user and project files are skipped; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<RawBanditConfig> {
        let mut raw = RawBanditConfig::default();

        // Layer 1: User config
        if let Some(user_path) = Self::user_config_path()
            && user_path.exists()
        {
            raw = raw.merge(Self::read_file(&user_path)?);
        }

        // Layer 2: Project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            raw = raw.merge(Self::read_file(&project_path)?);
        }

        // Layer 3: --config
        if let Some(path) = explicit {
            raw = raw.merge(Self::read_file(path)?);
        }

        Ok(raw)
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "bandit-agent").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get project config path
    /// Can be overridden with BANDIT_PROJECT_CONFIG_DIR env var
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("BANDIT_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".bandit/config.toml")
        }
    }

    /// Read and parse a single config file
    pub fn read_file(path: &Path) -> Result<RawBanditConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
