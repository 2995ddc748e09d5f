//! Configuration loading

use crate::types::Config;
use crate::{ConfigError, Result};
use std::path::PathBuf;

impl Config {
    /// Load configuration from `~/.taskdeck/config.toml`.
    ///
    /// A missing file yields the defaults; a file that fails to parse is
    /// an error so typos are not silently ignored.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        let mut config: Config = toml::from_str(&contents)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string (used by tests and tooling).
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or(ConfigError::NoHomeDir)?
            .join(".taskdeck")
            .join("config.toml"))
    }

    /// Resolved log file path
    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.ui.log_file {
            return Ok(PathBuf::from(path));
        }
        Ok(dirs::home_dir()
            .ok_or(ConfigError::NoHomeDir)?
            .join(".taskdeck")
            .join("taskdeck.log"))
    }

    /// Environment variables beat file values for the credential
    fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var("TASKDECK_TOKEN") {
            if !token.is_empty() {
                self.api.token = Some(token);
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "api.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
