//! Taskdeck Configuration System
//!
//! A standalone configuration library for taskdeck:
//! - TOML-based configuration file (`~/.taskdeck/config.toml`)
//! - API endpoint and credential settings with environment overrides
//! - Behavioral options for the TUI
//!
//! This crate is independent of the TUI and can be used in other projects.
//!
//! - [`config`] - Configuration loading
//! - [`types`] - Data structures for config and options

pub mod config;
pub mod types;

// Re-export commonly used types
pub use types::Config;
pub use types::{ApiConfig, Options, UiConfig};

/// Errors that can occur during config operations
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Home directory not found")]
    NoHomeDir,

    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
