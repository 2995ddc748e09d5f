//! Configuration data structures

use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Task service endpoint and credential
    #[serde(default)]
    pub api: ApiConfig,

    /// Global options (behavior, features)
    #[serde(default)]
    pub options: Options,

    /// UI-specific settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// Task service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the task service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token; the `TASKDECK_TOKEN` environment variable wins
    #[serde(default)]
    pub token: Option<String>,
}

/// Global options for application behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Start with completed tasks visible instead of pending ones
    #[serde(default)]
    pub display_done: bool,
}

/// UI-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show UI borders
    #[serde(default = "default_true")]
    pub show_borders: bool,

    /// Log file path; defaults to `~/.taskdeck/taskdeck.log`
    #[serde(default)]
    pub log_file: Option<String>,
}

// Default value helper functions
fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "https://railway.todo.techtrain.dev".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            display_done: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_borders: default_true(),
            log_file: None,
        }
    }
}
