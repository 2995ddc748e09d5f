//! Taskdeck - terminal client for the task service
//!
//! Lists the user's task lists as tabs, fetches the selected list's tasks
//! over HTTP, and renders them filtered by completion status with a
//! deadline countdown.

mod error;
mod tui;

use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use taskdeck_api::ApiClient;
use taskdeck_config::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taskdeck", version, about = "Terminal client for the task service")]
struct Cli {
    /// Base URL of the task service (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token (overrides config and TASKDECK_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Path to an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            Config::from_toml(&contents)?
        }
        None => Config::load_or_default()?,
    };

    init_logging(&config)?;

    let base_url = cli
        .base_url
        .unwrap_or_else(|| config.api.base_url.clone());
    let token = cli
        .token
        .or_else(|| config.api.token.clone())
        .context("no API token: pass --token, set TASKDECK_TOKEN, or add api.token to ~/.taskdeck/config.toml")?;

    let client = ApiClient::new(base_url, token);
    let app = tui::app::App::new(client, config);

    tracing::info!("starting taskdeck");
    tui::app::run(app).await?;
    Ok(())
}

/// Route logs to a file; stdout belongs to the TUI.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let path = config.log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
