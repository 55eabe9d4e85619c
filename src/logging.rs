use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV_VAR: &str = "TODO_STORE_LOG";

/// Installs the global subscriber. Output goes to a file because the
/// terminal is owned by the TUI while the app runs.
pub fn init(config: &Config) -> Result<PathBuf> {
    let path = config.log_file_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = build_filter(std::env::var(LOG_ENV_VAR).ok().as_deref(), &config.log_level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(path)
}

fn build_filter(from_env: Option<&str>, configured: &str) -> Result<EnvFilter> {
    let directives = from_env.unwrap_or(configured);
    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter '{}'", directives))
}
