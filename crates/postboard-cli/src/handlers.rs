//! Command handlers for CLI operations

use anyhow::Result;
use postboard_core::Config;
use postboard_providers::{Gateway, HttpSource};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use crate::cli::Cli;
use crate::interactive::run_tui_interactive;

/// Default `RUST_LOG`-style directive for the session log
const DEFAULT_LOG_FILTER: &str = "postboard_cli=info,postboard_providers=info,postboard_core=info";

/// Handle an interactive browsing session
///
/// # Errors
/// Returns an error if the log file or HTTP client cannot be set up, or if
/// the terminal session fails.
pub async fn handle_interactive(cli: Cli) -> Result<()> {
    // TUI mode logs to file
    let debug_log = match cli.log_file {
        Some(path) => path,
        None => Config::config_dir()?.join("debug.log"),
    };
    init_file_logging(&debug_log)?;

    let (mut config, config_path) = load_config(cli.config)?;
    if let Some(base_url) = cli.base_url {
        tracing::info!("Overriding API base URL with {base_url}");
        config.api.base_url = base_url;
    }

    let source = HttpSource::new(&config.api)?;
    let gateway = Gateway::new(Arc::new(source));

    run_tui_interactive(gateway, config, config_path).await
}

/// Routes tracing output to `path`, truncating any previous session log
///
/// # Errors
/// Returns an error if the log file cannot be created.
fn init_file_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(
            fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true),
        )
        .init();

    Ok(())
}

/// Loads the configuration and returns it with the path theme changes are
/// saved to.
///
/// An explicit `--config` file must load. The default file falls back to
/// built-in defaults when it is unreadable.
///
/// # Errors
/// Returns an error if an explicitly requested config file is invalid.
fn load_config(explicit: Option<PathBuf>) -> Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = Config::load_or_create_at(&path)?;
        return Ok((config, Some(path)));
    }

    // Load or create configuration from ~/.postboard/config.toml
    Ok(load_default_config(Config::config_path().ok()))
}

/// Loads the default config file, falling back to defaults with a warning.
///
/// A file that failed to load is not returned as the save path, so a theme
/// change never overwrites it.
fn load_default_config(path: Option<PathBuf>) -> (Config, Option<PathBuf>) {
    let Some(path) = path else {
        tracing::warn!("Could not determine home directory, using default configuration");
        return (Config::default(), None);
    };

    match Config::load_or_create_at(&path) {
        Ok(config) => (config, Some(path)),
        Err(error) => {
            tracing::warn!("Failed to load config from {}: {error}", path.display());
            tracing::warn!("Using default configuration");
            (Config::default(), None)
        }
    }
}
