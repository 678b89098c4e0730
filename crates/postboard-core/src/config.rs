//! Configuration file handling (`~/.postboard/config.toml`).

use crate::error::{Error, Result};
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use toml::{from_str, to_string_pretty};

/// Base URL of the public read-only API serving posts and users.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_POSTS_PATH: &str = "/posts";
const DEFAULT_USERS_PATH: &str = "/users";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Complete client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote API settings
    pub api: ApiConfig,
    /// Terminal UI settings
    pub ui: UiConfig,
}

/// Remote API endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and host of the API, without trailing slash
    pub base_url: String,
    /// Path of the posts collection
    pub posts_path: String,
    /// Path of the users collection
    pub users_path: String,
    /// Per-request timeout in seconds; 0 waits forever
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            posts_path: DEFAULT_POSTS_PATH.to_owned(),
            users_path: DEFAULT_USERS_PATH.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Full URL of the posts collection
    pub fn posts_url(&self) -> String {
        join_url(&self.base_url, &self.posts_path)
    }

    /// Full URL of the users collection
    pub fn users_url(&self) -> String {
        join_url(&self.base_url, &self.users_path)
    }

    /// Request timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Colour theme
    pub theme: Theme,
}

/// UI theme, stored by name in the config file
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    /// Nord color palette
    #[serde(alias = "nord")]
    Nord,
    /// Gruvbox color palette
    #[serde(alias = "gruvbox")]
    Gruvbox,
    /// Tokyo Night color palette
    #[default]
    #[serde(alias = "tokyonight", alias = "tokyo-night")]
    TokyoNight,
    /// Monochrome color palette
    #[serde(alias = "monochrome")]
    Monochrome,
}

impl Theme {
    /// Gets the next theme in sequence
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Nord => Self::Gruvbox,
            Self::Gruvbox => Self::TokyoNight,
            Self::TokyoNight => Self::Monochrome,
            Self::Monochrome => Self::Nord,
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

impl Config {
    /// Get the default config directory path (`~/.postboard`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_dir() -> Result<PathBuf> {
        let home = home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_owned()))?;
        Ok(home.join(".postboard"))
    }

    /// Get the default config file path (`~/.postboard/config.toml`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from `path`, creating it with defaults if absent
    ///
    /// # Errors
    /// Returns an error if the config cannot be read, parsed or written
    pub fn load_or_create_at(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            let config = Self::default();
            config.save_to_file(path)?;
            tracing::info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Load config from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(from_str(&contents)?)
    }

    /// Save config to a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = to_string_pretty(self)?;
        let header = "# Postboard Configuration File\n\
                      # This file is automatically generated on first run\n\
                      # Edit this file to point the client at another API or change the theme\n\n";

        fs::write(path, format!("{header}{contents}"))?;
        Ok(())
    }
}
