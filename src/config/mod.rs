//! Configuration management for tzmemo

mod schema;

pub use schema::*;

use crate::error::{TzMemoError, TzMemoResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tzmemo")
            .join("config.toml")
    }

    /// Load configuration, falling back to defaults if the file is missing
    pub fn load(&self) -> TzMemoResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(&self, path: &Path) -> TzMemoResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| TzMemoError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| TzMemoError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to file
    pub fn save(&self, config: &Config) -> TzMemoResult<()> {
        self.ensure_config_dir()?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).map_err(|e| {
            TzMemoError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    fn ensure_config_dir(&self) -> TzMemoResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| TzMemoError::ConfigDirCreate {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
