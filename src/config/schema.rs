//! Configuration schema for tzmemo
//!
//! Configuration is stored at `~/.config/tzmemo/config.toml`

use crate::resolver::DEFAULT_INITIAL_CAPACITY;
use crate::tzdb::DatabaseSource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Resolver cache settings
    pub cache: CacheConfig,

    /// Time zone database settings
    pub tzdb: TzdbConfig,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// General application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: LogFormat,
}

/// Resolver cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of entries the store reserves room for when created
    pub initial_capacity: usize,

    /// Create the store at startup instead of on the first lookup
    pub eager_init: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            eager_init: false,
        }
    }
}

/// Time zone database configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TzdbConfig {
    /// Database source: "system", "bundled" or "directory"
    pub source: DatabaseSource,

    /// Zoneinfo directory, used when source is "directory"
    pub directory: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[general]"));
        assert!(toml.contains("[cache]"));
        assert!(toml.contains("[tzdb]"));
        assert!(toml.contains("source = \"system\""));
    }

    #[test]
    fn config_deserializes_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.cache.initial_capacity, DEFAULT_INITIAL_CAPACITY);
        assert_eq!(config.tzdb.source, DatabaseSource::System);
        assert_eq!(config.general.log_format, LogFormat::Text);
    }

    #[test]
    fn config_deserializes_partial() {
        let toml = r#"
            [tzdb]
            source = "directory"
            directory = "/usr/share/zoneinfo"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.tzdb.source, DatabaseSource::Directory);
        assert_eq!(
            config.tzdb.directory,
            Some(PathBuf::from("/usr/share/zoneinfo"))
        );
        assert!(!config.cache.eager_init); // default preserved
    }

    #[test]
    fn config_rejects_unknown_source() {
        let result: Result<Config, _> = toml::from_str("[tzdb]\nsource = \"cloud\"\n");
        assert!(result.is_err());
    }
}
