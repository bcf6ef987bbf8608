//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::models::StandingsOrder;
use crate::storage::{InMemoryStore, JsonlStore, MatchStore, StorageConfig, StorageError};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Which [`MatchStore`] implementation to open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    Jsonl,
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSection {
    #[serde(default)]
    pub backend: StorageBackend,
}

/// Standings configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandingsConfig {
    /// Ranking direction; pairings follow the same order
    #[serde(default)]
    pub order: StandingsOrder,
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub json_logs: bool,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub standings: StandingsConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            json_logs: false,
            storage: StorageSection::default(),
            standings: StandingsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Log level must not be empty".to_string(),
            ));
        }

        if self.storage.backend == StorageBackend::Jsonl && self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "JSONL storage requires a data_dir".to_string(),
            ));
        }

        Ok(())
    }

    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig::new(self.data_dir.clone())
    }

    /// Open the configured store.
    pub fn open_store(&self) -> Result<Box<dyn MatchStore>, StorageError> {
        match self.storage.backend {
            StorageBackend::Memory => Ok(Box::new(InMemoryStore::new())),
            StorageBackend::Jsonl => Ok(Box::new(JsonlStore::open(self.storage_config())?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::{count_players, register_player};
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
        assert_eq!(config.storage.backend, StorageBackend::Jsonl);
        assert_eq!(config.standings.order, StandingsOrder::Ascending);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_log_level() {
        let mut config = AppConfig::default();
        config.log_level = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_jsonl_needs_data_dir() {
        let mut config = AppConfig::default();
        config.data_dir = PathBuf::new();
        assert!(config.validate().is_err());

        config.storage.backend = StorageBackend::Memory;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.data_dir, parsed.data_dir);
        assert_eq!(config.standings.order, parsed.standings.order);
    }

    #[test]
    fn test_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
data_dir = "/tmp/swiss"
log_level = "debug"

[storage]
backend = "memory"

[standings]
order = "descending"
"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/swiss"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.standings.order, StandingsOrder::Descending);
    }

    #[test]
    fn test_config_from_file_bad_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[standings]\norder = \"sideways\"\n").unwrap();

        assert!(matches!(
            AppConfig::from_file(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_open_store() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig {
            data_dir: temp_dir.path().to_path_buf(),
            ..AppConfig::default()
        };

        let mut store = config.open_store().unwrap();
        register_player(&mut *store, "Alice").unwrap();
        assert_eq!(count_players(&*store).unwrap(), 1);

        let reopened = config.open_store().unwrap();
        assert_eq!(count_players(&*reopened).unwrap(), 1);
    }
}
