//! Application configuration
//!
//! Read from `<config_dir>/vocab-srs/config.toml`. Every key is optional:
//!
//! ```toml
//! data_dir = "/home/me/.local/share/vocab-srs"
//! user = "me"
//! new_item_limit = 20
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::default_data_dir;

pub const DEFAULT_USER: &str = "default";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Root of the JSON store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// User whose collection is opened when none is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Cap on never-reviewed items per review queue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_item_limit: Option<usize>,
}

impl AppConfig {
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("vocab-srs").join("config.toml"))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Load from `path`; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path()?)
    }

    /// Resolved store root, falling back to the platform data directory
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(|| default_data_dir().ok())
    }

    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or(DEFAULT_USER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.user(), "default");
        assert_eq!(config.new_item_limit, None);
    }

    #[test]
    fn test_load_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "data_dir = \"/srv/vocab\"\nuser = \"frank\"\nnew_item_limit = 15\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.data_dir(), Some(PathBuf::from("/srv/vocab")));
        assert_eq!(config.user(), "frank");
        assert_eq!(config.new_item_limit, Some(15));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "user = [").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse { .. })));

        fs::write(&path, "colour = \"blue\"").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_serializes_only_set_keys() {
        let config = AppConfig {
            user: Some("gina".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(toml::to_string(&config).unwrap(), "user = \"gina\"\n");
    }
}
