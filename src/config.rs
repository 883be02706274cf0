//! Log lifecycle configuration
//!
//! An explicit value holding the two base directories every lifecycle
//! operation works under. Hosts construct it directly, load it from a TOML
//! file, or place it under the home directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Base directories for log and backup artifacts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Root under which time-partitioned log files are placed
    pub log_dir: PathBuf,

    /// Root under which daily archive bundles are placed
    pub backup_dir: PathBuf,
}

impl LogConfig {
    /// Create a config from the two base directories
    pub fn new(log_dir: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            backup_dir: backup_dir.into(),
        }
    }

    /// Place both roots beneath `base` (`logs/` and `backups/`)
    pub fn under(base: &Path) -> Self {
        Self {
            log_dir: base.join("logs"),
            backup_dir: base.join("backups"),
        }
    }

    /// Place both roots beneath `~/.logkeep`, if a home directory exists
    pub fn in_home_dir() -> Option<Self> {
        dirs::home_dir().map(|home| Self::under(&home.join(".logkeep")))
    }

    /// Check that both base directories are set
    pub fn is_complete(&self) -> bool {
        !self.log_dir.as_os_str().is_empty() && !self.backup_dir.as_os_str().is_empty()
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save this config to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_under_joins_both_roots() {
        let config = LogConfig::under(Path::new("/var/app"));
        assert_eq!(config.log_dir, PathBuf::from("/var/app/logs"));
        assert_eq!(config.backup_dir, PathBuf::from("/var/app/backups"));
    }

    #[test]
    fn test_is_complete() {
        assert!(LogConfig::new("/tmp/logs", "/tmp/backups").is_complete());
        assert!(!LogConfig::new("", "/tmp/backups").is_complete());
        assert!(!LogConfig::new("/tmp/logs", "").is_complete());
        assert!(!LogConfig::new("", "").is_complete());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("logkeep.toml");

        let config = LogConfig::new("/srv/logs", "/srv/backups");
        config.save(&config_path).unwrap();

        let loaded = LogConfig::load(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        std::fs::write(&config_path, "log_dir = [not toml").unwrap();

        let result = LogConfig::load(&config_path);
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = LogConfig::load(Path::new("/nonexistent/logkeep.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
