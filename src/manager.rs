//! Facade over the log lifecycle operations

use std::path::Path;

use chrono::Local;

use crate::archive;
use crate::cleanup;
use crate::config::LogConfig;
use crate::error::{Error, Result};
use crate::logger::{ChannelLogger, LogLevel};
use crate::tree::RemovalTally;

/// Service object owning a validated configuration
///
/// All lifecycle operations run through a manager, so none of them can be
/// reached before the configuration has been checked. Operations are
/// synchronous and single-caller-at-a-time; running two cleanups or two
/// backups concurrently against the same directories is unsupported.
#[derive(Debug, Clone)]
pub struct LogManager {
    config: LogConfig,
}

impl LogManager {
    /// Build a manager over `config`.
    ///
    /// Fails with [`Error::Config`] when either base directory is unset,
    /// before anything touches the filesystem.
    pub fn new(config: LogConfig) -> Result<Self> {
        if !config.is_complete() {
            return Err(Error::Config);
        }
        Ok(Self { config })
    }

    /// The configuration this manager operates with
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Open a logger for `channel`, recording at `min_level` and above.
    ///
    /// The per-hour directory `<log_dir>/<YYYYMMDD>/<HH>/<channel>` is
    /// created if missing; repeated calls within the same hour append to
    /// the same file.
    pub fn logger(&self, channel: &str, min_level: LogLevel) -> Result<ChannelLogger> {
        ChannelLogger::open(&self.config.log_dir, channel, min_level, Local::now())
    }

    /// Bundle every current log file into today's archive.
    ///
    /// Rebuilds `<backup_dir>/backup-<YYYYMMDD>.zip` from scratch; returns
    /// `true` once the bundle is finalized.
    pub fn back_up_logs(&self) -> Result<bool> {
        archive::back_up(&self.config.log_dir, &self.config.backup_dir)
    }

    /// Purge aged entries beneath `path`.
    ///
    /// With `force`, every entry is removed regardless of age. Returns the
    /// aggregate removal tally.
    pub fn clean_up(&self, path: &Path, force: bool) -> Result<RemovalTally> {
        cleanup::clean_up(path, force)
    }
}
