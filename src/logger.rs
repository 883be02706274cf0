//! JSON-lines channel loggers
//!
//! A [`ChannelLogger`] is bound to one named channel and one per-hour log
//! file. Records are written as one JSON object per line, each carrying a
//! timestamp, the channel name, the severity level, and the message.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::paths;

/// Severity of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Display name for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// A single structured log record
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// Timestamp when the record was written
    pub timestamp: DateTime<Utc>,
    /// Channel that produced the record
    pub channel: String,
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
}

/// Logger handle bound to one channel and one log file
///
/// The file lives at `<log_dir>/<YYYYMMDD>/<HH>/<channel>/` and is opened
/// in append mode, so every handle opened within the same hour shares one
/// physical file; a new hour or day yields a new file.
pub struct ChannelLogger {
    channel: String,
    min_level: LogLevel,
    file: Mutex<File>,
    path: PathBuf,
}

impl ChannelLogger {
    /// Open a logger for `channel` beneath `log_dir` at the given instant.
    pub(crate) fn open(
        log_dir: &Path,
        channel: &str,
        min_level: LogLevel,
        at: DateTime<Local>,
    ) -> Result<Self> {
        let dir = paths::channel_dir(log_dir, channel, at);
        paths::ensure_dir(&dir)?;

        let path = dir.join(paths::channel_file_name(channel, at));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing::debug!("opened channel log {}", path.display());

        Ok(Self {
            channel: channel.to_string(),
            min_level,
            file: Mutex::new(file),
            path,
        })
    }

    /// Channel name this logger is bound to
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Full path of the file this logger writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a message at `level`.
    ///
    /// Records below the configured minimum are dropped. Write failures
    /// are swallowed rather than surfaced.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if level < self.min_level {
            return;
        }
        let record = LogRecord {
            timestamp: Utc::now(),
            channel: self.channel.clone(),
            level,
            message: message.into(),
        };
        if let Ok(line) = serde_json::to_string(&record) {
            if let Ok(mut file) = self.file.lock() {
                let _ = writeln!(file, "{}", line);
                let _ = file.flush();
            }
        }
    }

    /// Record a trace-level message
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    /// Record a debug-level message
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    /// Record an info-level message
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Record a warning
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    /// Record an error
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }
}
