//! Typed errors for log lifecycle operations

use std::path::PathBuf;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by log lifecycle operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration is missing one of its required base directories
    #[error("log configuration incomplete: both base directories must be set")]
    Config,

    /// A configuration file could not be parsed
    #[error("config file {path:?} is not valid TOML")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A configuration value could not be encoded for saving
    #[error("failed to encode config")]
    ConfigEncode(#[from] toml::ser::Error),

    /// A required directory could not be created and does not exist
    #[error("directory {path:?} was not created")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The archive file could not be opened for writing
    #[error("cannot open archive {path:?}")]
    ArchiveOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be added to the archive
    #[error("failed to add {path:?} to archive")]
    ArchiveEntry {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The archive could not be finalized
    #[error("archive write failed")]
    Archive(#[from] zip::result::ZipError),

    /// Other filesystem failures (removal, iteration, file IO)
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
