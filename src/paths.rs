//! Time-partitioned path construction
//!
//! Log files land at `<log_dir>/<YYYYMMDD>/<HH>/<channel>/` with filenames
//! `<YYYYMMDD>-<HH>_<channel>.log`; daily bundles are `backup-<YYYYMMDD>.zip`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{Error, Result};

/// Directory holding a channel's log file at the given instant
pub fn channel_dir(log_dir: &Path, channel: &str, at: DateTime<Local>) -> PathBuf {
    log_dir
        .join(at.format("%Y%m%d").to_string())
        .join(at.format("%H").to_string())
        .join(channel)
}

/// Filename of a channel's log file at the given instant
pub fn channel_file_name(channel: &str, at: DateTime<Local>) -> String {
    format!("{}_{}.log", at.format("%Y%m%d-%H"), channel)
}

/// Filename of the daily archive bundle
pub fn archive_file_name(at: DateTime<Local>) -> String {
    format!("backup-{}.zip", at.format("%Y%m%d"))
}

/// Create `path` and any missing ancestors.
///
/// A creation failure is tolerated when the directory already exists;
/// otherwise it surfaces as [`Error::DirectoryCreation`] carrying the
/// attempted path.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if let Err(source) = fs::create_dir_all(path) {
        if !path.is_dir() {
            return Err(Error::DirectoryCreation {
                path: path.to_path_buf(),
                source,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_instant() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 9, 14, 5, 30).unwrap()
    }

    #[test]
    fn test_channel_dir_partitions_by_date_hour_and_name() {
        let dir = channel_dir(Path::new("/var/logs"), "payments", fixed_instant());
        assert_eq!(dir, PathBuf::from("/var/logs/20250309/14/payments"));
    }

    #[test]
    fn test_channel_file_name() {
        let name = channel_file_name("payments", fixed_instant());
        assert_eq!(name, "20250309-14_payments.log");
    }

    #[test]
    fn test_archive_file_name() {
        let name = archive_file_name(fixed_instant());
        assert_eq!(name, "backup-20250309.zip");
    }

    #[test]
    fn test_ensure_dir_creates_missing_ancestors() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_accepts_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        ensure_dir(temp_dir.path()).unwrap();
        assert!(temp_dir.path().is_dir());
    }

    #[test]
    fn test_ensure_dir_reports_attempted_path() {
        let temp_dir = TempDir::new().unwrap();
        // A file where an ancestor directory is needed makes creation fail.
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();

        let target = blocker.join("child");
        let err = ensure_dir(&target).unwrap_err();
        match err {
            Error::DirectoryCreation { path, .. } => assert_eq!(path, target),
            other => panic!("unexpected error: {other}"),
        }
    }
}
