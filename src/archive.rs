//! Daily archive bundles
//!
//! Bundles every file under the log root into `backup-<YYYYMMDD>.zip`,
//! rebuilding the bundle from scratch on every run.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use chrono::Local;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};
use crate::paths;
use crate::tree;

/// Archive every file under `log_dir` into a fresh daily bundle in `backup_dir`.
///
/// An existing same-day bundle is deleted first; today's backup is always
/// rebuilt, never appended. Entry names are the file paths relative to
/// `log_dir`, with separators normalized to forward slashes. Returns `true`
/// once the bundle is finalized.
pub fn back_up(log_dir: &Path, backup_dir: &Path) -> Result<bool> {
    paths::ensure_dir(backup_dir)?;

    let archive_path = backup_dir.join(paths::archive_file_name(Local::now()));
    if archive_path.exists() {
        fs::remove_file(&archive_path)?;
    }

    let file = File::create(&archive_path).map_err(|source| Error::ArchiveOpen {
        path: archive_path.clone(),
        source,
    })?;
    let mut bundle = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let entries = tree::list_files(log_dir);
    let count = entries.len();
    for entry in &entries {
        add_entry(&mut bundle, entry, &entry_name(entry, log_dir), options)?;
    }
    bundle.finish()?;

    tracing::info!("archived {} log files to {}", count, archive_path.display());
    Ok(true)
}

/// Entry name for `path`: relative to `root`, forward-slash separated.
fn entry_name(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}

fn add_entry(
    bundle: &mut ZipWriter<File>,
    source: &Path,
    name: &str,
    options: SimpleFileOptions,
) -> Result<()> {
    bundle
        .start_file(name, options)
        .map_err(|e| Error::ArchiveEntry {
            path: source.to_path_buf(),
            source: e,
        })?;
    let mut reader = File::open(source).map_err(|e| Error::ArchiveEntry {
        path: source.to_path_buf(),
        source: e.into(),
    })?;
    io::copy(&mut reader, bundle).map_err(|e| Error::ArchiveEntry {
        path: source.to_path_buf(),
        source: e.into(),
    })?;
    Ok(())
}
