//! Age-based purge of partitioned log directories

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Datelike, Local};

use crate::error::Result;
use crate::tree::{self, RemovalTally};

/// Age score above which an entry is purged without `force`.
///
/// The score is the plain integer difference of two `YYYYMMDD` date
/// stamps, not a count of elapsed days; across a month boundary the
/// difference jumps (e.g. `20250301 - 20250228 = 73`).
const MAX_AGE_SCORE: i64 = 31;

/// Remove aged entries beneath `path`.
///
/// Each immediate child is scored against today's date stamp and its
/// subtree is removed when the score exceeds [`MAX_AGE_SCORE`] or `force`
/// is set. Tallies of the removed subtrees are summed into the result. A
/// `path` that is not a directory yields a zero tally.
pub fn clean_up(path: &Path, force: bool) -> Result<RemovalTally> {
    let mut tally = RemovalTally::default();
    if !path.is_dir() {
        return Ok(tally);
    }

    let today = date_stamp(Local::now());
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let created = date_stamp(DateTime::<Local>::from(entry_created(&entry)));
        if should_purge(today, created, force) {
            tally += tree::remove_tree(&entry.path())?;
        }
    }

    if tally.folders > 0 || tally.files > 0 {
        tracing::info!(
            "purged {} folders and {} files under {}",
            tally.folders,
            tally.files,
            path.display()
        );
    }
    Ok(tally)
}

fn should_purge(today: i64, created: i64, force: bool) -> bool {
    force || today - created > MAX_AGE_SCORE
}

/// Date-only stamp: `YYYYMMDD` as an integer.
fn date_stamp(at: DateTime<Local>) -> i64 {
    at.year() as i64 * 10_000 + at.month() as i64 * 100 + at.day() as i64
}

/// Creation time of a directory entry.
///
/// Falls back to the modification time where the platform does not record
/// creation, and to the Unix epoch when neither is readable; an unreadable
/// timestamp therefore ages the entry out.
fn entry_created(entry: &fs::DirEntry) -> SystemTime {
    entry
        .metadata()
        .and_then(|m| m.created().or_else(|_| m.modified()))
        .unwrap_or(SystemTime::UNIX_EPOCH)
}
