//! Recursive subtree deletion

use std::fs;
use std::ops::AddAssign;
use std::path::Path;

use crate::error::Result;

/// Counts of entries removed by a recursive deletion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalTally {
    /// Directories removed, including the root of the deleted subtree
    pub folders: usize,

    /// Regular files removed
    pub files: usize,
}

impl AddAssign for RemovalTally {
    fn add_assign(&mut self, other: Self) {
        self.folders += other.folders;
        self.files += other.files;
    }
}

/// Delete `path` and everything beneath it.
///
/// A directory is emptied bottom-up and then removed itself; a plain file
/// is deleted directly, yielding a tally of one file. Deletion is
/// unconditional and irreversible; callers decide beforehand whether
/// removal is appropriate.
pub fn remove_tree(path: &Path) -> Result<RemovalTally> {
    let mut tally = RemovalTally::default();
    if path.is_dir() {
        for entry in fs::read_dir(path)? {
            let child = entry?.path();
            if child.is_dir() {
                tally += remove_tree(&child)?;
            } else {
                fs::remove_file(&child)?;
                tally.files += 1;
            }
        }
        fs::remove_dir(path)?;
        tally.folders += 1;
    } else {
        fs::remove_file(path)?;
        tally.files += 1;
    }
    Ok(tally)
}
