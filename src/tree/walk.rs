//! Recursive file enumeration

use std::fs;
use std::path::{Path, PathBuf};

/// Collect every regular file beneath `root`, sorted by full path string.
///
/// A path that is not a directory yields an empty listing, as does a
/// directory that cannot be read. Listing failures are treated as "no
/// entries", never as errors.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut files = collect(root);
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files
}

fn collect(dir: &Path) -> Vec<PathBuf> {
    let mut result = Vec::new();
    if !dir.is_dir() {
        return result;
    }
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                result.extend(collect(&path));
            } else {
                result.push(path);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        File::create(path).unwrap().write_all(b"x").unwrap();
    }

    #[test]
    fn test_nonexistent_root_yields_empty() {
        let files = list_files(Path::new("/nonexistent/path/for/testing"));
        assert!(files.is_empty());
    }

    #[test]
    fn test_empty_directory_yields_empty() {
        let temp_dir = TempDir::new().unwrap();
        let files = list_files(temp_dir.path());
        assert!(files.is_empty());
    }

    #[test]
    fn test_plain_file_root_yields_empty() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.log");
        touch(&file);

        let files = list_files(&file);
        assert!(files.is_empty());
    }

    #[test]
    fn test_complete_sorted_enumeration() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("a")).unwrap();
        fs::create_dir(temp_dir.path().join("b")).unwrap();
        touch(&temp_dir.path().join("a").join("2.log"));
        touch(&temp_dir.path().join("a").join("1.log"));
        touch(&temp_dir.path().join("b").join("0.log"));

        let files = list_files(temp_dir.path());
        assert_eq!(files.len(), 3);
        assert_eq!(files[0], temp_dir.path().join("a").join("1.log"));
        assert_eq!(files[1], temp_dir.path().join("a").join("2.log"));
        assert_eq!(files[2], temp_dir.path().join("b").join("0.log"));
    }

    #[test]
    fn test_deeply_nested_files_are_flattened() {
        let temp_dir = TempDir::new().unwrap();
        let deep = temp_dir.path().join("x").join("y").join("z");
        fs::create_dir_all(&deep).unwrap();
        touch(&deep.join("deep.log"));
        touch(&temp_dir.path().join("top.log"));

        let files = list_files(temp_dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.contains(&deep.join("deep.log")));
        assert!(files.contains(&temp_dir.path().join("top.log")));
    }
}
