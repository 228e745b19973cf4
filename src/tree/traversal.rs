//! Directory listing shared by the tree builder, the prober and the renderer.
//!
//! Every traversal reads directories through `list_dir`, so all of them agree
//! on which entries exist, how they are classified and in which order they
//! are visited.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::utils::{compare_names, display_name};

/// One classified directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
}

impl ListedEntry {
    fn new(path: PathBuf) -> Self {
        Self {
            name: display_name(&path),
            path,
        }
    }
}

/// Contents of one directory, split by kind and sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub dirs: Vec<ListedEntry>,
    pub files: Vec<ListedEntry>,
}

/// Read a directory, classifying entries without following symlinks.
///
/// Symlinks and special files (sockets, FIFOs, devices) are skipped. Entries
/// that vanish or fail to stat while listing are skipped as well; only a
/// failure to open the directory itself is reported.
pub fn list_dir(path: &Path) -> Result<Listing> {
    let entries = fs::read_dir(path).map_err(|e| Error::from_io(path, e))?;

    let mut listing = Listing::default();
    for entry in entries.filter_map(|e| e.ok()) {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            listing.dirs.push(ListedEntry::new(entry.path()));
        } else if file_type.is_file() {
            listing.files.push(ListedEntry::new(entry.path()));
        }
    }

    listing.dirs.sort_by(|a, b| compare_names(&a.name, &b.name));
    listing.files.sort_by(|a, b| compare_names(&a.name, &b.name));
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(entries: &[ListedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_list_dir_splits_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        fs::create_dir(dir.path().join("Alpha")).unwrap();
        fs::write(dir.path().join("zeta.txt"), "z").unwrap();
        fs::write(dir.path().join("Main.cs"), "m").unwrap();
        fs::write(dir.path().join("app.json"), "{}").unwrap();

        let listing = list_dir(dir.path()).unwrap();
        assert_eq!(names(&listing.dirs), vec!["Alpha", "beta"]);
        assert_eq!(names(&listing.files), vec!["app.json", "Main.cs", "zeta.txt"]);
    }

    #[test]
    fn test_list_dir_missing_directory_is_read_error() {
        let err = list_dir(Path::new("/nonexistent/canopy/dir")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn test_list_dir_skips_symlinks() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("file.txt"), "x").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link_dir")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("file.txt"), dir.path().join("link.txt"))
            .unwrap();

        let listing = list_dir(dir.path()).unwrap();
        assert_eq!(names(&listing.dirs), vec!["real"]);
        assert_eq!(names(&listing.files), vec!["file.txt"]);
    }
}
