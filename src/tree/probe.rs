//! Emptiness probe used for compact pruning

use std::path::Path;

use super::filter::PolicyFilter;
use super::traversal::list_dir;

/// Check whether `path` holds at least one file the policy keeps.
///
/// `current_depth` is the depth of the directory asking about `path`, one of
/// its subdirectories. The probe answers `false` once `current_depth` reaches
/// `max_depth`, so content beyond the depth limit never counts as present.
/// `None` means no limit. Listing failures count as "no content".
pub fn has_matching_content(
    path: &Path,
    filter: &PolicyFilter<'_>,
    root: &Path,
    current_depth: usize,
    max_depth: Option<usize>,
) -> bool {
    if max_depth.is_some_and(|max| current_depth >= max) {
        return false;
    }

    let listing = match list_dir(path) {
        Ok(listing) => listing,
        Err(e) => {
            tracing::trace!(path = %path.display(), error = %e, "probe skipped unreadable directory");
            return false;
        }
    };

    if listing
        .files
        .iter()
        .any(|file| filter.includes_file_name(&file.name))
    {
        return true;
    }

    listing
        .dirs
        .iter()
        .filter(|dir| !filter.should_exclude_directory(&dir.path, root))
        .any(|dir| has_matching_content(&dir.path, filter, root, current_depth + 1, max_depth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Policy, PolicyFamily};
    use std::fs;
    use tempfile::TempDir;

    fn cs_only() -> Policy {
        Policy {
            id: 9,
            family: PolicyFamily::Size,
            name: "cs".into(),
            description: String::new(),
            exclude_folder_patterns: vec!["skip".into()],
            include_folder_prefixes: Vec::new(),
            include_extensions: vec![".cs".into()],
            exclude_patterns: Vec::new(),
            include_all: false,
        }
    }

    #[test]
    fn test_finds_nested_match() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
        fs::write(dir.path().join("a/b/c/deep.cs"), "").unwrap();

        let policy = cs_only();
        let filter = PolicyFilter::new(&policy);
        assert!(has_matching_content(
            &dir.path().join("a"),
            &filter,
            dir.path(),
            0,
            None
        ));
    }

    #[test]
    fn test_non_matching_files_are_not_content() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("bin")).unwrap();
        fs::write(dir.path().join("bin/out.dll"), "").unwrap();

        let policy = cs_only();
        let filter = PolicyFilter::new(&policy);
        assert!(!has_matching_content(
            &dir.path().join("bin"),
            &filter,
            dir.path(),
            0,
            None
        ));
    }

    #[test]
    fn test_excluded_subdirectories_are_not_searched() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/skip")).unwrap();
        fs::write(dir.path().join("a/skip/hidden.cs"), "").unwrap();

        let policy = cs_only();
        let filter = PolicyFilter::new(&policy);
        assert!(!has_matching_content(
            &dir.path().join("a"),
            &filter,
            dir.path(),
            0,
            None
        ));
    }

    #[test]
    fn test_content_beyond_depth_limit_is_absent() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/deep.cs"), "").unwrap();

        let policy = cs_only();
        let filter = PolicyFilter::new(&policy);
        let a = dir.path().join("a");

        // `a` sits at depth 1; its file list is visible, `b`'s is at depth 2.
        assert!(!has_matching_content(&a, &filter, dir.path(), 0, Some(1)));
        assert!(has_matching_content(&a, &filter, dir.path(), 0, Some(2)));
        assert!(!has_matching_content(&a, &filter, dir.path(), 1, Some(1)));
    }

    #[test]
    fn test_missing_directory_has_no_content() {
        let policy = cs_only();
        let filter = PolicyFilter::new(&policy);
        assert!(!has_matching_content(
            Path::new("/nonexistent/canopy"),
            &filter,
            Path::new("/nonexistent"),
            0,
            None
        ));
    }
}
