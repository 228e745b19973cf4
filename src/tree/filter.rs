//! Policy-driven inclusion rules for files and directories

use std::path::Path;

use crate::policy::Policy;

use super::utils::{extension_of, glob_match, is_glob, relative_path};

/// Stateless evaluator applying one policy to filesystem entries.
#[derive(Debug, Clone, Copy)]
pub struct PolicyFilter<'a> {
    policy: &'a Policy,
}

impl<'a> PolicyFilter<'a> {
    pub fn new(policy: &'a Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &'a Policy {
        self.policy
    }

    /// Check if a file should be included.
    pub fn should_include_file(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.includes_file_name(&name)
    }

    /// File inclusion on a bare file name. Exclusion patterns always win.
    pub fn includes_file_name(&self, name: &str) -> bool {
        let policy = self.policy;
        if policy.include_all {
            return true;
        }

        let lower = name.to_lowercase();
        let included = policy.include_extensions.is_empty() || {
            let extension = extension_of(name);
            (!extension.is_empty()
                && policy
                    .include_extensions
                    .iter()
                    .any(|inc| inc.eq_ignore_ascii_case(&extension)))
                || policy.include_extensions.iter().any(|inc| {
                    let inc = inc.to_lowercase();
                    lower == inc || lower.starts_with(&inc)
                })
        };

        included
            && !policy
                .exclude_patterns
                .iter()
                .any(|pattern| lower.contains(&pattern.to_lowercase()))
    }

    /// Check if a directory should be excluded from a traversal rooted at `root`.
    pub fn should_exclude_directory(&self, path: &Path, root: &Path) -> bool {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let full = path.to_string_lossy().replace('\\', "/");
        let relative = relative_path(path, root);
        self.excludes_directory(&name, &full, &relative)
    }

    /// Directory exclusion on a bare name, the full path and the
    /// root-relative path, both forward-slash separated.
    ///
    /// Folder patterns match the name exactly or anywhere in the full path.
    /// Allow-list prefixes compare as plain strings in both directions, so
    /// ancestors of an allowed path stay reachable.
    pub fn excludes_directory(&self, name: &str, full: &str, relative: &str) -> bool {
        let name_lower = name.to_lowercase();
        let full_lower = full.to_lowercase();

        let excluded = self.policy.exclude_folder_patterns.iter().any(|pattern| {
            let pattern_lower = pattern.to_lowercase();
            name_lower == pattern_lower
                || full_lower.contains(&pattern_lower)
                || (is_glob(pattern) && glob_match(pattern, name))
        });
        if excluded {
            return true;
        }

        let prefixes = &self.policy.include_folder_prefixes;
        if prefixes.is_empty() {
            return false;
        }
        let relative_lower = relative.to_lowercase();
        !prefixes.iter().any(|prefix| {
            let prefix = prefix.replace('\\', "/").to_lowercase();
            relative_lower.starts_with(&prefix) || prefix.starts_with(&relative_lower)
        })
    }
}
