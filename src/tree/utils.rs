//! Shared utility functions for tree walking

use std::cmp::Ordering;
use std::path::{Component, Path};

use glob::{MatchOptions, Pattern};

/// Match a glob pattern against a name, ignoring case.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };
    Pattern::new(pattern)
        .map(|p| p.matches_with(name, options))
        .unwrap_or(false)
}

/// Whether a pattern uses glob metacharacters.
pub fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Format a size in bytes with 1024-based units and at most two decimals.
///
/// Trailing zeros are trimmed: `0 B`, `1.5 KB`, `1 MB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rendered = format!("{:.2}", value);
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", rendered, UNITS[unit])
}

/// Lowercase extension of a file name, including the leading dot.
///
/// Taken from the last `.`, so `.gitignore` has extension `.gitignore`.
/// A trailing dot or no dot yields an empty string.
pub fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => name[idx..].to_lowercase(),
        _ => String::new(),
    }
}

/// Display name of a path: the final segment, or the whole path when the
/// path has no final segment (filesystem roots).
pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) if !name.is_empty() => name.to_string_lossy().into_owned(),
        _ => path.to_string_lossy().into_owned(),
    }
}

/// Path of `path` below `root`, joined with forward slashes.
///
/// Paths outside `root` are returned whole, separator-normalized.
pub fn relative_path(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().replace('\\', "/"),
    }
}

/// Case-insensitive name ordering with a raw-name tie break.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
