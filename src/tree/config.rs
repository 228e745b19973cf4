//! Configuration types for traversals

use chrono::NaiveDateTime;

use crate::policy::PolicyFamily;

/// Depth limit used by the tree builder unless configured otherwise.
pub const DEFAULT_TREE_DEPTH: usize = 10;

/// Configuration for the tree builder.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Deepest level whose directories are expanded. `None` = unlimited.
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_TREE_DEPTH),
        }
    }
}

/// Configuration for the architecture renderer.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Deepest level rendered. `None` = all levels.
    pub max_depth: Option<usize>,
    /// Omit branches with no matching content instead of marking them empty.
    pub compact: bool,
    /// Append a marker to directories with nothing to show.
    pub show_empty_indicator: bool,
    pub show_file_size: bool,
    /// Let the compact-mode probe look past `max_depth`.
    pub probe_beyond_depth: bool,
    /// Policy family override; `None` detects it from the project layout.
    pub family: Option<PolicyFamily>,
    /// Header timestamp; `None` uses the current local time.
    pub generated_at: Option<NaiveDateTime>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            compact: true,
            show_empty_indicator: false,
            show_file_size: false,
            probe_beyond_depth: false,
            family: None,
            generated_at: None,
        }
    }
}

/// Configuration for file concatenation.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub show_file_size: bool,
    /// Header timestamp; `None` uses the current local time.
    pub generated_at: Option<NaiveDateTime>,
}

/// Normalize a requested depth: zero means "no limit".
pub fn depth_limit(requested: Option<usize>) -> Option<usize> {
    requested.filter(|&depth| depth > 0)
}
