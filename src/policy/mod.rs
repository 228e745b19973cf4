//! Filtering policies
//!
//! A policy is an immutable rule set deciding which folders and files survive
//! a traversal. Policies come in two families with independent id spaces:
//!
//! - `Size`: generic, extension and name-pattern based
//! - `Project`: folder allow-lists tailored to a structured (Unity-style) layout
//!
//! The `PolicyRegistry` is built once at startup and passed by reference into
//! every traversal.

mod catalog;
mod detect;
mod registry;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use catalog::ALWAYS_EXCLUDE;
pub use detect::is_structured_project;
pub use registry::PolicyRegistry;

/// Policy family, each with its own id space.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PolicyFamily {
    Size,
    Project,
}

impl PolicyFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyFamily::Size => "size",
            PolicyFamily::Project => "project",
        }
    }
}

/// A named filtering rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: u32,
    pub family: PolicyFamily,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Directory name fragments. Each matches as a substring of the full
    /// path, or exactly (or as a glob) against the bare name.
    #[serde(default, alias = "exclude_folder_patterns")]
    pub exclude_folder_patterns: Vec<String>,
    /// Root-relative folder allow-list. Empty means every non-excluded folder.
    #[serde(default, alias = "include_folder_prefixes")]
    pub include_folder_prefixes: Vec<String>,
    /// Extensions (".cs") or bare file name fragments ("Dockerfile").
    #[serde(default, alias = "include_extensions")]
    pub include_extensions: Vec<String>,
    /// File name substrings that force exclusion.
    #[serde(default, alias = "exclude_patterns")]
    pub exclude_patterns: Vec<String>,
    #[serde(default, alias = "include_all")]
    pub include_all: bool,
}

impl Policy {
    /// The include-everything policy of a family.
    pub fn include_everything(family: PolicyFamily, description: &str) -> Self {
        Self {
            id: 1,
            family,
            name: "Full".to_string(),
            description: description.to_string(),
            exclude_folder_patterns: Vec::new(),
            include_folder_prefixes: Vec::new(),
            include_extensions: Vec::new(),
            exclude_patterns: Vec::new(),
            include_all: true,
        }
    }

    /// True when no extension restriction applies.
    pub fn accepts_any_extension(&self) -> bool {
        self.include_all || self.include_extensions.is_empty()
    }
}
