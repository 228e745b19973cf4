//! Directory tree materialization and filtering
//!
//! - `TreeWalker`: builds the filtered `Node` tree in memory for JSON output
//! - `PolicyFilter`: file and directory rules shared by every traversal
//! - `has_matching_content`: the compact-mode emptiness probe
//! - `list_dir`: the single directory reader all traversals go through

mod config;
mod filter;
mod node;
mod probe;
mod traversal;
mod utils;
mod walker;

pub use config::{
    DEFAULT_TREE_DEPTH, ExportOptions, RenderOptions, WalkerConfig, depth_limit,
};
pub use filter::PolicyFilter;
pub use node::Node;
pub use probe::has_matching_content;
pub use traversal::{ListedEntry, Listing, list_dir};
pub use utils::{compare_names, display_name, extension_of, format_size, relative_path};
pub use walker::TreeWalker;
