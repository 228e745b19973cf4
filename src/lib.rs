//! Canopy - policy-filtered directory trees, architecture diagrams and file exports

pub mod error;
pub mod explorer;
pub mod export;
pub mod logging;
pub mod output;
pub mod policy;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use explorer::Explorer;
pub use export::{Concatenation, concatenate_selected};
pub use output::{ArchitectureRenderer, ConsoleOutput, DiagramOutput, Layout, TextOutput, print_json};
pub use policy::{Policy, PolicyFamily, PolicyRegistry};
pub use tree::{ExportOptions, Node, PolicyFilter, RenderOptions, TreeWalker, WalkerConfig};
