//! Diagram formatting and display
//!
//! # Module Structure
//!
//! - `architecture` - Walks a directory and drives a `DiagramOutput`
//! - `diagram` - The `DiagramOutput` trait and the export header
//! - `streaming` - Colored console output
//! - `text` - Plain-text output for exports
//! - `icons` - Folder and file icons per project layout
//! - `utils` - Connectors, prefixes and line formatting
//! - `json` - JSON output

mod architecture;
mod diagram;
mod icons;
mod json;
mod streaming;
mod text;
mod utils;

pub use architecture::{ArchitectureRenderer, RenderSummary};
pub use diagram::{DiagramOutput, HEADER_TITLE, Header};
pub use icons::Layout;
pub use json::{print_json, to_json};
pub use streaming::ConsoleOutput;
pub use text::TextOutput;
pub use utils::{FileSize, Notice, child_prefix, connector};
