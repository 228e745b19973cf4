//! The `DiagramOutput` trait and the export header

use std::io;

use chrono::NaiveDateTime;

use super::utils::{FileSize, Notice};

/// Sink for an architecture diagram, fed top to bottom by `ArchitectureRenderer`.
pub trait DiagramOutput {
    fn header(&mut self, header: &Header) -> io::Result<()>;

    /// The unconnected first line of the diagram.
    fn root(&mut self, icon: &str, name: &str) -> io::Result<()>;

    fn directory(
        &mut self,
        prefix: &str,
        is_last: bool,
        icon: &str,
        name: &str,
        empty: bool,
    ) -> io::Result<()>;

    fn file(
        &mut self,
        prefix: &str,
        is_last: bool,
        icon: &str,
        name: &str,
        size: Option<FileSize>,
    ) -> io::Result<()>;

    /// An inline marker line, drawn at `prefix` with no connector.
    fn notice(&mut self, prefix: &str, notice: &Notice) -> io::Result<()>;

    /// Called once after the last line, with the emitted non-root counts.
    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()>;
}

/// Description block printed above the diagram.
#[derive(Debug, Clone)]
pub struct Header {
    pub project_type: String,
    pub root: String,
    pub max_depth: Option<usize>,
    pub policy_name: String,
    pub policy_description: String,
    pub compact: bool,
    pub generated_at: NaiveDateTime,
}

pub const HEADER_TITLE: &str = "=== PROJECT ARCHITECTURE ===";

impl Header {
    pub fn lines(&self) -> Vec<String> {
        let depth = match self.max_depth {
            Some(depth) => depth.to_string(),
            None => "all levels".to_string(),
        };
        let mode = if self.compact {
            "compact (empty folders hidden)"
        } else {
            "full"
        };
        vec![
            HEADER_TITLE.to_string(),
            format!("Project type: {}", self.project_type),
            format!("Root: {}", self.root),
            format!("Depth: {}", depth),
            format!("Policy: {} - {}", self.policy_name, self.policy_description),
            format!("Display mode: {}", mode),
            format!("Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S")),
        ]
    }
}
