//! Materialized tree nodes, serialized for interactive display

use std::path::PathBuf;

use serde::Serialize;

use super::utils::format_size;

/// One file or directory of a built tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
    pub children: Vec<Node>,
    /// File length, or the sum of the immediate children for directories.
    pub size: u64,
    pub formatted_size: String,
    pub extension: String,
    pub selected: bool,
}

impl Node {
    pub fn file(name: String, path: PathBuf, size: u64, extension: String) -> Self {
        Self {
            name,
            path,
            is_directory: false,
            children: Vec::new(),
            size,
            formatted_size: format_size(size),
            extension,
            selected: true,
        }
    }

    /// A directory node; size and selection are derived from `children`.
    pub fn directory(name: String, path: PathBuf, children: Vec<Node>) -> Self {
        let size = children.iter().map(|c| c.size).sum();
        Self {
            name,
            path,
            is_directory: true,
            selected: !children.is_empty(),
            children,
            size,
            formatted_size: format_size(size),
            extension: String::new(),
        }
    }

    /// Paths of every file in the tree, depth-first in display order.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        self.collect_file_paths(&mut paths);
        paths
    }

    fn collect_file_paths(&self, paths: &mut Vec<PathBuf>) {
        if !self.is_directory {
            paths.push(self.path.clone());
            return;
        }
        for child in &self.children {
            child.collect_file_paths(paths);
        }
    }

    /// Count of (directories, files) below this node, excluding itself.
    pub fn counts(&self) -> (usize, usize) {
        self.children.iter().fold((0, 0), |(dirs, files), child| {
            if child.is_directory {
                let (d, f) = child.counts();
                (dirs + 1 + d, files + f)
            } else {
                (dirs, files + 1)
            }
        })
    }
}
