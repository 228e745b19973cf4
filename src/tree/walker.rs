//! TreeWalker - builds the full node tree in memory

use std::path::Path;
use std::time::Instant;

use crate::policy::{ALWAYS_EXCLUDE, Policy};

use super::config::WalkerConfig;
use super::filter::PolicyFilter;
use super::node::Node;
use super::traversal::list_dir;
use super::utils::{compare_names, display_name, extension_of};

/// Tree walker that materializes a filtered tree of `Node`s.
pub struct TreeWalker<'a> {
    config: WalkerConfig,
    filter: PolicyFilter<'a>,
}

impl<'a> TreeWalker<'a> {
    pub fn new(config: WalkerConfig, policy: &'a Policy) -> Self {
        Self {
            config,
            filter: PolicyFilter::new(policy),
        }
    }

    /// Build the tree rooted at `root`.
    ///
    /// Returns `None` only when `root` is neither a directory nor a regular file.
    pub fn walk(&self, root: &Path) -> Option<Node> {
        let started = Instant::now();
        let tree = self.build(root, 0);
        if let Some(ref node) = tree {
            let (dirs, files) = node.counts();
            tracing::debug!(
                root = %root.display(),
                policy = %self.filter.policy().name,
                dirs,
                files,
                elapsed = %humantime::format_duration(started.elapsed()),
                "built tree"
            );
        }
        tree
    }

    /// Build the node for `path`, found `depth` levels below the walk root.
    ///
    /// A directory in the always-exclude set yields `None`, and its parent
    /// omits it.
    pub fn build(&self, path: &Path, depth: usize) -> Option<Node> {
        let metadata = path.symlink_metadata().ok()?;
        let name = display_name(path);

        if metadata.is_file() {
            let extension = extension_of(&name);
            return Some(Node::file(name, path.to_path_buf(), metadata.len(), extension));
        }
        if !metadata.is_dir() {
            return None;
        }

        if depth > 0 && self.is_excluded_directory(&name) {
            return None;
        }

        let mut children = Vec::new();
        if self.config.max_depth.is_none_or(|max| depth < max) {
            match list_dir(path) {
                Ok(listing) => {
                    children.extend(
                        listing
                            .dirs
                            .iter()
                            .filter_map(|dir| self.build(&dir.path, depth + 1)),
                    );
                    children.extend(
                        listing
                            .files
                            .iter()
                            .filter(|file| self.filter.includes_file_name(&file.name))
                            .filter_map(|file| self.file_node(&file.path, &file.name)),
                    );
                }
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "directory not enumerated");
                }
            }
        }

        children.sort_by(|a, b| {
            b.is_directory
                .cmp(&a.is_directory)
                .then_with(|| compare_names(&a.name, &b.name))
        });

        Some(Node::directory(name, path.to_path_buf(), children))
    }

    /// Bare-name check against the always-exclude set. Policy folder rules
    /// are left to the diagram renderer.
    fn is_excluded_directory(&self, name: &str) -> bool {
        !self.filter.policy().include_all
            && ALWAYS_EXCLUDE
                .iter()
                .any(|excluded| excluded.eq_ignore_ascii_case(name))
    }

    fn file_node(&self, path: &Path, name: &str) -> Option<Node> {
        match path.metadata() {
            Ok(metadata) => Some(Node::file(
                name.to_string(),
                path.to_path_buf(),
                metadata.len(),
                extension_of(name),
            )),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping unreadable file");
                None
            }
        }
    }
}
