//! Boundary API tying the registry, walker, renderer and exporter together

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::export::{Concatenation, concatenate_selected};
use crate::output::{ArchitectureRenderer, DiagramOutput, Layout, RenderSummary, TextOutput};
use crate::policy::{Policy, PolicyFamily, PolicyRegistry};
use crate::tree::{ExportOptions, Node, RenderOptions, TreeWalker, WalkerConfig};

/// Entry point for every operation, bound to one policy registry.
pub struct Explorer<'r> {
    registry: &'r PolicyRegistry,
    walker_config: WalkerConfig,
}

impl<'r> Explorer<'r> {
    pub fn new(registry: &'r PolicyRegistry) -> Self {
        Self {
            registry,
            walker_config: WalkerConfig::default(),
        }
    }

    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Every policy, size family first.
    pub fn list_policies(&self) -> Vec<&'r Policy> {
        self.registry.list_all().collect()
    }

    /// Build the filtered tree of `root` with a size-family policy.
    ///
    /// Unknown or absent ids fall back to the include-everything policy.
    pub fn build_tree(&self, root: &Path, policy_id: Option<u32>) -> Result<Node> {
        ensure_directory(root)?;
        let policy = self.registry.get(PolicyFamily::Size, policy_id);
        TreeWalker::new(self.walker_config.clone(), policy)
            .walk(root)
            .ok_or_else(|| Error::NotFound(root.to_path_buf()))
    }

    /// Render the header and architecture diagram of `root` as text.
    pub fn render_architecture(
        &self,
        root: &Path,
        policy_id: Option<u32>,
        options: &RenderOptions,
    ) -> Result<String> {
        let mut output = TextOutput::new();
        self.render_to(root, policy_id, options, &mut output)?;
        Ok(output.into_string())
    }

    /// Render the architecture diagram of `root` into any output.
    pub fn render_to<O: DiagramOutput>(
        &self,
        root: &Path,
        policy_id: Option<u32>,
        options: &RenderOptions,
        output: &mut O,
    ) -> Result<RenderSummary> {
        ensure_directory(root)?;
        let policy = self.registry.resolve(root, options.family, policy_id);
        let layout = match policy.family {
            PolicyFamily::Project => Layout::Structured,
            PolicyFamily::Size => Layout::General,
        };
        tracing::debug!(
            root = %root.display(),
            family = policy.family.as_str(),
            policy = %policy.name,
            "rendering architecture"
        );
        ArchitectureRenderer::new(policy, options.clone(), layout).render(root, output)
    }

    /// Concatenate the selected files, labelled relative to `root`.
    pub fn concatenate_selected(
        &self,
        paths: &[PathBuf],
        root: &Path,
        options: &ExportOptions,
    ) -> Concatenation {
        concatenate_selected(paths, root, options)
    }
}

fn ensure_directory(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(Error::NotFound(root.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_tree_rejects_missing_root() {
        let registry = PolicyRegistry::builtin();
        let explorer = Explorer::new(&registry);
        let err = explorer
            .build_tree(Path::new("/nonexistent/canopy"), None)
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_build_tree_rejects_file_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.cs");
        fs::write(&file, "x").unwrap();

        let registry = PolicyRegistry::builtin();
        let explorer = Explorer::new(&registry);
        assert!(matches!(explorer.build_tree(&file, None), Err(Error::NotFound(_))));
        assert!(matches!(
            explorer.render_architecture(&file, None, &RenderOptions::default()),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_build_tree_uses_size_family_even_for_structured_projects() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Assets")).unwrap();
        fs::create_dir_all(dir.path().join("ProjectSettings")).unwrap();
        fs::write(dir.path().join("Assets/Player.cs"), "x").unwrap();
        fs::write(dir.path().join("Assets/Player.png"), "x").unwrap();

        let registry = PolicyRegistry::builtin();
        let explorer = Explorer::new(&registry);
        let tree = explorer.build_tree(dir.path(), Some(5)).unwrap();
        let assets = tree.children.iter().find(|c| c.name == "Assets").unwrap();
        let names: Vec<_> = assets.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Player.cs"]);
    }

    #[test]
    fn test_render_detects_structured_project() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Assets/Scripts")).unwrap();
        fs::create_dir_all(dir.path().join("ProjectSettings")).unwrap();
        fs::write(dir.path().join("Assets/Scripts/Player.cs"), "x").unwrap();

        let registry = PolicyRegistry::builtin();
        let explorer = Explorer::new(&registry);
        let text = explorer
            .render_architecture(dir.path(), Some(3), &RenderOptions::default())
            .unwrap();
        assert!(text.contains("Project type: Structured (Unity) project\n"));
        assert!(text.contains("📝 Scripts"));
        assert!(!text.contains("ProjectSettings"));
    }

    #[test]
    fn test_family_override() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Assets")).unwrap();
        fs::write(dir.path().join("Assets/Player.cs"), "x").unwrap();

        let registry = PolicyRegistry::builtin();
        let explorer = Explorer::new(&registry);
        let options = RenderOptions {
            family: Some(PolicyFamily::Size),
            ..RenderOptions::default()
        };
        let text = explorer.render_architecture(dir.path(), None, &options).unwrap();
        assert!(text.contains("Project type: General project\n"));
    }

    #[test]
    fn test_list_policies_covers_both_families() {
        let registry = PolicyRegistry::builtin();
        let policies = Explorer::new(&registry).list_policies();
        assert!(policies.iter().any(|p| p.family == PolicyFamily::Size));
        assert!(policies.iter().any(|p| p.family == PolicyFamily::Project));
    }
}
