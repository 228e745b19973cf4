//! Architecture diagram renderer
//!
//! Walks the filesystem directly (no `Node` tree) and feeds a `DiagramOutput`
//! line by line. In compact mode, subdirectories are kept only when the
//! emptiness probe finds matching content below them.

use std::path::Path;

use chrono::Local;

use crate::error::Result;
use crate::policy::Policy;
use crate::tree::{
    ListedEntry, PolicyFilter, RenderOptions, display_name, extension_of, has_matching_content,
    list_dir,
};

use super::diagram::{DiagramOutput, Header};
use super::icons::Layout;
use super::utils::{FileSize, Notice, child_prefix};

/// Indent of the notice printed when the root itself has nothing to show.
const ROOT_NOTICE_PREFIX: &str = "   ";

/// Counts of the non-root entries a render emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub dirs: usize,
    pub files: usize,
}

/// Subdirectories and files of one directory that survive the policy.
struct Visible {
    dirs: Vec<ListedEntry>,
    files: Vec<ListedEntry>,
    /// Subdirectories the policy keeps were cut by the depth limit.
    truncated: bool,
}

impl Visible {
    fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }
}

pub struct ArchitectureRenderer<'a> {
    filter: PolicyFilter<'a>,
    options: RenderOptions,
    layout: Layout,
}

impl<'a> ArchitectureRenderer<'a> {
    pub fn new(policy: &'a Policy, options: RenderOptions, layout: Layout) -> Self {
        Self {
            filter: PolicyFilter::new(policy),
            options,
            layout,
        }
    }

    /// Header describing a render of `root` with this renderer's settings.
    pub fn header(&self, root: &Path) -> Header {
        let policy = self.filter.policy();
        Header {
            project_type: self.layout.label().to_string(),
            root: root.display().to_string(),
            max_depth: self.options.max_depth,
            policy_name: policy.name.clone(),
            policy_description: policy.description.clone(),
            compact: self.options.compact,
            generated_at: self
                .options
                .generated_at
                .unwrap_or_else(|| Local::now().naive_local()),
        }
    }

    /// Render the header and the diagram of `root` into `output`.
    ///
    /// Unreadable directories are reported inline; only write errors on
    /// `output` are returned.
    pub fn render<O: DiagramOutput>(&self, root: &Path, output: &mut O) -> Result<RenderSummary> {
        let mut summary = RenderSummary::default();

        output.header(&self.header(root))?;
        output.root(self.layout.folder_icon(""), &display_name(root))?;

        match self.visible(root, root, 0) {
            Ok(visible) => {
                if visible.is_empty() && !(visible.truncated && !self.options.compact) {
                    output.notice(ROOT_NOTICE_PREFIX, &Notice::NoMatches)?;
                } else {
                    self.render_children(&visible, root, "", 0, output, &mut summary)?;
                }
            }
            Err(e) => {
                tracing::debug!(path = %root.display(), error = %e, "root not enumerated");
                output.notice(ROOT_NOTICE_PREFIX, &Notice::from_error(&e))?;
            }
        }

        output.finish(summary.dirs, summary.files)?;
        Ok(summary)
    }

    /// List `dir` (found at `depth`) and keep what the policy and the depth
    /// limit allow.
    fn visible(&self, dir: &Path, root: &Path, depth: usize) -> Result<Visible> {
        let listing = list_dir(dir)?;

        let mut kept = listing
            .dirs
            .into_iter()
            .filter(|sub| !self.filter.should_exclude_directory(&sub.path, root))
            .peekable();

        let at_limit = self.options.max_depth.is_some_and(|max| depth >= max);
        let (dirs, truncated) = if at_limit {
            (Vec::new(), kept.peek().is_some())
        } else {
            let dirs = kept
                .filter(|sub| !self.options.compact || self.probe(&sub.path, root, depth))
                .collect();
            (dirs, false)
        };
        let files = listing
            .files
            .into_iter()
            .filter(|file| self.filter.includes_file_name(&file.name))
            .collect();

        Ok(Visible {
            dirs,
            files,
            truncated,
        })
    }

    fn probe(&self, path: &Path, root: &Path, depth: usize) -> bool {
        let limit = if self.options.probe_beyond_depth {
            None
        } else {
            self.options.max_depth
        };
        has_matching_content(path, &self.filter, root, depth, limit)
    }

    fn render_children<O: DiagramOutput>(
        &self,
        visible: &Visible,
        root: &Path,
        prefix: &str,
        depth: usize,
        output: &mut O,
        summary: &mut RenderSummary,
    ) -> Result<()> {
        let last_dir = visible.dirs.len().saturating_sub(1);
        for (i, sub) in visible.dirs.iter().enumerate() {
            let is_last = i == last_dir && visible.files.is_empty();
            self.render_directory(sub, root, prefix, is_last, depth + 1, output, summary)?;
        }

        let last_file = visible.files.len().saturating_sub(1);
        for (i, file) in visible.files.iter().enumerate() {
            let icon = self.layout.file_icon(&extension_of(&file.name));
            let size = self.options.show_file_size.then(|| match file.path.metadata() {
                Ok(metadata) => FileSize::Known(metadata.len()),
                Err(_) => FileSize::Unknown,
            });
            output.file(prefix, i == last_file, icon, &file.name, size)?;
            summary.files += 1;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn render_directory<O: DiagramOutput>(
        &self,
        dir: &ListedEntry,
        root: &Path,
        prefix: &str,
        is_last: bool,
        depth: usize,
        output: &mut O,
        summary: &mut RenderSummary,
    ) -> Result<()> {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }

        let icon = self.layout.folder_icon(&dir.name);
        let inner = child_prefix(prefix, is_last);

        let visible = match self.visible(&dir.path, root, depth) {
            Ok(visible) => visible,
            Err(e) => {
                tracing::debug!(path = %dir.path.display(), error = %e, "directory not enumerated");
                output.directory(prefix, is_last, icon, &dir.name, false)?;
                summary.dirs += 1;
                output.notice(&inner, &Notice::from_error(&e))?;
                return Ok(());
            }
        };

        let empty = visible.is_empty();
        // Full mode counts subfolders cut by the depth limit as content. In
        // compact mode they count only when the probe looked past the limit.
        let truncated =
            visible.truncated && (!self.options.compact || self.options.probe_beyond_depth);
        if self.options.compact && empty && !truncated {
            return Ok(());
        }

        output.directory(
            prefix,
            is_last,
            icon,
            &dir.name,
            empty && !truncated && self.options.show_empty_indicator,
        )?;
        summary.dirs += 1;

        if empty {
            if !self.options.compact && !truncated {
                output.notice(&inner, &Notice::NoMatches)?;
            }
        } else {
            self.render_children(&visible, root, &inner, depth, output, summary)?;
        }
        Ok(())
    }
}
