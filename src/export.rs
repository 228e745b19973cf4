//! Concatenation of selected files into one annotated text document

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::tree::{ExportOptions, format_size, relative_path};

/// Result of `concatenate_selected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concatenation {
    pub text: String,
    /// Files whose contents made it into `text`.
    pub processed: usize,
    /// Content bytes of the processed files.
    pub total_size: u64,
}

/// Concatenate `paths` into a single document, sections labelled with their
/// path relative to `root`.
///
/// Paths are processed in sorted order. Paths that are not regular files are
/// skipped; files that cannot be read get an inline error block instead of
/// failing the whole export.
pub fn concatenate_selected(paths: &[PathBuf], root: &Path, options: &ExportOptions) -> Concatenation {
    let generated_at = options
        .generated_at
        .unwrap_or_else(|| Local::now().naive_local());

    let mut text = String::new();
    text.push_str(&format!("// Generated: {}\n", generated_at.format("%Y-%m-%d %H:%M:%S")));
    text.push_str(&format!("// Selected files: {}\n", paths.len()));
    text.push_str(&format!(
        "// Show file sizes: {}\n",
        if options.show_file_size { "yes" } else { "no" }
    ));
    text.push('\n');

    let mut sorted: Vec<&PathBuf> = paths.iter().collect();
    sorted.sort();

    let mut processed = 0usize;
    let mut total_size = 0u64;

    for path in sorted {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "skipping missing file");
            continue;
        }

        match fs::read(path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                let relative = relative_path(path, root);
                if options.show_file_size {
                    let size = format_size(bytes.len() as u64);
                    text.push_str(&format!("==== {} ({}) ====\n", relative, size));
                } else {
                    text.push_str(&format!("==== {} ====\n", relative));
                }
                text.push_str(&content);
                text.push_str("\n\n");

                total_size += content.len() as u64;
                processed += 1;
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "file not readable");
                text.push_str(&format!("==== [ERROR: {}] ====\n", path.display()));
                text.push_str(&format!("// {}\n", e));
                text.push('\n');
            }
        }
    }

    if options.show_file_size {
        let average = if processed > 0 {
            format_size(total_size / processed as u64)
        } else {
            format_size(0)
        };
        text.push('\n');
        text.push_str("// ========== STATISTICS ==========\n");
        text.push_str(&format!("// Files processed: {}\n", processed));
        text.push_str(&format!("// Total content size: {}\n", format_size(total_size)));
        text.push_str(&format!("// Average file size: {}\n", average));
    }

    tracing::debug!(processed, total_size, "concatenated files");

    Concatenation {
        text,
        processed,
        total_size,
    }
}
