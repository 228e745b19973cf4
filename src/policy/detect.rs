//! Project shape detection

use std::path::Path;

const SENTINEL_DIRS: &[&str] = &["Assets", "ProjectSettings", "Library"];
const SENTINEL_FILES: &[&str] = &["Assembly-CSharp.csproj"];

/// Check whether `root` looks like a structured (Unity-style) project.
pub fn is_structured_project(root: &Path) -> bool {
    SENTINEL_DIRS.iter().any(|dir| root.join(dir).is_dir())
        || SENTINEL_FILES.iter().any(|file| root.join(file).is_file())
}
