//! Policy lookup

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

use super::catalog::{project_policies, size_policies};
use super::detect::is_structured_project;
use super::{Policy, PolicyFamily};

/// Layout of a policy overrides file.
///
/// ```toml
/// [[policy]]
/// id = 7
/// family = "size"
/// name = "Docs"
/// include_extensions = [".md", ".txt"]
/// ```
#[derive(Debug, Deserialize)]
struct PolicyFile {
    #[serde(default, rename = "policy")]
    policies: Vec<Policy>,
}

/// Immutable catalog of policies, one ordered list per family.
///
/// Each family list is non-empty and sorted by id.
#[derive(Debug, Clone)]
pub struct PolicyRegistry {
    size: Vec<Policy>,
    project: Vec<Policy>,
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PolicyRegistry {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            size: size_policies(),
            project: project_policies(),
        }
    }

    /// The built-in catalog extended by the policies of a TOML file.
    ///
    /// A policy whose `(family, id)` already exists replaces the built-in one.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::PolicyFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let file: PolicyFile = toml::from_str(&text).map_err(|e| Error::PolicyFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(
            path = %path.display(),
            count = file.policies.len(),
            "loaded policy overrides"
        );
        Ok(Self::builtin().with_overrides(file.policies))
    }

    pub fn with_overrides(mut self, overrides: Vec<Policy>) -> Self {
        for policy in overrides {
            let list = self.family_mut(policy.family);
            match list.iter_mut().find(|p| p.id == policy.id) {
                Some(existing) => *existing = policy,
                None => list.push(policy),
            }
        }
        self.size.sort_by_key(|p| p.id);
        self.project.sort_by_key(|p| p.id);
        self
    }

    fn family_mut(&mut self, family: PolicyFamily) -> &mut Vec<Policy> {
        match family {
            PolicyFamily::Size => &mut self.size,
            PolicyFamily::Project => &mut self.project,
        }
    }

    /// Policies of one family, ordered by id.
    pub fn family(&self, family: PolicyFamily) -> &[Policy] {
        match family {
            PolicyFamily::Size => &self.size,
            PolicyFamily::Project => &self.project,
        }
    }

    /// Every policy, size family first.
    pub fn list_all(&self) -> impl Iterator<Item = &Policy> {
        self.size.iter().chain(self.project.iter())
    }

    /// The include-everything policy of a family.
    pub fn default_for(&self, family: PolicyFamily) -> &Policy {
        let list = self.family(family);
        list.iter().find(|p| p.include_all).unwrap_or(&list[0])
    }

    /// Look up a policy, falling back to the family default for unknown or
    /// absent ids.
    pub fn get(&self, family: PolicyFamily, id: Option<u32>) -> &Policy {
        id.and_then(|id| self.family(family).iter().find(|p| p.id == id))
            .unwrap_or_else(|| self.default_for(family))
    }

    /// Pick the family for `root` (unless given) and look up `id` in it.
    pub fn resolve(&self, root: &Path, family: Option<PolicyFamily>, id: Option<u32>) -> &Policy {
        let family = family.unwrap_or_else(|| {
            if is_structured_project(root) {
                PolicyFamily::Project
            } else {
                PolicyFamily::Size
            }
        });
        self.get(family, id)
    }
}
