//! Workspace configuration model and YAML loading.
//!
//! This is the schema boundary: the dynamic YAML document is deserialized
//! into a strongly typed model here, so shape errors surface before any
//! filesystem work happens.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CcwError;
use crate::Result;

/// How a [`FileSpec`] path is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A glob pattern, expanded against the project tree (0..N files)
    #[default]
    Pattern,
    /// A literal relative path; silently skipped when the file is missing
    Explicit,
}

/// One file entry inside a group: a path (glob or literal) plus a
/// description template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    pub path: String,
    /// Description template; may reference `{placeholder}` variables
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: FileKind,
}

/// A named collection of file specs contributing one section of the
/// compiled document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub files: Vec<FileSpec>,
}

/// Ignore configuration: which built-in categories are active, per-category
/// pattern overrides, and extra patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreSpec {
    /// When false, no ignore filtering happens at all (including `additional`)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Active category names; `None` activates the whole built-in catalog,
    /// an empty list deactivates every category
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    /// Per-category pattern overrides; an entry fully replaces that
    /// category's built-in defaults
    #[serde(default)]
    pub patterns: BTreeMap<String, Vec<String>>,
    /// Extra patterns applied regardless of which categories are active
    #[serde(default)]
    pub additional: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for IgnoreSpec {
    fn default() -> Self {
        Self {
            enabled: true,
            categories: None,
            patterns: BTreeMap::new(),
            additional: Vec::new(),
        }
    }
}

/// Top-level workspace configuration, loaded from YAML.
///
/// Immutable after load; one instance drives one compile invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub ignore: IgnoreSpec,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl WorkspaceConfig {
    /// Parse a config from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CcwError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }
}
