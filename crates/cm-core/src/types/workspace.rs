//! The workspace registry file (`workspace.json`).
//!
//! Only the fields the generator reads or writes are typed; everything else
//! (targets, implicit dependencies, unknown keys) rides along in the
//! flattened `extra` maps and is written back untouched.

use std::collections::BTreeMap;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::project::TagSet;

/// One project's record in the workspace registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    /// Project root directory.
    pub root: Utf8PathBuf,

    /// Source directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<Utf8PathBuf>,

    /// Project type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,

    /// Project tags.
    #[serde(default, skip_serializing_if = "TagSet::is_empty")]
    pub tags: TagSet,

    /// Fields not owned by this tool.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The workspace registry file.
///
/// # Examples
///
/// ```
/// use cm_core::WorkspaceFile;
///
/// let json = r#"{"version": 2, "projects": {"@fluentui/react-button": {"root": "packages/react-button"}}}"#;
/// let workspace: WorkspaceFile = serde_json::from_str(json).unwrap();
/// assert_eq!(workspace.projects.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceFile {
    /// Registry schema version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Projects keyed by name.
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectEntry>,

    /// Fields not owned by this tool.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
