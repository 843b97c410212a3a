//! Workspace project registry.
//!
//! [`ProjectRegistry`] resolves project names to [`ProjectConfiguration`]
//! snapshots by joining the workspace registry file with each project's
//! `package.json`, and writes registry fields back.
//!
//! # Registry Layout
//!
//! ```text
//! workspace.json
//! {
//!   "version": 2,
//!   "projects": {
//!     "@fluentui/react-button": {
//!       "root": "packages/react-button",
//!       "projectType": "library",
//!       "tags": ["platform:web"]
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use cm_core::{PackageManifest, ProjectConfiguration, ProjectEntry, WorkspaceFile};
use tracing::debug;

use crate::error::{RegistryError, TreeError};
use crate::tree::{Tree, TreeExt};

/// Access to the project registry stored inside a [`Tree`].
///
/// The registry holds no state besides the registry file location; every
/// call reads the tree afresh, so snapshots never go stale between steps.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use cm_workspace::{MemoryTree, ProjectRegistry};
///
/// let tree = MemoryTree::new()
///     .with_file("workspace.json", r#"{"projects": {"@fluentui/a": {"root": "packages/a"}}}"#)
///     .with_file("packages/a/package.json", r#"{"name": "@fluentui/a", "version": "9.0.0"}"#);
///
/// let registry = ProjectRegistry::new(Utf8Path::new("workspace.json"));
/// let project = registry.read_project(&tree, "@fluentui/a").unwrap();
/// assert_eq!(project.version, "9.0.0");
/// ```
#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    /// Registry file location relative to the tree root.
    workspace_file: Utf8PathBuf,
}

impl ProjectRegistry {
    /// Creates a registry backed by the given registry file.
    #[must_use]
    pub fn new(workspace_file: &Utf8Path) -> Self {
        Self {
            workspace_file: workspace_file.to_owned(),
        }
    }

    /// Returns the registry file location.
    #[inline]
    #[must_use]
    pub fn workspace_file(&self) -> &Utf8Path {
        &self.workspace_file
    }

    /// Resolves a single project.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ProjectNotFound`] for unknown names,
    /// [`RegistryError::MissingWorkspace`] if the registry file is absent.
    pub fn read_project(
        &self,
        tree: &dyn Tree,
        name: &str,
    ) -> Result<ProjectConfiguration, RegistryError> {
        let workspace = self.load(tree)?;
        let entry = workspace
            .projects
            .get(name)
            .ok_or_else(|| RegistryError::ProjectNotFound(name.to_owned()))?;
        Self::configuration(tree, name, entry)
    }

    /// Resolves every registered project, keyed by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingWorkspace`] if the registry file is
    /// absent, or a tree error for unreadable manifests.
    pub fn list_projects(
        &self,
        tree: &dyn Tree,
    ) -> Result<BTreeMap<String, ProjectConfiguration>, RegistryError> {
        let workspace = self.load(tree)?;
        workspace
            .projects
            .iter()
            .map(|(name, entry)| Ok((name.clone(), Self::configuration(tree, name, entry)?)))
            .collect()
    }

    /// Writes a project's registry fields back in one piece.
    ///
    /// Only `root`, `sourceRoot`, `projectType` and `tags` are owned by the
    /// registry; manifest fields are written through [`Self::write_manifest`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ProjectNotFound`] if the project is not
    /// registered.
    pub fn write_project(
        &self,
        tree: &mut dyn Tree,
        project: &ProjectConfiguration,
    ) -> Result<(), RegistryError> {
        let mut workspace = self.load(tree)?;
        let entry = workspace
            .projects
            .get_mut(&project.name)
            .ok_or_else(|| RegistryError::ProjectNotFound(project.name.clone()))?;

        entry.root.clone_from(&project.root);
        entry.source_root.clone_from(&project.source_root);
        entry.project_type.clone_from(&project.project_type);
        entry.tags.clone_from(&project.tags);

        tree.write_json(&self.workspace_file, &workspace)?;
        debug!(project = %project.name, "Updated workspace registry entry");
        Ok(())
    }

    /// Reads a project's manifest.
    ///
    /// A missing manifest yields an empty one, which no eligibility check
    /// accepts.
    ///
    /// # Errors
    ///
    /// Returns a tree error if the manifest cannot be read or parsed.
    pub fn read_manifest(
        tree: &dyn Tree,
        project: &ProjectConfiguration,
    ) -> Result<PackageManifest, TreeError> {
        Ok(tree
            .read_json(&project.manifest_path())?
            .unwrap_or_default())
    }

    /// Writes a project's manifest.
    ///
    /// # Errors
    ///
    /// Returns a tree error if serialization fails.
    pub fn write_manifest(
        tree: &mut dyn Tree,
        project: &ProjectConfiguration,
        manifest: &PackageManifest,
    ) -> Result<(), TreeError> {
        tree.write_json(&project.manifest_path(), manifest)
    }

    fn load(&self, tree: &dyn Tree) -> Result<WorkspaceFile, RegistryError> {
        tree.read_json(&self.workspace_file)?
            .ok_or_else(|| RegistryError::MissingWorkspace(self.workspace_file.clone()))
    }

    fn configuration(
        tree: &dyn Tree,
        name: &str,
        entry: &ProjectEntry,
    ) -> Result<ProjectConfiguration, RegistryError> {
        let manifest_path = entry.root.join("package.json");
        let manifest: PackageManifest = match tree.read_json(&manifest_path)? {
            Some(manifest) => manifest,
            None => {
                debug!(project = name, path = %manifest_path, "Project has no manifest");
                PackageManifest::default()
            }
        };

        Ok(ProjectConfiguration {
            name: name.to_owned(),
            root: entry.root.clone(),
            source_root: entry.source_root.clone(),
            project_type: entry.project_type.clone(),
            tags: entry.tags.clone(),
            version: manifest.version,
            dependencies: manifest.dependencies.unwrap_or_default(),
        })
    }
}
