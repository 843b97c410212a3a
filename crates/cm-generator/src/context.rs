//! Run and step contexts.
//!
//! A [`MigrationContext`] is built once per run and threaded explicitly
//! through validation, orchestration and every step; nothing reaches the
//! registry through ambient state.

use camino::{Utf8Path, Utf8PathBuf};
use cm_core::{MigrationConfig, ProjectConfiguration};
use cm_workspace::ProjectRegistry;

/// Configuration and registry access shared by a whole run.
#[derive(Debug, Clone)]
pub struct MigrationContext<'a> {
    /// Workspace conventions.
    pub config: &'a MigrationConfig,
    /// Project registry handle.
    pub registry: ProjectRegistry,
}

impl<'a> MigrationContext<'a> {
    /// Creates a context for `config`.
    #[must_use]
    pub fn new(config: &'a MigrationConfig) -> Self {
        Self {
            config,
            registry: ProjectRegistry::new(&config.workspace_file),
        }
    }
}

/// Everything a step needs to migrate one project.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    /// The run context.
    pub run: &'a MigrationContext<'a>,
    /// Snapshot of the project being migrated.
    pub project: &'a ProjectConfiguration,
}

impl<'a> StepContext<'a> {
    /// Creates a step context.
    #[must_use]
    pub const fn new(run: &'a MigrationContext<'a>, project: &'a ProjectConfiguration) -> Self {
        Self { run, project }
    }

    /// Workspace conventions.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &'a MigrationConfig {
        self.run.config
    }

    /// The package name without the workspace scope.
    #[inline]
    #[must_use]
    pub fn normalized_name(&self) -> &'a str {
        self.project.normalized_name(&self.run.config.scope)
    }

    /// Relative path from the project root back to the tree root, with a
    /// trailing slash (`packages/a` gives `../../`).
    #[must_use]
    pub fn offset_from_root(&self) -> String {
        offset_from_root(&self.project.root)
    }

    /// Joins a project-relative path onto the project root.
    #[inline]
    #[must_use]
    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.project.path(relative)
    }
}

/// Relative path from `dir` back to the tree root, with a trailing slash.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use cm_generator::offset_from_root;
///
/// assert_eq!(offset_from_root(Utf8Path::new("packages/react-button")), "../../");
/// assert_eq!(offset_from_root(Utf8Path::new("apps")), "../");
/// ```
#[must_use]
pub fn offset_from_root(dir: &Utf8Path) -> String {
    let depth = dir
        .components()
        .filter(|c| matches!(c, camino::Utf8Component::Normal(_)))
        .count();
    "../".repeat(depth)
}
