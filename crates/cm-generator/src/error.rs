//! Error types for the cm-generator crate.
//!
//! # Error Recovery Strategy
//!
//! - **Validation errors** ([`MigrateError::ConflictingMode`],
//!   [`MigrateError::MissingName`], [`MigrateError::NotConverged`],
//!   [`MigrateError::ProjectNotFound`]): raised before any tree mutation
//! - **Data errors** ([`MigrateError::StoryRead`], tree and registry errors):
//!   raised mid-run; earlier writes stay in the tree
//! - Soft conditions never become errors; they are warnings in the
//!   [`UserLog`](cm_core::UserLog)

use camino::Utf8PathBuf;
use cm_workspace::{RegistryError, TreeError};

/// Errors that abort a migration run.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    /// Two operating modes were requested at once.
    #[error("--{first} and --{second} are mutually exclusive")]
    ConflictingMode {
        /// The first conflicting option.
        first: &'static str,
        /// The second conflicting option.
        second: &'static str,
    },

    /// No project name was given and no batch mode was chosen.
    #[error("--name cannot be empty: provide a project name, --all or --stats")]
    MissingName,

    /// The named project is not a converged package.
    #[error("{name} is not converged package (version '{version}')")]
    NotConverged {
        /// Project name.
        name: String,
        /// Its manifest version.
        version: String,
    },

    /// The named project is not registered in the workspace.
    #[error("cannot find project '{0}' in the workspace")]
    ProjectNotFound(String),

    /// A story file matched for relocation had no readable content.
    #[error("story file {0} has no content")]
    StoryRead(Utf8PathBuf),

    /// The interactive prompt failed.
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Tree access failed.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Registry access failed.
    #[error(transparent)]
    Registry(RegistryError),
}

impl From<RegistryError> for MigrateError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::ProjectNotFound(name) => Self::ProjectNotFound(name),
            RegistryError::Tree(err) => Self::Tree(err),
            other @ RegistryError::MissingWorkspace(_) => Self::Registry(other),
        }
    }
}

impl MigrateError {
    /// Returns `true` for errors raised before the tree was touched.
    #[inline]
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ConflictingMode { .. }
                | Self::MissingName
                | Self::NotConverged { .. }
                | Self::ProjectNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_mode_display() {
        let err = MigrateError::ConflictingMode {
            first: "name",
            second: "all",
        };
        assert_eq!(err.to_string(), "--name and --all are mutually exclusive");
        assert!(err.is_validation());
    }

    #[test]
    fn test_registry_error_conversion() {
        let err = MigrateError::from(RegistryError::ProjectNotFound("@scope/x".to_owned()));
        assert!(matches!(err, MigrateError::ProjectNotFound(ref name) if name == "@scope/x"));

        let err = MigrateError::from(RegistryError::MissingWorkspace(Utf8PathBuf::from(
            "workspace.json",
        )));
        assert!(matches!(err, MigrateError::Registry(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_story_read_is_data_error() {
        let err = MigrateError::StoryRead(Utf8PathBuf::from("examples/src/y/A.stories.tsx"));
        assert!(!err.is_validation());
        assert!(err.to_string().contains("A.stories.tsx"));
    }
}
