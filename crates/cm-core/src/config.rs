//! Configuration for the converge-migrate tool.
//!
//! [`MigrationConfig`] captures the workspace conventions the generator
//! applies: the package scope, registry file locations, the tags written on
//! migration, and the snapshot-serializer allow-list.
//!
//! All fields have defaults matching the Fluent UI monorepo layout, so an
//! empty JSON object is a valid configuration file.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Workspace conventions used by the migration generator.
///
/// # Examples
///
/// ```
/// use cm_core::MigrationConfig;
///
/// let config = MigrationConfig::default();
/// assert_eq!(config.scope, "@fluentui/");
/// assert_eq!(config.sentinel_tag, "vNext");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Package scope marking internal (same-workspace) packages, including
    /// the trailing slash.
    pub scope: String,

    /// Workspace project registry file, relative to the tree root.
    pub workspace_file: Utf8PathBuf,

    /// Shared root TypeScript config holding the path-alias map.
    pub root_tsconfig: Utf8PathBuf,

    /// Project that historically collected the stories of every package.
    pub examples_project: String,

    /// Tag marking a project as migrated.
    pub sentinel_tag: String,

    /// Platform tag added alongside the sentinel tag.
    pub platform_tag: String,

    /// Version prefix identifying converged packages.
    pub converged_version_prefix: String,

    /// Dependencies whose presence requires a jest snapshot serializer.
    pub snapshot_serializer_deps: Vec<String>,

    /// Snapshot serializer module added to the jest config.
    pub snapshot_serializer: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            scope: "@fluentui/".to_owned(),
            workspace_file: Utf8PathBuf::from("workspace.json"),
            root_tsconfig: Utf8PathBuf::from("tsconfig.base.json"),
            examples_project: "@fluentui/react-examples".to_owned(),
            sentinel_tag: "vNext".to_owned(),
            platform_tag: "platform:web".to_owned(),
            converged_version_prefix: "9.".to_owned(),
            snapshot_serializer_deps: vec![
                "@fluentui/react-make-styles".to_owned(),
                "@fluentui/make-styles".to_owned(),
            ],
            snapshot_serializer: "@fluentui/jest-serializer-make-styles".to_owned(),
        }
    }
}

impl MigrationConfig {
    /// Loads a configuration file, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if the file does not exist,
    /// [`ConfigError::Parse`] for malformed JSON, and
    /// [`ConfigError::InvalidOption`] if validation fails.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_owned()));
        }

        let contents = std::fs::read_to_string(path.as_std_path())?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;

        tracing::debug!(path = %path, scope = %config.scope, "Loaded configuration");
        Ok(config)
    }

    /// Checks option values that the generator relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] naming the first bad option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scope.is_empty() || !self.scope.ends_with('/') {
            return Err(ConfigError::invalid_option(
                "scope",
                "must be a non-empty package scope ending with '/'",
            ));
        }
        if self.converged_version_prefix.is_empty() {
            return Err(ConfigError::invalid_option(
                "converged_version_prefix",
                "must not be empty",
            ));
        }
        if self.sentinel_tag.is_empty() {
            return Err(ConfigError::invalid_option("sentinel_tag", "must not be empty"));
        }
        if self.workspace_file.as_str().is_empty() {
            return Err(ConfigError::invalid_option(
                "workspace_file",
                "must not be empty",
            ));
        }
        Ok(())
    }

    /// Returns `true` if `package` belongs to this workspace's scope.
    ///
    /// # Examples
    ///
    /// ```
    /// use cm_core::MigrationConfig;
    ///
    /// let config = MigrationConfig::default();
    /// assert!(config.is_internal("@fluentui/react-theme"));
    /// assert!(!config.is_internal("react"));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_internal(&self, package: &str) -> bool {
        package.starts_with(&self.scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MigrationConfig::default();
        assert_eq!(config.workspace_file, "workspace.json");
        assert_eq!(config.root_tsconfig, "tsconfig.base.json");
        assert_eq!(config.platform_tag, "platform:web");
        assert_eq!(config.converged_version_prefix, "9.");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let json = r#"{"scope": "@scope/", "examples_project": "examples"}"#;
        let config: MigrationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.scope, "@scope/");
        assert_eq!(config.examples_project, "examples");
        assert_eq!(config.sentinel_tag, "vNext");
    }

    #[test]
    fn test_validate_rejects_bad_scope() {
        let config = MigrationConfig {
            scope: "@scope".to_owned(),
            ..MigrationConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scope"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = MigrationConfig::load(Utf8Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("migrate.json")).unwrap();
        std::fs::write(path.as_std_path(), r#"{"sentinel_tag": "converged"}"#).unwrap();

        let config = MigrationConfig::load(&path).unwrap();
        assert_eq!(config.sentinel_tag, "converged");
        assert_eq!(config.scope, "@fluentui/");
    }

    #[test]
    fn test_is_internal() {
        let config = MigrationConfig::default();
        assert!(config.is_internal("@fluentui/react-button"));
        assert!(!config.is_internal("@griffel/react"));
    }
}
