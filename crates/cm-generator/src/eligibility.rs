//! Migration eligibility predicates.
//!
//! Both predicates are evaluated against a fresh [`ProjectConfiguration`]
//! every time; nothing is cached between steps or projects.

use cm_core::{MigrationConfig, MigrationStatus, ProjectConfiguration};

/// Returns `true` if the project's manifest version is on the converged
/// major version (starts with `"9."` by default).
///
/// # Examples
///
/// ```
/// use cm_core::{MigrationConfig, ProjectConfiguration};
/// use cm_generator::is_converged_package;
///
/// let config = MigrationConfig::default();
/// let mut project = ProjectConfiguration::default();
///
/// project.version = "9.0.0-alpha.30".to_owned();
/// assert!(is_converged_package(&project, &config));
///
/// project.version = "8.2.7".to_owned();
/// assert!(!is_converged_package(&project, &config));
/// ```
#[inline]
#[must_use]
pub fn is_converged_package(project: &ProjectConfiguration, config: &MigrationConfig) -> bool {
    project.version.starts_with(&config.converged_version_prefix)
}

/// Returns `true` if the project has a source root and carries the sentinel
/// tag.
///
/// Used for reporting only; migrating an already-migrated project is allowed.
#[inline]
#[must_use]
pub fn is_already_migrated(project: &ProjectConfiguration, config: &MigrationConfig) -> bool {
    project.source_root.is_some() && project.tags.contains(&config.sentinel_tag)
}

/// Classifies a project for the coverage report.
#[must_use]
pub fn migration_status(project: &ProjectConfiguration, config: &MigrationConfig) -> MigrationStatus {
    if !is_converged_package(project, config) {
        MigrationStatus::NotConverged
    } else if is_already_migrated(project, config) {
        MigrationStatus::Migrated
    } else {
        MigrationStatus::NotMigrated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use cm_core::TagSet;

    fn project(version: &str) -> ProjectConfiguration {
        ProjectConfiguration {
            name: "@scope/a".to_owned(),
            root: Utf8PathBuf::from("packages/a"),
            version: version.to_owned(),
            ..ProjectConfiguration::default()
        }
    }

    #[test]
    fn test_converged_requires_major_nine_prefix() {
        let config = MigrationConfig::default();
        assert!(is_converged_package(&project("9.0.0"), &config));
        assert!(is_converged_package(&project("9.0.0-alpha.30"), &config));
        assert!(!is_converged_package(&project("8.2.7"), &config));
        assert!(!is_converged_package(&project("19.0.0"), &config));
        assert!(!is_converged_package(&project("9"), &config));
        assert!(!is_converged_package(&project(""), &config));
    }

    #[test]
    fn test_already_migrated_needs_both_markers() {
        let config = MigrationConfig::default();

        let mut p = project("9.0.0");
        assert!(!is_already_migrated(&p, &config));

        p.tags = TagSet::from_iter(["vNext"]);
        assert!(!is_already_migrated(&p, &config));

        p.source_root = Some(Utf8PathBuf::from("packages/a/src"));
        assert!(is_already_migrated(&p, &config));

        p.tags = TagSet::from_iter(["platform:web"]);
        assert!(!is_already_migrated(&p, &config));
    }

    #[test]
    fn test_migration_status() {
        let config = MigrationConfig::default();
        assert_eq!(
            migration_status(&project("8.0.0"), &config),
            MigrationStatus::NotConverged
        );
        assert_eq!(
            migration_status(&project("9.0.0"), &config),
            MigrationStatus::NotMigrated
        );

        let mut migrated = project("9.0.0");
        migrated.source_root = Some(Utf8PathBuf::from("packages/a/src"));
        migrated.tags.insert("vNext");
        assert_eq!(migration_status(&migrated, &config), MigrationStatus::Migrated);

        // A migrated tag on a non-converged package does not count.
        migrated.version = "8.0.0".to_owned();
        assert_eq!(
            migration_status(&migrated, &config),
            MigrationStatus::NotConverged
        );
    }
}
