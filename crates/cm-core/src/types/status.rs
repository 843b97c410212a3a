//! Migration status types.
//!
//! This module provides the [`MigrationStatus`] enum for classifying
//! workspace projects in the coverage report.

use serde::{Deserialize, Serialize};

/// The migration status of a workspace project.
///
/// # Examples
///
/// ```
/// use cm_core::MigrationStatus;
///
/// assert!(MigrationStatus::NotMigrated.needs_migration());
/// assert!(!MigrationStatus::Migrated.needs_migration());
/// assert!(!MigrationStatus::NotConverged.is_converged());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum MigrationStatus {
    /// Package is not on the converged major version; never migrated.
    #[default]
    NotConverged,

    /// Converged package still on the old conventions.
    NotMigrated,

    /// Converged package carrying a source root and the sentinel tag.
    Migrated,
}

impl MigrationStatus {
    /// Returns `true` if the project is eligible but not yet migrated.
    #[inline]
    #[must_use]
    pub const fn needs_migration(self) -> bool {
        matches!(self, Self::NotMigrated)
    }

    /// Returns `true` if the project is migrated.
    #[inline]
    #[must_use]
    pub const fn is_migrated(self) -> bool {
        matches!(self, Self::Migrated)
    }

    /// Returns `true` if the project is a converged package.
    #[inline]
    #[must_use]
    pub const fn is_converged(self) -> bool {
        !matches!(self, Self::NotConverged)
    }

    /// Returns a human-readable label for this status.
    ///
    /// # Examples
    ///
    /// ```
    /// use cm_core::MigrationStatus;
    ///
    /// assert_eq!(MigrationStatus::Migrated.label(), "Migrated");
    /// assert_eq!(MigrationStatus::NotMigrated.label(), "Not migrated");
    /// ```
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotConverged => "Not converged",
            Self::NotMigrated => "Not migrated",
            Self::Migrated => "Migrated",
        }
    }
}
