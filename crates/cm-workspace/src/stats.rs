//! Migration coverage statistics.
//!
//! [`MigrationStats`] counts workspace projects by [`MigrationStatus`]. The
//! generator fills it in a single sequential pass, so plain counters suffice.
//!
//! # Examples
//!
//! ```
//! use cm_core::MigrationStatus;
//! use cm_workspace::MigrationStats;
//!
//! let mut stats = MigrationStats::default();
//! stats.record(MigrationStatus::Migrated);
//! stats.record(MigrationStatus::NotMigrated);
//! stats.record(MigrationStatus::NotConverged);
//!
//! assert_eq!(stats.converged(), 2);
//! assert!((stats.progress_percent() - 50.0).abs() < 0.1);
//! ```

use cm_core::MigrationStatus;
use serde::{Deserialize, Serialize};

/// Project counts by migration status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MigrationStats {
    /// Total number of registered projects.
    pub total: u64,
    /// Converged projects already migrated.
    pub migrated: u64,
    /// Converged projects still to migrate.
    pub not_migrated: u64,
    /// Projects outside the converged major version.
    pub not_converged: u64,
}

impl MigrationStats {
    /// Counts one project.
    pub fn record(&mut self, status: MigrationStatus) {
        self.total += 1;
        if status.is_migrated() {
            self.migrated += 1;
        } else if status.needs_migration() {
            self.not_migrated += 1;
        } else {
            self.not_converged += 1;
        }
    }

    /// Number of converged projects (migrated or not).
    #[inline]
    #[must_use]
    pub const fn converged(&self) -> u64 {
        self.migrated + self.not_migrated
    }

    /// Returns the migration progress as a percentage of converged projects.
    ///
    /// Returns 100.0 if there are no converged projects.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Acceptable for statistics display
    pub fn progress_percent(&self) -> f64 {
        let converged = self.converged();
        if converged == 0 {
            return 100.0;
        }

        (self.migrated as f64 / converged as f64) * 100.0
    }
}
