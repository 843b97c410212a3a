//! Migration coverage report.
//!
//! Read-only: the report walks the registry once and never writes to the
//! tree.

use cm_core::{MigrationStatus, UserLog};
use cm_workspace::{MigrationStats, Tree};
use serde::Serialize;

use crate::context::MigrationContext;
use crate::eligibility::migration_status;
use crate::error::MigrateError;

/// Coverage of converged projects.
///
/// Name lists only cover converged projects; non-converged ones appear in
/// `stats.not_converged` and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    /// Counts by status.
    pub stats: MigrationStats,
    /// Converged projects already migrated, sorted.
    pub migrated: Vec<String>,
    /// Converged projects still to migrate, sorted.
    pub not_migrated: Vec<String>,
}

impl StatsReport {
    /// Classifies every registered project.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry or a manifest cannot be read.
    pub fn collect(tree: &dyn Tree, ctx: &MigrationContext<'_>) -> Result<Self, MigrateError> {
        let mut report = Self::default();
        for (name, project) in ctx.registry.list_projects(tree)? {
            let status = migration_status(&project, ctx.config);
            report.stats.record(status);
            if !status.is_converged() {
                continue;
            }
            if status.is_migrated() {
                report.migrated.push(name);
            } else {
                report.not_migrated.push(name);
            }
        }
        Ok(report)
    }

    /// Appends the two-section report to `log`.
    pub fn write_to(&self, log: &mut UserLog) {
        Self::section(log, MigrationStatus::Migrated, &self.migrated);
        Self::section(log, MigrationStatus::NotMigrated, &self.not_migrated);
    }

    fn section(log: &mut UserLog, status: MigrationStatus, names: &[String]) {
        let mut message = format!("{} packages: {}", status.label(), names.len());
        for name in names {
            message.push_str("\n  - ");
            message.push_str(name);
        }
        log.info(message);
    }
}
