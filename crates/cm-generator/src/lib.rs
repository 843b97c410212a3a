//! Migration generator for converged packages.
//!
//! Moves a converged package (manifest version `9.x`) onto the new workspace
//! conventions: local TypeScript, jest, api-extractor and storybook configs,
//! root path aliases, rewritten manifest scripts, stories collocated with
//! their sources, and registry tags marking the package as migrated.
//!
//! # Overview
//!
//! - [`validate_schema`]: resolves a [`MigrationSchema`] into a mode
//! - [`MigrationStep`]: the nine ordered, idempotent steps
//! - [`migrate_project`] / [`migrate_all`]: single-project and batch runs
//! - [`StatsReport`]: read-only coverage report
//! - [`migrate`]: all of the above behind one call
//!
//! # Architecture
//!
//! ```text
//! MigrationSchema ─> validate_schema ─> MigrationMode
//!                        │ (Prompt)          │
//!                        │                   ├─ Single ─> migrate_project ─┐
//!                        │                   ├─ All ────> migrate_all ─────┤─> run_steps ─> dyn Tree
//!                        │                   └─ Stats ──> StatsReport      │
//!                        └──────── MigrationContext (config + registry) ───┘
//! ```
//!
//! # Example
//!
//! ```
//! use cm_core::{MigrationConfig, MigrationSchema, UserLog};
//! use cm_generator::{MigrateError, migrate};
//! use cm_workspace::MemoryTree;
//!
//! let mut tree = MemoryTree::new();
//! let mut log = UserLog::new();
//! let err = migrate(
//!     &mut tree,
//!     &MigrationConfig::default(),
//!     &MigrationSchema { name: None, all: true, stats: true },
//!     None,
//!     &mut log,
//! )
//! .unwrap_err();
//! assert!(matches!(err, MigrateError::ConflictingMode { .. }));
//! assert!(tree.is_empty());
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod context;
mod eligibility;
mod error;
mod orchestrator;
mod prompt;
mod report;
pub mod steps;
pub mod templates;
mod validate;

#[cfg(test)]
mod testing;

pub use context::{MigrationContext, StepContext, offset_from_root};
pub use eligibility::{is_already_migrated, is_converged_package, migration_status};
pub use error::MigrateError;
pub use orchestrator::{MigrationSummary, migrate_all, migrate_project};
pub use prompt::Prompt;
pub use report::StatsReport;
pub use steps::{MigrationStep, run_steps};
pub use validate::{NAME_PROMPT, validate_schema};

use cm_core::{MigrationConfig, MigrationMode, MigrationSchema, UserLog};
use cm_workspace::Tree;
use tracing::info;

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// One or more projects were migrated (single or batch mode).
    Migrated(MigrationSummary),
    /// The coverage report was produced; the tree is untouched.
    Stats(StatsReport),
}

/// Validates `schema` and runs the resolved mode against `tree`.
///
/// Messages for the operator are appended to `log`; nothing is printed. The
/// prompt, if given, is asked at most once and only when no mode was set.
///
/// # Errors
///
/// Validation errors (see [`validate_schema`]) are returned before any
/// write. Step failures are returned as they happen, leaving earlier writes
/// in the tree.
pub fn migrate(
    tree: &mut dyn Tree,
    config: &MigrationConfig,
    schema: &MigrationSchema,
    prompt: Option<&mut dyn Prompt>,
    log: &mut UserLog,
) -> Result<MigrationOutcome, MigrateError> {
    let ctx = MigrationContext::new(config);
    let mode = validate_schema(&*tree, &ctx, schema, prompt)?;
    info!(?mode, "Resolved migration mode");

    match mode {
        MigrationMode::Stats => {
            let report = StatsReport::collect(&*tree, &ctx)?;
            report.write_to(log);
            Ok(MigrationOutcome::Stats(report))
        }
        MigrationMode::All => migrate_all(tree, &ctx, log).map(MigrationOutcome::Migrated),
        MigrationMode::Single(name) => {
            let project = ctx.registry.read_project(&*tree, &name)?;
            migrate_project(tree, &ctx, &project, log)?;
            Ok(MigrationOutcome::Migrated(MigrationSummary {
                migrated: vec![name],
                skipped: Vec::new(),
            }))
        }
    }
}
