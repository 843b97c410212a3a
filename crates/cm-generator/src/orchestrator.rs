//! Single-project and batch migration.
//!
//! Projects are migrated one at a time, each against a fresh registry read.
//! A hard failure aborts the run; writes already made stay in the tree, and
//! callers decide whether to keep them.

use cm_core::{ProjectConfiguration, UserLog};
use cm_workspace::Tree;
use serde::Serialize;
use tracing::{debug, info};

use crate::context::{MigrationContext, StepContext};
use crate::eligibility::is_converged_package;
use crate::error::MigrateError;
use crate::steps::run_steps;

/// Projects touched by a migration run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationSummary {
    /// Projects that went through every step.
    pub migrated: Vec<String>,
    /// Projects skipped because they are not converged.
    pub skipped: Vec<String>,
}

/// Runs every step for one project.
///
/// # Errors
///
/// Returns the first step failure.
pub fn migrate_project(
    tree: &mut dyn Tree,
    ctx: &MigrationContext<'_>,
    project: &ProjectConfiguration,
    log: &mut UserLog,
) -> Result<(), MigrateError> {
    info!(project = %project.name, "Migrating project");
    run_steps(tree, &StepContext::new(ctx, project), log)?;
    log.info(format!("Migrated {}", project.name));
    Ok(())
}

/// Migrates every converged project in name order.
///
/// Non-converged projects are skipped with a warning. The examples project
/// is not a migration target and is skipped silently.
///
/// # Errors
///
/// Returns the first hard failure; projects after it are not attempted.
pub fn migrate_all(
    tree: &mut dyn Tree,
    ctx: &MigrationContext<'_>,
    log: &mut UserLog,
) -> Result<MigrationSummary, MigrateError> {
    let names: Vec<String> = ctx.registry.list_projects(&*tree)?.into_keys().collect();
    let mut summary = MigrationSummary::default();

    for name in names {
        if name == ctx.config.examples_project {
            debug!(project = %name, "Skipping examples project");
            continue;
        }

        let project = ctx.registry.read_project(&*tree, &name)?;
        if !is_converged_package(&project, ctx.config) {
            log.warn(format!("{name} is not converged package. Skipping migration..."));
            summary.skipped.push(name);
            continue;
        }

        migrate_project(tree, ctx, &project, log)?;
        summary.migrated.push(name);
    }

    info!(
        migrated = summary.migrated.len(),
        skipped = summary.skipped.len(),
        "Batch migration finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{WorkspaceBuilder, read_text, read_value, test_config};
    use camino::Utf8Path;
    use cm_core::Severity;
    use cm_workspace::MemoryTree;
    use serde_json::json;

    fn batch_tree() -> MemoryTree {
        WorkspaceBuilder::new()
            .project_with(
                "@scope/a",
                "packages/a",
                json!({}),
                json!({ "version": "9.0.0", "scripts": { "test": "old" } }),
            )
            .project("@scope/b", "packages/b", "8.2.7")
            .project_with(
                "examples",
                "packages/examples",
                json!({}),
                json!({ "version": "0.1.0", "dependencies": { "@scope/a": "9.0.0" } }),
            )
            .file("packages/examples/src/a/A.stories.tsx", "import { A } from '@scope/a';\n")
            .build()
    }

    #[test]
    fn test_batch_skips_non_converged_with_one_warning() {
        let config = test_config();
        let ctx = MigrationContext::new(&config);
        let mut tree = batch_tree();
        let mut log = UserLog::new();

        let summary = migrate_all(&mut tree, &ctx, &mut log).unwrap();
        assert_eq!(summary.migrated, ["@scope/a"]);
        assert_eq!(summary.skipped, ["@scope/b"]);

        assert_eq!(log.count(Severity::Warn), 1);
        let warning = log
            .entries()
            .iter()
            .find(|e| e.severity == Severity::Warn)
            .unwrap();
        assert!(warning.message.starts_with("@scope/b"));

        // Every step ran for A.
        for file in [
            "packages/a/tsconfig.json",
            "packages/a/jest.config.js",
            "packages/a/config/tests.js",
            "packages/a/config/api-extractor.json",
            "packages/a/config/api-extractor.local.json",
            "packages/a/.storybook/main.js",
            "packages/a/.npmignore",
            "packages/a/src/A.stories.tsx",
        ] {
            assert!(tree.exists(Utf8Path::new(file)), "{file}");
        }
        assert_eq!(read_value(&tree, "packages/a/package.json")["scripts"]["test"], "jest");
        let workspace = read_value(&tree, "workspace.json");
        assert_eq!(workspace["projects"]["@scope/a"]["sourceRoot"], "packages/a/src");

        // Nothing for B.
        assert!(!tree.exists(Utf8Path::new("packages/b/tsconfig.json")));
        assert!(workspace["projects"]["@scope/b"].get("sourceRoot").is_none());
    }

    #[test]
    fn test_second_run_leaves_tree_unchanged() {
        let config = test_config();
        let ctx = MigrationContext::new(&config);
        let mut tree = batch_tree();

        migrate_all(&mut tree, &ctx, &mut UserLog::new()).unwrap();
        let after_first = tree.clone();

        let mut log = UserLog::new();
        migrate_all(&mut tree, &ctx, &mut log).unwrap();
        assert_eq!(tree, after_first);
        // B again, plus nothing left to relocate for A.
        assert_eq!(log.count(Severity::Warn), 2);
    }

    #[test]
    fn test_hard_failure_stops_batch() {
        let config = test_config();
        let ctx = MigrationContext::new(&config);
        let mut tree = WorkspaceBuilder::new()
            .project("@scope/a", "packages/a", "9.0.0")
            .project("@scope/c", "packages/c", "9.0.0")
            .project("examples", "packages/examples", "0.1.0")
            .file("packages/a/tsconfig.json", "{ not json")
            .build();

        let mut log = UserLog::new();
        let err = migrate_all(&mut tree, &ctx, &mut log).unwrap_err();
        assert!(matches!(err, MigrateError::Tree(_)));
        assert!(!tree.exists(Utf8Path::new("packages/c/tsconfig.json")));
        assert_eq!(log.count(Severity::Error), 1);
        assert!(log.entries().iter().any(|entry| {
            entry.severity == Severity::Error
                && entry.message.starts_with("tsconfig failed for @scope/a")
        }));
    }

    #[test]
    fn test_single_project_story_relocation() {
        let config = test_config();
        let ctx = MigrationContext::new(&config);
        let mut tree = batch_tree();
        let project = ctx.registry.read_project(&tree, "@scope/a").unwrap();

        migrate_project(&mut tree, &ctx, &project, &mut UserLog::new()).unwrap();

        let story = read_text(&tree, "packages/a/src/A.stories.tsx");
        assert!(story.starts_with("import { A } from './index';\n"));
        assert!(story.ends_with("  component: A,\n};\n"));
        assert!(tree.list_files(Utf8Path::new("packages/examples/src/a")).unwrap().is_empty());
        let examples = read_value(&tree, "packages/examples/package.json");
        assert!(examples["dependencies"].get("@scope/a").is_none());
    }
}
