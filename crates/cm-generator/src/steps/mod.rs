//! The ordered migration steps.
//!
//! Each step mutates the tree for one project and is safe to run again: a
//! second pass leaves the tree unchanged. Story relocation is the exception
//! in mechanics only, since its source directory is gone after the first run
//! and the second pass finds nothing to move.
//!
//! # Order
//!
//! ```text
//! TsConfig ─> PathAliases ─> JestConfig ─> ApiExtractor ─> StorybookConfig
//!          ─> NpmIgnore ─> ManifestScripts ─> Stories ─> WorkspaceTags
//! ```
//!
//! Manifest scripts come after every config file they refer to.

mod api_extractor;
mod jest;
mod npmignore;
mod path_alias;
mod scripts;
mod storybook;
mod stories;
mod tsconfig;
mod workspace;

use cm_core::UserLog;
use cm_workspace::Tree;
use tracing::debug;

use crate::context::StepContext;
use crate::error::MigrateError;

pub use stories::{component_name, is_story_file};

/// A single migration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MigrationStep {
    /// Merge the template into the project `tsconfig.json`.
    TsConfig,
    /// Register path aliases in the root TypeScript config.
    PathAliases,
    /// Regenerate `jest.config.js` and the setup file.
    JestConfig,
    /// Write both api-extractor configs.
    ApiExtractor,
    /// Create the package-local storybook config.
    StorybookConfig,
    /// Write the packaging ignore-file.
    NpmIgnore,
    /// Rewrite manifest scripts.
    ManifestScripts,
    /// Move stories out of the examples project.
    Stories,
    /// Set the source root and migration tags in the registry.
    WorkspaceTags,
}

impl MigrationStep {
    /// Every step, in execution order.
    pub const ALL: [Self; 9] = [
        Self::TsConfig,
        Self::PathAliases,
        Self::JestConfig,
        Self::ApiExtractor,
        Self::StorybookConfig,
        Self::NpmIgnore,
        Self::ManifestScripts,
        Self::Stories,
        Self::WorkspaceTags,
    ];

    /// Returns a short label for logging.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TsConfig => "tsconfig",
            Self::PathAliases => "path-aliases",
            Self::JestConfig => "jest-config",
            Self::ApiExtractor => "api-extractor",
            Self::StorybookConfig => "storybook-config",
            Self::NpmIgnore => "npmignore",
            Self::ManifestScripts => "manifest-scripts",
            Self::Stories => "stories",
            Self::WorkspaceTags => "workspace-tags",
        }
    }

    /// Runs this step for the project in `ctx`.
    ///
    /// # Errors
    ///
    /// Propagates tree and registry failures, and
    /// [`MigrateError::StoryRead`] from story relocation.
    pub fn apply(
        self,
        tree: &mut dyn Tree,
        ctx: &StepContext<'_>,
        log: &mut UserLog,
    ) -> Result<(), MigrateError> {
        debug!(project = %ctx.project.name, step = self.label(), "Applying step");
        match self {
            Self::TsConfig => tsconfig::apply(tree, ctx),
            Self::PathAliases => path_alias::apply(tree, ctx),
            Self::JestConfig => jest::apply(tree, ctx),
            Self::ApiExtractor => api_extractor::apply(tree, ctx),
            Self::StorybookConfig => storybook::apply(tree, ctx),
            Self::NpmIgnore => npmignore::apply(tree, ctx),
            Self::ManifestScripts => scripts::apply(tree, ctx),
            Self::Stories => stories::apply(tree, ctx, log),
            Self::WorkspaceTags => workspace::apply(tree, ctx),
        }
    }
}

/// Runs every step in order, stopping at the first failure.
///
/// A failure is also recorded in `log`, naming the step and project.
///
/// # Errors
///
/// Returns the first step error; earlier steps' writes remain in the tree.
pub fn run_steps(
    tree: &mut dyn Tree,
    ctx: &StepContext<'_>,
    log: &mut UserLog,
) -> Result<(), MigrateError> {
    for step in MigrationStep::ALL {
        if let Err(err) = step.apply(tree, ctx, log) {
            log.error(format!(
                "{} failed for {}: {err}",
                step.label(),
                ctx.project.name
            ));
            return Err(err);
        }
    }
    Ok(())
}
