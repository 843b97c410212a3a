//! Schema validation.
//!
//! Resolves a raw [`MigrationSchema`] into a [`MigrationMode`]. Validation
//! never writes to the tree; its only side effect is the optional prompt.

use cm_core::{MigrationMode, MigrationSchema};
use cm_workspace::Tree;
use tracing::debug;

use crate::context::MigrationContext;
use crate::eligibility::is_converged_package;
use crate::error::MigrateError;
use crate::prompt::Prompt;

/// Question asked when no operating mode was given.
pub const NAME_PROMPT: &str = "Which converged package would you like to migrate?";

/// Validates a request and resolves its operating mode.
///
/// # Errors
///
/// - [`MigrateError::ConflictingMode`] if more than one mode is set
/// - [`MigrateError::MissingName`] if no mode is set and the prompt (if any)
///   produced no name
/// - [`MigrateError::ProjectNotFound`] if the named project is unregistered
/// - [`MigrateError::NotConverged`] if the named project is not converged
pub fn validate_schema(
    tree: &dyn Tree,
    ctx: &MigrationContext<'_>,
    schema: &MigrationSchema,
    prompt: Option<&mut dyn Prompt>,
) -> Result<MigrationMode, MigrateError> {
    let name = schema.name();

    if name.is_some() && schema.all {
        return Err(MigrateError::ConflictingMode {
            first: "name",
            second: "all",
        });
    }
    if name.is_some() && schema.stats {
        return Err(MigrateError::ConflictingMode {
            first: "name",
            second: "stats",
        });
    }
    if schema.all && schema.stats {
        return Err(MigrateError::ConflictingMode {
            first: "all",
            second: "stats",
        });
    }

    if schema.all {
        return Ok(MigrationMode::All);
    }
    if schema.stats {
        return Ok(MigrationMode::Stats);
    }

    let name = match (name, prompt) {
        (Some(name), _) => name.to_owned(),
        (None, Some(prompt)) => {
            let answer = prompt.ask(NAME_PROMPT)?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Err(MigrateError::MissingName);
            }
            debug!(name = answer, "Project name supplied interactively");
            answer.to_owned()
        }
        (None, None) => return Err(MigrateError::MissingName),
    };

    let project = ctx.registry.read_project(tree, &name)?;
    if !is_converged_package(&project, ctx.config) {
        return Err(MigrateError::NotConverged {
            name,
            version: project.version,
        });
    }

    Ok(MigrationMode::Single(name))
}
