//! Registry tagging, always the last step.

use cm_workspace::Tree;

use crate::context::StepContext;
use crate::error::MigrateError;

pub(super) fn apply(tree: &mut dyn Tree, ctx: &StepContext<'_>) -> Result<(), MigrateError> {
    let config = ctx.config();
    let mut project = ctx.project.clone();

    project.source_root = Some(project.src_dir());
    project.tags.insert(&config.sentinel_tag);
    project.tags.insert(&config.platform_tag);

    ctx.run.registry.write_project(tree, &project)?;
    Ok(())
}
