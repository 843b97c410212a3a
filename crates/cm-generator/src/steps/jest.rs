//! Jest config regeneration.

use cm_workspace::{Tree, TreeExt};

use crate::context::StepContext;
use crate::error::MigrateError;
use crate::templates::{JEST_SETUP, jest_config};

#[allow(clippy::unnecessary_wraps)]
pub(super) fn apply(tree: &mut dyn Tree, ctx: &StepContext<'_>) -> Result<(), MigrateError> {
    let config = ctx.config();
    let needs_serializer = ctx
        .project
        .dependencies
        .keys()
        .any(|dep| config.snapshot_serializer_deps.contains(dep));

    let rendered = jest_config(
        &ctx.project.name,
        &ctx.offset_from_root(),
        needs_serializer.then_some(config.snapshot_serializer.as_str()),
    );
    tree.write_str(&ctx.path("jest.config.js"), &rendered);

    let setup = ctx.path("config/tests.js");
    if !tree.exists(&setup) {
        tree.write_str(&setup, JEST_SETUP);
    }
    Ok(())
}
