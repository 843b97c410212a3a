use cm_workspace::{Tree, TreeExt};

use crate::context::StepContext;
use crate::error::MigrateError;
use crate::templates::{api_extractor_local, api_extractor_public};

pub(super) fn apply(tree: &mut dyn Tree, ctx: &StepContext<'_>) -> Result<(), MigrateError> {
    tree.write_json(
        &ctx.path("config/api-extractor.json"),
        &api_extractor_public(&ctx.config().scope),
    )?;
    tree.write_json(
        &ctx.path("config/api-extractor.local.json"),
        &api_extractor_local(),
    )?;
    Ok(())
}
