//! Root `tsconfig` path aliases.
//!
//! The project and each internal dependency the workspace knows about get an
//! alias pointing at their `src/index.ts`. An existing alias for the same
//! package is overwritten; other aliases are left alone.

use camino::Utf8Path;
use cm_core::TsConfig;
use cm_workspace::{RegistryError, Tree, TreeExt};
use tracing::debug;

use crate::context::StepContext;
use crate::error::MigrateError;

pub(super) fn apply(tree: &mut dyn Tree, ctx: &StepContext<'_>) -> Result<(), MigrateError> {
    let config = ctx.config();
    let project = ctx.project;
    let path = config.root_tsconfig.as_path();

    let mut root: TsConfig = tree.read_json(path)?.unwrap_or_default();
    let paths = root.compiler_options.paths.get_or_insert_with(Default::default);
    paths.insert(project.name.clone(), vec![entry_point(&project.root)]);

    for dependency in project.dependencies.keys() {
        if !config.is_internal(dependency) {
            continue;
        }
        match ctx.run.registry.read_project(&*tree, dependency) {
            Ok(dep) => {
                paths.insert(dependency.clone(), vec![entry_point(&dep.root)]);
            }
            Err(RegistryError::ProjectNotFound(_)) => {
                debug!(dependency = %dependency, "Dependency is not in the workspace");
            }
            Err(err) => return Err(err.into()),
        }
    }

    tree.write_json(path, &root)?;
    Ok(())
}

fn entry_point(root: &Utf8Path) -> String {
    root.join("src/index.ts").into_string()
}
