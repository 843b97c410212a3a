use cm_workspace::{Tree, TreeExt};

use crate::context::StepContext;
use crate::error::MigrateError;
use crate::templates::NPMIGNORE;

#[allow(clippy::unnecessary_wraps)]
pub(super) fn apply(tree: &mut dyn Tree, ctx: &StepContext<'_>) -> Result<(), MigrateError> {
    tree.write_str(&ctx.path(".npmignore"), NPMIGNORE);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::steps::MigrationStep;
    use crate::templates::NPMIGNORE;
    use crate::testing::{WorkspaceBuilder, read_text, run_step};

    #[test]
    fn test_overwrites_ignore_file() {
        let mut tree = WorkspaceBuilder::new()
            .project("@scope/y", "packages/y", "9.0.0")
            .file("packages/y/.npmignore", "lib/\n")
            .build();

        run_step(&mut tree, "@scope/y", MigrationStep::NpmIgnore).0.unwrap();

        assert_eq!(read_text(&tree, "packages/y/.npmignore"), NPMIGNORE);
    }
}
