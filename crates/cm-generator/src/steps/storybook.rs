//! Package-local storybook config.
//!
//! All three files are only created when absent, so hand-edited storybook
//! setups survive a rerun.

use camino::Utf8Path;
use cm_core::{CompilerOptions, TsConfig};
use cm_workspace::{Tree, TreeExt};
use serde_json::{Map, Value};

use crate::context::StepContext;
use crate::error::MigrateError;
use crate::templates::{storybook_main, storybook_preview};

pub(super) fn apply(tree: &mut dyn Tree, ctx: &StepContext<'_>) -> Result<(), MigrateError> {
    let offset = ctx.offset_from_root();

    let main = ctx.path(".storybook/main.js");
    if !tree.exists(&main) {
        tree.write_str(&main, &storybook_main(&offset));
    }

    let preview = ctx.path(".storybook/preview.js");
    if !tree.exists(&preview) {
        tree.write_str(&preview, &storybook_preview(&offset));
    }

    write_tsconfig_if_absent(tree, &ctx.path(".storybook/tsconfig.json"))
}

fn write_tsconfig_if_absent(tree: &mut dyn Tree, path: &Utf8Path) -> Result<(), MigrateError> {
    if tree.exists(path) {
        return Ok(());
    }

    let mut extra = Map::new();
    extra.insert("allowJs".to_owned(), Value::Bool(true));
    extra.insert("checkJs".to_owned(), Value::Bool(true));

    let config = TsConfig {
        extends: Some("../tsconfig.json".to_owned()),
        compiler_options: CompilerOptions {
            out_dir: Some(String::new()),
            extra,
            ..CompilerOptions::default()
        },
        include: Some(vec!["../src/**/*".to_owned(), "*.js".to_owned()]),
        exclude: None,
        extra: Map::new(),
    };
    tree.write_json(path, &config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::steps::MigrationStep;
    use crate::testing::{WorkspaceBuilder, read_text, read_value, run_step};
    use serde_json::json;

    #[test]
    fn test_creates_missing_files() {
        let mut tree = WorkspaceBuilder::new()
            .project("@scope/y", "packages/y", "9.0.0")
            .build();

        run_step(&mut tree, "@scope/y", MigrationStep::StorybookConfig).0.unwrap();

        assert!(read_text(&tree, "packages/y/.storybook/main.js")
            .contains("require('../../../.storybook/main')"));
        assert!(read_text(&tree, "packages/y/.storybook/preview.js")
            .contains("'../../../.storybook/preview'"));

        let config = read_value(&tree, "packages/y/.storybook/tsconfig.json");
        assert_eq!(config["extends"], "../tsconfig.json");
        assert_eq!(config["compilerOptions"]["allowJs"], true);
        assert_eq!(config["include"], json!(["../src/**/*", "*.js"]));
    }

    #[test]
    fn test_existing_files_are_untouched() {
        let mut tree = WorkspaceBuilder::new()
            .project("@scope/y", "packages/y", "9.0.0")
            .file("packages/y/.storybook/main.js", "custom main\n")
            .build();

        run_step(&mut tree, "@scope/y", MigrationStep::StorybookConfig).0.unwrap();

        assert_eq!(read_text(&tree, "packages/y/.storybook/main.js"), "custom main\n");
        assert!(read_text(&tree, "packages/y/.storybook/preview.js").contains("rootPreview"));
    }
}
