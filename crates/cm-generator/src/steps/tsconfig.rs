//! Project `tsconfig.json` merge.

use cm_core::{FxHashSet, TsConfig, fx_hash_set_with_capacity};
use cm_workspace::{Tree, TreeExt};

use crate::context::StepContext;
use crate::error::MigrateError;
use crate::templates::TSCONFIG_TYPES;

pub(super) fn apply(tree: &mut dyn Tree, ctx: &StepContext<'_>) -> Result<(), MigrateError> {
    let path = ctx.path("tsconfig.json");
    let existing: TsConfig = tree.read_json(&path)?.unwrap_or_default();
    let extends = format!("{}{}", ctx.offset_from_root(), ctx.config().root_tsconfig);
    tree.write_json(&path, &merge(existing, extends))?;
    Ok(())
}

/// Overlays the template on an existing config. Options the template does
/// not set survive untouched.
fn merge(mut config: TsConfig, extends: String) -> TsConfig {
    config.extends = Some(extends);

    let options = &mut config.compiler_options;
    options.target = Some("ES2020".to_owned());
    options.module = Some("CommonJS".to_owned());
    options.out_dir = Some("dist".to_owned());
    options.lib = Some(vec!["ES2020".to_owned(), "dom".to_owned()]);
    options.jsx = Some("react".to_owned());
    options.declaration = Some(true);
    options.experimental_decorators = Some(true);
    options.import_helpers = Some(true);
    options.no_unused_locals = Some(true);
    options.preserve_const_enums = Some(true);
    options.types = Some(union_types(options.types.take().unwrap_or_default()));

    config.include = Some(vec!["src".to_owned()]);
    config
}

/// Existing types followed by the template types, first occurrence wins.
fn union_types(existing: Vec<String>) -> Vec<String> {
    let mut seen: FxHashSet<String> =
        fx_hash_set_with_capacity(existing.len() + TSCONFIG_TYPES.len());
    existing
        .into_iter()
        .chain(TSCONFIG_TYPES.iter().map(|t| (*t).to_owned()))
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::MigrationStep;
    use crate::testing::{WorkspaceBuilder, read_text, read_value, run_step};
    use cm_workspace::TreeError;
    use serde_json::json;

    #[test]
    fn test_union_types_keeps_order_and_dedupes() {
        let merged = union_types(vec!["node".to_owned(), "jest".to_owned(), "node".to_owned()]);
        assert_eq!(
            merged,
            ["node", "jest", "custom-global", "inline-style-expand-shorthand"]
        );
    }

    #[test]
    fn test_merge_over_existing_config() {
        let mut tree = WorkspaceBuilder::new()
            .project("@scope/y", "packages/y", "9.0.0")
            .file(
                "packages/y/tsconfig.json",
                r#"{"compilerOptions": {"strict": true, "target": "ES5", "types": ["node"]}, "files": ["a.ts"]}"#,
            )
            .build();

        let (result, _) = run_step(&mut tree, "@scope/y", MigrationStep::TsConfig);
        result.unwrap();

        let config = read_value(&tree, "packages/y/tsconfig.json");
        assert_eq!(config["extends"], "../../tsconfig.base.json");
        assert_eq!(config["compilerOptions"]["target"], "ES2020");
        assert_eq!(config["compilerOptions"]["strict"], true);
        assert_eq!(
            config["compilerOptions"]["types"],
            json!(["node", "jest", "custom-global", "inline-style-expand-shorthand"])
        );
        assert_eq!(config["include"], json!(["src"]));
        assert_eq!(config["files"], json!(["a.ts"]));
    }

    #[test]
    fn test_commented_config_is_rejected_unchanged() {
        let commented = "{\n  // strict mode\n  \"compilerOptions\": { \"strict\": true, },\n}\n";
        let mut tree = WorkspaceBuilder::new()
            .project("@scope/y", "packages/y", "9.0.0")
            .file("packages/y/tsconfig.json", commented)
            .build();

        let (result, _) = run_step(&mut tree, "@scope/y", MigrationStep::TsConfig);
        match result {
            Err(MigrateError::Tree(err @ TreeError::Json { .. })) => {
                assert_eq!(
                    err.path().map(|path| path.as_str()),
                    Some("packages/y/tsconfig.json")
                );
            }
            other => panic!("expected a JSON error, got {other:?}"),
        }
        assert_eq!(read_text(&tree, "packages/y/tsconfig.json"), commented);
    }

    #[test]
    fn test_missing_config_is_created() {
        let mut tree = WorkspaceBuilder::new()
            .project("@scope/y", "libs/y", "9.0.0")
            .build();

        let (result, _) = run_step(&mut tree, "@scope/y", MigrationStep::TsConfig);
        result.unwrap();

        let config = read_value(&tree, "libs/y/tsconfig.json");
        assert_eq!(config["compilerOptions"]["outDir"], "dist");
        assert_eq!(config["compilerOptions"]["lib"], json!(["ES2020", "dom"]));
        assert_eq!(config["compilerOptions"]["preserveConstEnums"], true);
    }
}
