//! Manifest script rewrite.
//!
//! Manifests without a `scripts` block are left alone; otherwise the legacy
//! entries go and the fixed set is written over whatever was there.

use cm_workspace::{ProjectRegistry, Tree};
use tracing::debug;

use crate::context::StepContext;
use crate::error::MigrateError;
use crate::templates::{LEGACY_SCRIPTS, manifest_scripts};

pub(super) fn apply(tree: &mut dyn Tree, ctx: &StepContext<'_>) -> Result<(), MigrateError> {
    let mut manifest = ProjectRegistry::read_manifest(&*tree, ctx.project)?;
    let Some(scripts) = manifest.scripts.as_mut() else {
        debug!(project = %ctx.project.name, "Manifest has no scripts");
        return Ok(());
    };

    for legacy in LEGACY_SCRIPTS {
        scripts.remove(*legacy);
    }
    for (key, command) in manifest_scripts(ctx.normalized_name(), &ctx.offset_from_root()) {
        scripts.insert(key.to_owned(), command);
    }

    ProjectRegistry::write_manifest(tree, ctx.project, &manifest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::steps::MigrationStep;
    use crate::testing::{WorkspaceBuilder, read_value, run_step};
    use serde_json::json;

    #[test]
    fn test_rewrites_scripts() {
        let mut tree = WorkspaceBuilder::new()
            .project_with(
                "@scope/y",
                "packages/y",
                json!({}),
                json!({
                    "version": "9.0.0",
                    "private": true,
                    "scripts": {
                        "build": "just-scripts build",
                        "test": "old",
                        "test:watch": "x",
                        "start-test": "y",
                        "update-snapshots": "z"
                    }
                }),
            )
            .build();

        run_step(&mut tree, "@scope/y", MigrationStep::ManifestScripts).0.unwrap();

        let manifest = read_value(&tree, "packages/y/package.json");
        assert_eq!(manifest["private"], true);
        assert_eq!(
            manifest["scripts"],
            json!({
                "build": "just-scripts build",
                "build:local": "tsc -p . --module esnext --emitDeclarationOnly && node ../../scripts/typescript/normalize-import --output dist/y/src && yarn docs",
                "docs": "api-extractor run --config=config/api-extractor.local.json --local",
                "start": "yarn storybook",
                "storybook": "start-storybook",
                "test": "jest"
            })
        );
    }

    #[test]
    fn test_untouched_manifest_keys_keep_their_position() {
        let mut tree = WorkspaceBuilder::new()
            .project_with(
                "@scope/y",
                "packages/y",
                json!({}),
                json!({
                    "name": "@scope/y",
                    "version": "9.0.0",
                    "private": true,
                    "main": "lib/index.js",
                    "scripts": { "build": "just-scripts build", "test:watch": "x" },
                    "dependencies": { "react": "^17.0.0", "@scope/z": "^9.0.0" }
                }),
            )
            .build();

        run_step(&mut tree, "@scope/y", MigrationStep::ManifestScripts).0.unwrap();

        let manifest = read_value(&tree, "packages/y/package.json");
        let keys = |value: &serde_json::Value| -> Vec<String> {
            value.as_object().unwrap().keys().cloned().collect()
        };
        assert_eq!(
            keys(&manifest),
            ["name", "version", "private", "main", "scripts", "dependencies"]
        );
        assert_eq!(keys(&manifest["dependencies"]), ["react", "@scope/z"]);
        assert_eq!(keys(&manifest["scripts"])[0], "build");
        assert!(manifest["scripts"].get("test:watch").is_none());
    }

    #[test]
    fn test_manifest_without_scripts_is_unchanged() {
        let mut tree = WorkspaceBuilder::new()
            .project("@scope/y", "packages/y", "9.0.0")
            .build();
        let before = tree.clone();

        run_step(&mut tree, "@scope/y", MigrationStep::ManifestScripts).0.unwrap();

        assert_eq!(tree, before);
    }
}
