//! Workspace fixtures shared by the generator tests.

use camino::Utf8Path;
use cm_core::{MigrationConfig, UserLog};
use cm_workspace::{MemoryTree, Tree, TreeExt};
use serde_json::{Map, Value, json};

use crate::context::{MigrationContext, StepContext};
use crate::error::MigrateError;
use crate::steps::MigrationStep;

/// Configuration using the `@scope/` package scope and an `examples`
/// project, matching the fixtures below.
pub(crate) fn test_config() -> MigrationConfig {
    MigrationConfig {
        scope: "@scope/".to_owned(),
        examples_project: "examples".to_owned(),
        snapshot_serializer_deps: vec!["@scope/make-styles".to_owned()],
        snapshot_serializer: "@scope/jest-serializer-make-styles".to_owned(),
        ..MigrationConfig::default()
    }
}

/// Builds a [`MemoryTree`] with a `workspace.json` and project manifests.
#[derive(Debug, Default)]
pub(crate) struct WorkspaceBuilder {
    tree: MemoryTree,
    projects: Map<String, Value>,
}

impl WorkspaceBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a project whose manifest only has a name and version.
    pub(crate) fn project(self, name: &str, root: &str, version: &str) -> Self {
        self.project_with(name, root, json!({}), json!({ "version": version }))
    }

    /// Registers a project with extra registry fields and a custom manifest.
    pub(crate) fn project_with(
        mut self,
        name: &str,
        root: &str,
        entry: Value,
        manifest: Value,
    ) -> Self {
        let mut record = Map::new();
        record.insert("root".to_owned(), json!(root));
        if let Value::Object(fields) = entry {
            record.extend(fields);
        }

        let mut manifest = match manifest {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        manifest
            .entry("name")
            .or_insert_with(|| json!(name));

        self.tree
            .write_json(&Utf8Path::new(root).join("package.json"), &manifest)
            .unwrap();
        self.projects.insert(name.to_owned(), Value::Object(record));
        self
    }

    /// Adds an arbitrary file.
    pub(crate) fn file(mut self, path: &str, content: &str) -> Self {
        self.tree.write_str(Utf8Path::new(path), content);
        self
    }

    pub(crate) fn build(mut self) -> MemoryTree {
        let workspace = json!({ "version": 2, "projects": self.projects });
        self.tree
            .write_json(Utf8Path::new("workspace.json"), &workspace)
            .unwrap();
        self.tree
    }
}

/// Runs a single step for `name` with [`test_config`], returning the step
/// result and the messages it logged.
pub(crate) fn run_step(
    tree: &mut dyn Tree,
    name: &str,
    step: MigrationStep,
) -> (Result<(), MigrateError>, UserLog) {
    let config = test_config();
    let ctx = MigrationContext::new(&config);
    let project = ctx.registry.read_project(&*tree, name).unwrap();
    let mut log = UserLog::new();
    let result = step.apply(tree, &StepContext::new(&ctx, &project), &mut log);
    (result, log)
}

/// Reads a JSON file from the tree, panicking if it is absent.
pub(crate) fn read_value(tree: &MemoryTree, path: &str) -> Value {
    tree.read_json(Utf8Path::new(path)).unwrap().unwrap()
}

/// Reads a text file from the tree, panicking if it is absent.
pub(crate) fn read_text(tree: &MemoryTree, path: &str) -> String {
    tree.read_to_string(Utf8Path::new(path)).unwrap().unwrap()
}
