//! Story relocation.
//!
//! Stories live under `<examples>/src/<normalized-name>/` before migration
//! and next to the component sources afterwards. Once moved, the examples
//! directory is deleted and the examples project drops its dependency on the
//! package.

use camino::Utf8Path;
use cm_core::UserLog;
use cm_workspace::{ProjectRegistry, RegistryError, Tree, TreeExt};
use tracing::debug;

use crate::context::StepContext;
use crate::error::MigrateError;
use crate::templates::story_default_export;

const STORY_MARKER: &str = ".stories.";

pub(super) fn apply(
    tree: &mut dyn Tree,
    ctx: &StepContext<'_>,
    log: &mut UserLog,
) -> Result<(), MigrateError> {
    let config = ctx.config();
    let project = ctx.project;

    let examples = match ctx.run.registry.read_project(&*tree, &config.examples_project) {
        Ok(examples) => examples,
        Err(RegistryError::ProjectNotFound(name)) => {
            log.warn(format!(
                "Cannot find examples project {name}. Skipping stories migration..."
            ));
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let source_dir = examples.src_dir().join(ctx.normalized_name());
    let stories = tree.list_files_matching(&source_dir, is_story_file)?;
    if stories.is_empty() {
        log.warn(format!(
            "No stories found within {source_dir} for {}. Skipping stories migration...",
            project.name
        ));
        return Ok(());
    }

    let destination_dir = project.src_dir();
    for story in &stories {
        let Some(file_name) = story.file_name() else {
            return Err(MigrateError::StoryRead(story.clone()));
        };
        let content = tree
            .read_to_string(story)?
            .ok_or_else(|| MigrateError::StoryRead(story.clone()))?;

        let destination = destination_dir.join(file_name);
        tree.write_str(
            &destination,
            &rewrite_story(&content, &project.name, component_name(file_name)),
        );
        debug!(from = %story, to = %destination, "Relocated story");
    }

    tree.delete(&source_dir)?;

    let mut manifest = ProjectRegistry::read_manifest(&*tree, &examples)?;
    if manifest.remove_dependency(&project.name) {
        ProjectRegistry::write_manifest(tree, &examples, &manifest)?;
    }

    log.info(format!(
        "Moved {} stories from {source_dir} to {destination_dir}",
        stories.len()
    ));
    Ok(())
}

/// Returns `true` for story files (`Button.stories.tsx`, `Button.stories.mdx`).
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use cm_generator::steps::is_story_file;
///
/// assert!(is_story_file(Utf8Path::new("examples/src/button/Button.stories.tsx")));
/// assert!(!is_story_file(Utf8Path::new("examples/src/button/index.ts")));
/// ```
#[must_use]
pub fn is_story_file(path: &Utf8Path) -> bool {
    path.file_name().is_some_and(|name| name.contains(STORY_MARKER))
}

/// The component a story file documents: the file name up to `.stories.`.
///
/// # Examples
///
/// ```
/// use cm_generator::steps::component_name;
///
/// assert_eq!(component_name("Button.stories.tsx"), "Button");
/// assert_eq!(component_name("README.md"), "README.md");
/// ```
#[must_use]
pub fn component_name(file_name: &str) -> &str {
    file_name
        .find(STORY_MARKER)
        .map_or(file_name, |end| &file_name[..end])
}

/// Points package imports at the package itself and appends the default
/// export block.
fn rewrite_story(content: &str, package: &str, component: &str) -> String {
    let mut out = content.replace(package, "./index");
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&story_default_export(component));
    out
}
