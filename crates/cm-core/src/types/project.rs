//! Project configuration types.
//!
//! A [`ProjectConfiguration`] is the snapshot of one workspace project the
//! generator works from: registry fields (root, source root, tags) joined
//! with the manifest fields (version, dependencies) it needs.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An ordered, duplicate-free set of project tags.
///
/// Projects carry only a handful of tags, so the set lives inline in a
/// [`SmallVec`] and keeps insertion order for stable output.
///
/// # Examples
///
/// ```
/// use cm_core::TagSet;
///
/// let mut tags = TagSet::from_iter(["platform:web"]);
/// assert!(tags.insert("vNext"));
/// assert!(!tags.insert("platform:web"));
/// assert_eq!(tags.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(SmallVec<[String; 4]>);

impl TagSet {
    /// Creates an empty tag set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag, returning `false` if it was already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        if self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_owned());
        true
    }

    /// Returns `true` if the tag is present.
    #[inline]
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Iterates over the tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the number of tags.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no tags.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Self::new();
        for tag in iter {
            tags.insert(tag.as_ref());
        }
        tags
    }
}

/// Strips the workspace scope from a package name.
///
/// Names outside the scope are returned unchanged.
///
/// # Examples
///
/// ```
/// use cm_core::normalize_package_name;
///
/// assert_eq!(normalize_package_name("@fluentui/react-button", "@fluentui/"), "react-button");
/// assert_eq!(normalize_package_name("react", "@fluentui/"), "react");
/// ```
#[must_use]
pub fn normalize_package_name<'a>(package: &'a str, scope: &str) -> &'a str {
    package.strip_prefix(scope).unwrap_or(package)
}

/// A snapshot of one workspace project.
///
/// Built by the registry from the workspace file entry and the project's
/// `package.json`. The generator mutates a copy and hands it back to the
/// registry once per project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfiguration {
    /// Project name, which is also the package name.
    pub name: String,

    /// Project root directory relative to the tree root.
    pub root: Utf8PathBuf,

    /// Source directory, set once the project is migrated.
    pub source_root: Option<Utf8PathBuf>,

    /// Project type (`library`, `application`) when declared.
    pub project_type: Option<String>,

    /// Tags declared in the workspace registry.
    pub tags: TagSet,

    /// Manifest version string.
    pub version: String,

    /// Declared runtime dependencies (name to version range).
    pub dependencies: BTreeMap<String, String>,
}

impl ProjectConfiguration {
    /// Path of the project's `package.json`.
    #[must_use]
    pub fn manifest_path(&self) -> Utf8PathBuf {
        self.root.join("package.json")
    }

    /// The project's `src` directory.
    #[must_use]
    pub fn src_dir(&self) -> Utf8PathBuf {
        self.root.join("src")
    }

    /// Joins a project-relative path onto the root.
    #[inline]
    #[must_use]
    pub fn path(&self, relative: impl AsRef<Utf8Path>) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// The package name without the workspace scope.
    #[inline]
    #[must_use]
    pub fn normalized_name<'a>(&'a self, scope: &str) -> &'a str {
        normalize_package_name(&self.name, scope)
    }
}
