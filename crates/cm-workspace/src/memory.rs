//! In-memory [`Tree`] implementation.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::TreeError;
use crate::tree::Tree;

/// A [`Tree`] held entirely in memory.
///
/// Comparable and cloneable, which makes before/after assertions on whole
/// trees straightforward.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use cm_workspace::{MemoryTree, Tree};
///
/// let mut tree = MemoryTree::new().with_file("packages/a/package.json", r#"{"name": "a"}"#);
/// assert!(tree.exists(Utf8Path::new("packages/a")));
///
/// tree.delete(Utf8Path::new("packages/a")).unwrap();
/// assert!(tree.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTree {
    files: BTreeMap<Utf8PathBuf, Vec<u8>>,
}

impl MemoryTree {
    /// Creates an empty tree.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, builder style.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<Utf8PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Number of files in the tree.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if the tree holds no files.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Tree for MemoryTree {
    fn read(&self, path: &Utf8Path) -> Result<Option<Vec<u8>>, TreeError> {
        Ok(self.files.get(path).cloned())
    }

    fn write(&mut self, path: &Utf8Path, content: Vec<u8>) {
        self.files.insert(path.to_owned(), content);
    }

    fn delete(&mut self, path: &Utf8Path) -> Result<(), TreeError> {
        self.files.retain(|file, _| !file.starts_with(path));
        Ok(())
    }

    fn exists(&self, path: &Utf8Path) -> bool {
        self.files.keys().any(|file| file.starts_with(path))
    }

    fn list_files(&self, dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, TreeError> {
        Ok(self
            .files
            .keys()
            .filter(|file| file.starts_with(dir))
            .cloned()
            .collect())
    }
}
