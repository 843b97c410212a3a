//! Disk-backed [`Tree`] that stages changes in memory.
//!
//! [`FsTree`] reads through to a workspace directory on disk but keeps every
//! write and delete in a staging map until [`FsTree::commit`] is called. A
//! failed run therefore leaves the workspace untouched, and a dry run can
//! list exactly what would change via [`FsTree::changes`].
//!
//! Directory listing uses the `ignore` crate's walker with gitignore rules
//! disabled (generated configs are often ignored) and a fixed set of
//! directories that never hold project sources skipped outright.

use std::collections::{BTreeMap, BTreeSet};
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use ignore::WalkBuilder;
use tracing::debug;

use crate::error::TreeError;
use crate::tree::Tree;

/// Directories never descended into when listing files.
const SKIP_DIRECTORIES: &[&str] = &["node_modules", ".git", "dist", "lib", "lib-commonjs", "temp"];

/// A staged change to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Staged {
    Write(Vec<u8>),
    Delete,
}

/// Kind of a pending change, as reported by [`FsTree::changes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// The file does not exist on disk yet.
    Create,
    /// The file exists on disk and will be replaced.
    Update,
    /// The file will be removed.
    Delete,
}

impl ChangeKind {
    /// Returns an upper-case label for change listings.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

/// A pending change to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Path relative to the tree root.
    pub path: Utf8PathBuf,
    /// What will happen to the file.
    pub kind: ChangeKind,
}

/// A [`Tree`] over a directory on disk with in-memory staging.
///
/// # Examples
///
/// ```ignore
/// use cm_workspace::{FsTree, TreeExt};
/// use camino::Utf8Path;
///
/// let mut tree = FsTree::new(Utf8Path::new("."))?;
/// tree.write_str(Utf8Path::new("packages/a/.npmignore"), "src/\n");
///
/// for change in tree.changes() {
///     println!("{} {}", change.kind.label(), change.path);
/// }
/// tree.commit()?;
/// ```
#[derive(Debug)]
pub struct FsTree {
    /// The workspace directory.
    root: Utf8PathBuf,
    /// Staged changes keyed by relative path.
    staged: BTreeMap<Utf8PathBuf, Staged>,
}

impl FsTree {
    /// Creates a tree rooted at an existing directory.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidRoot`] if `root` is not a directory.
    pub fn new(root: &Utf8Path) -> Result<Self, TreeError> {
        if !root.is_dir() {
            return Err(TreeError::InvalidRoot(root.to_owned()));
        }

        Ok(Self {
            root: root.to_owned(),
            staged: BTreeMap::new(),
        })
    }

    /// Returns the workspace directory.
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns `true` if nothing is staged.
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty()
    }

    /// Lists the staged changes in path order.
    #[must_use]
    pub fn changes(&self) -> Vec<FileChange> {
        self.staged
            .iter()
            .map(|(path, staged)| FileChange {
                path: path.clone(),
                kind: match staged {
                    Staged::Delete => ChangeKind::Delete,
                    Staged::Write(_) if self.disk_path(path).is_file() => ChangeKind::Update,
                    Staged::Write(_) => ChangeKind::Create,
                },
            })
            .collect()
    }

    /// Applies every staged change to disk.
    ///
    /// Directories left empty by deletions are removed as well.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Write`] on the first I/O failure; changes applied
    /// before it stay on disk.
    pub fn commit(self) -> Result<Vec<FileChange>, TreeError> {
        let changes = self.changes();

        for (path, staged) in &self.staged {
            let target = self.disk_path(path);
            match staged {
                Staged::Write(content) => {
                    if let Some(parent) = target.parent() {
                        std::fs::create_dir_all(parent.as_std_path())
                            .map_err(|e| TreeError::write(path, e))?;
                    }
                    std::fs::write(target.as_std_path(), content)
                        .map_err(|e| TreeError::write(path, e))?;
                }
                Staged::Delete => {
                    match std::fs::remove_file(target.as_std_path()) {
                        Ok(()) => {}
                        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                        Err(e) => return Err(TreeError::write(path, e)),
                    }
                    self.prune_empty_parents(&target);
                }
            }
        }

        debug!(root = %self.root, changes = changes.len(), "Committed tree changes");
        Ok(changes)
    }

    fn disk_path(&self, path: &Utf8Path) -> Utf8PathBuf {
        self.root.join(path)
    }

    /// Removes empty directories from `file`'s parent up to the root.
    fn prune_empty_parents(&self, file: &Utf8Path) {
        let mut current = file.parent();
        while let Some(dir) = current {
            if dir == self.root.as_path() || !dir.starts_with(&self.root) {
                break;
            }
            // Fails on non-empty directories, which ends the walk.
            if std::fs::remove_dir(dir.as_std_path()).is_err() {
                break;
            }
            current = dir.parent();
        }
    }

    /// Collects files under `dir` as they exist on disk.
    fn disk_files(&self, dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, TreeError> {
        let start = self.disk_path(dir);
        if start.is_file() {
            return Ok(vec![dir.to_owned()]);
        }
        if !start.is_dir() {
            return Ok(Vec::new());
        }

        let walker = WalkBuilder::new(start.as_std_path())
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !SKIP_DIRECTORIES.contains(&name))
            })
            .build();

        let mut files = Vec::new();
        for result in walker {
            let entry = result?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let utf8_path =
                Utf8Path::from_path(path).ok_or_else(|| TreeError::NonUtf8Path(path.to_owned()))?;
            if let Ok(relative) = utf8_path.strip_prefix(&self.root) {
                files.push(relative.to_owned());
            }
        }

        Ok(files)
    }
}

impl Tree for FsTree {
    fn read(&self, path: &Utf8Path) -> Result<Option<Vec<u8>>, TreeError> {
        match self.staged.get(path) {
            Some(Staged::Write(content)) => return Ok(Some(content.clone())),
            Some(Staged::Delete) => return Ok(None),
            None => {}
        }

        let target = self.disk_path(path);
        if !target.is_file() {
            return Ok(None);
        }
        match std::fs::read(target.as_std_path()) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TreeError::read(path, e)),
        }
    }

    fn write(&mut self, path: &Utf8Path, content: Vec<u8>) {
        self.staged.insert(path.to_owned(), Staged::Write(content));
    }

    fn delete(&mut self, path: &Utf8Path) -> Result<(), TreeError> {
        for file in self.list_files(path)? {
            if self.disk_path(&file).is_file() {
                self.staged.insert(file, Staged::Delete);
            } else {
                self.staged.remove(&file);
            }
        }
        Ok(())
    }

    fn exists(&self, path: &Utf8Path) -> bool {
        self.list_files(path).is_ok_and(|files| !files.is_empty())
    }

    fn list_files(&self, dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, TreeError> {
        let mut files: BTreeSet<Utf8PathBuf> = self.disk_files(dir)?.into_iter().collect();

        for (path, staged) in &self.staged {
            if !path.starts_with(dir) {
                continue;
            }
            match staged {
                Staged::Write(_) => {
                    files.insert(path.clone());
                }
                Staged::Delete => {
                    files.remove(path);
                }
            }
        }

        Ok(files.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeExt;

    fn workspace() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(root.join("packages/a/src").as_std_path()).unwrap();
        std::fs::create_dir_all(root.join("packages/a/node_modules/x").as_std_path()).unwrap();
        std::fs::write(root.join("packages/a/package.json").as_std_path(), "{}").unwrap();
        std::fs::write(root.join("packages/a/src/index.ts").as_std_path(), "export {};").unwrap();
        std::fs::write(root.join("packages/a/node_modules/x/index.js").as_std_path(), "").unwrap();
        (dir, root)
    }

    #[test]
    fn test_new_rejects_missing_root() {
        let err = FsTree::new(Utf8Path::new("/definitely/not/a/dir")).unwrap_err();
        assert!(matches!(err, TreeError::InvalidRoot(_)));
    }

    #[test]
    fn test_reads_through_and_skips_node_modules() {
        let (_guard, root) = workspace();
        let tree = FsTree::new(&root).unwrap();

        let files = tree.list_files(Utf8Path::new("packages/a")).unwrap();
        assert_eq!(
            files,
            vec![
                Utf8PathBuf::from("packages/a/package.json"),
                Utf8PathBuf::from("packages/a/src/index.ts"),
            ]
        );
        assert_eq!(
            tree.read_to_string(Utf8Path::new("packages/a/src/index.ts")).unwrap().as_deref(),
            Some("export {};")
        );
    }

    #[test]
    fn test_changes_are_staged_until_commit() {
        let (_guard, root) = workspace();
        let mut tree = FsTree::new(&root).unwrap();

        tree.write_str(Utf8Path::new("packages/a/.npmignore"), "src/\n");
        tree.write_str(Utf8Path::new("packages/a/package.json"), "{\"name\":\"a\"}");
        tree.delete(Utf8Path::new("packages/a/src")).unwrap();

        assert!(!root.join("packages/a/.npmignore").exists());
        assert!(!tree.exists(Utf8Path::new("packages/a/src")));

        let kinds: Vec<_> = tree.changes().into_iter().map(|c| (c.path, c.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (Utf8PathBuf::from("packages/a/.npmignore"), ChangeKind::Create),
                (Utf8PathBuf::from("packages/a/package.json"), ChangeKind::Update),
                (Utf8PathBuf::from("packages/a/src/index.ts"), ChangeKind::Delete),
            ]
        );

        tree.commit().unwrap();
        assert!(root.join("packages/a/.npmignore").is_file());
        assert!(!root.join("packages/a/src").exists());
        assert_eq!(
            std::fs::read_to_string(root.join("packages/a/package.json").as_std_path()).unwrap(),
            "{\"name\":\"a\"}"
        );
    }

    #[test]
    fn test_deleting_staged_file_unstages_it() {
        let (_guard, root) = workspace();
        let mut tree = FsTree::new(&root).unwrap();

        tree.write_str(Utf8Path::new("packages/b/new.txt"), "x");
        tree.delete(Utf8Path::new("packages/b")).unwrap();
        assert!(tree.is_clean());
    }
}
