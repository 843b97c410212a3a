//! The project tree abstraction.
//!
//! A [`Tree`] maps repository-relative paths to file contents. Every write
//! replaces a whole file; directories exist only implicitly through the files
//! beneath them. [`TreeExt`] layers text and JSON helpers on top, so JSON
//! always round-trips through the same pretty serializer.
//!
//! JSON is strict: configs with comments or trailing commas fail to parse
//! with [`TreeError::Json`] naming the file.
//!
//! Rewriting a JSON file keeps the key order it already had. Keys present in
//! both versions stay where they were, new keys go last and dropped keys
//! disappear; this applies at every object depth.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::TreeError;

/// A mutable file tree.
///
/// Implemented by [`MemoryTree`](crate::MemoryTree) for tests and embedding,
/// and by [`FsTree`](crate::FsTree), which stages changes over a directory on
/// disk.
pub trait Tree {
    /// Reads a file, returning `None` if it does not exist.
    fn read(&self, path: &Utf8Path) -> Result<Option<Vec<u8>>, TreeError>;

    /// Writes a file, replacing any previous content.
    fn write(&mut self, path: &Utf8Path, content: Vec<u8>);

    /// Deletes a file, or every file under a directory.
    fn delete(&mut self, path: &Utf8Path) -> Result<(), TreeError>;

    /// Returns `true` if `path` is a file or a directory holding files.
    fn exists(&self, path: &Utf8Path) -> bool;

    /// Lists every file under `dir` recursively, sorted.
    fn list_files(&self, dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, TreeError>;
}

/// Text and JSON helpers available on every [`Tree`].
pub trait TreeExt: Tree {
    /// Reads a UTF-8 text file.
    fn read_to_string(&self, path: &Utf8Path) -> Result<Option<String>, TreeError> {
        self.read(path)?
            .map(|bytes| String::from_utf8(bytes).map_err(|_| TreeError::NotUtf8(path.to_owned())))
            .transpose()
    }

    /// Reads and deserializes a JSON file.
    fn read_json<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<Option<T>, TreeError> {
        self.read(path)?
            .map(|bytes| serde_json::from_slice(&bytes).map_err(|e| TreeError::json(path, e)))
            .transpose()
    }

    /// Writes a text file.
    fn write_str(&mut self, path: &Utf8Path, content: &str) {
        self.write(path, content.as_bytes().to_vec());
    }

    /// Serializes `value` as pretty JSON with a trailing newline.
    ///
    /// If the file already holds valid JSON, its key order is kept.
    fn write_json<T: Serialize + ?Sized>(
        &mut self,
        path: &Utf8Path,
        value: &T,
    ) -> Result<(), TreeError> {
        let mut updated = serde_json::to_value(value).map_err(|e| TreeError::json(path, e))?;
        if let Some(existing) = self
            .read(path)?
            .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).ok())
        {
            updated = merge_key_order(existing, updated);
        }

        let mut content =
            serde_json::to_string_pretty(&updated).map_err(|e| TreeError::json(path, e))?;
        content.push('\n');
        self.write(path, content.into_bytes());
        Ok(())
    }

    /// Lists files under `dir` whose path satisfies `predicate`.
    fn list_files_matching<F>(
        &self,
        dir: &Utf8Path,
        predicate: F,
    ) -> Result<Vec<Utf8PathBuf>, TreeError>
    where
        F: Fn(&Utf8Path) -> bool,
    {
        let mut files = self.list_files(dir)?;
        files.retain(|path| predicate(path));
        Ok(files)
    }
}

impl<T: Tree + ?Sized> TreeExt for T {}

/// Returns `updated` with object keys reordered to follow `existing`.
///
/// Only order changes: every key and value comes from `updated`.
fn merge_key_order(existing: Value, updated: Value) -> Value {
    match (existing, updated) {
        (Value::Object(existing), Value::Object(mut updated)) => {
            let mut merged = Map::with_capacity(updated.len());
            for (key, old) in existing {
                if let Some(new) = updated.get_mut(&key) {
                    let new = std::mem::take(new);
                    merged.insert(key, merge_key_order(old, new));
                }
            }
            for (key, new) in updated {
                if !merged.contains_key(&key) {
                    merged.insert(key, new);
                }
            }
            Value::Object(merged)
        }
        (_, updated) => updated,
    }
}
