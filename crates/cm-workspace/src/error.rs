//! Error types for the cm-workspace crate.
//!
//! [`TreeError`] covers file access through a [`Tree`](crate::Tree);
//! [`RegistryError`] covers lookups in the workspace project registry.

use camino::Utf8PathBuf;

/// Errors that can occur while reading or writing the project tree.
///
/// # Examples
///
/// ```
/// use cm_workspace::TreeError;
///
/// fn describe(err: &TreeError) -> String {
///     match err.path() {
///         Some(path) => format!("{path}: {err}"),
///         None => err.to_string(),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Failed to walk a directory.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    Read {
        /// The path of the file that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write or delete a file while committing.
    #[error("failed to write file {path}: {source}")]
    Write {
        /// The path of the file that couldn't be written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file expected to hold JSON could not be parsed or serialized.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// The offending file.
        path: Utf8PathBuf,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A text file is not valid UTF-8.
    #[error("file is not valid UTF-8: {0}")]
    NotUtf8(Utf8PathBuf),

    /// The tree root does not exist or is not a directory.
    #[error("invalid tree root: {0}")]
    InvalidRoot(Utf8PathBuf),

    /// A path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", _0.display())]
    NonUtf8Path(std::path::PathBuf),
}

impl TreeError {
    /// Creates a new [`TreeError::Read`] error.
    #[inline]
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`TreeError::Write`] error.
    #[inline]
    pub fn write(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`TreeError::Json`] error.
    #[inline]
    pub fn json(path: impl Into<Utf8PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::Json { path, .. }
            | Self::NotUtf8(path)
            | Self::InvalidRoot(path) => Some(path),
            Self::Walk(_) | Self::NonUtf8Path(_) => None,
        }
    }
}

/// Errors that can occur while accessing the project registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The workspace registry file is absent from the tree.
    #[error("workspace registry not found at {0}")]
    MissingWorkspace(Utf8PathBuf),

    /// No project with this name is registered.
    #[error("cannot find project '{0}' in the workspace")]
    ProjectNotFound(String),

    /// Underlying tree access failed.
    #[error(transparent)]
    Tree(#[from] TreeError),
}
