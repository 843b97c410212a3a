//! The migration request.
//!
//! A [`MigrationSchema`] is the raw request as supplied by the operator; the
//! validator resolves it into exactly one [`MigrationMode`].

use serde::{Deserialize, Serialize};

/// A raw migration request.
///
/// At most one of `name`, `all` and `stats` may be set. An empty name counts
/// as unset.
///
/// # Examples
///
/// ```
/// use cm_core::MigrationSchema;
///
/// assert!(MigrationSchema::default().is_unset());
/// assert_eq!(MigrationSchema::single("@fluentui/react-button").name(), Some("@fluentui/react-button"));
/// assert_eq!(MigrationSchema::single("").name(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationSchema {
    /// Project to migrate.
    pub name: Option<String>,

    /// Migrate every converged project.
    pub all: bool,

    /// Report migration coverage only.
    pub stats: bool,
}

impl MigrationSchema {
    /// A request to migrate one project.
    #[must_use]
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A request to migrate every converged project.
    #[must_use]
    pub fn all() -> Self {
        Self {
            all: true,
            ..Self::default()
        }
    }

    /// A request for the coverage report.
    #[must_use]
    pub fn stats() -> Self {
        Self {
            stats: true,
            ..Self::default()
        }
    }

    /// The requested project name, ignoring empty strings.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Returns `true` if no mode is selected.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.name().is_none() && !self.all && !self.stats
    }
}

/// The operating mode a validated request resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationMode {
    /// Migrate the named project.
    Single(String),
    /// Migrate every converged project.
    All,
    /// Report coverage without touching the tree.
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(MigrationSchema::all().all);
        assert!(MigrationSchema::stats().stats);
        assert!(!MigrationSchema::single("a").is_unset());
        assert!(MigrationSchema::single("").is_unset());
    }

    #[test]
    fn test_deserialize_partial() {
        let schema: MigrationSchema = serde_json::from_str(r#"{"all": true}"#).unwrap();
        assert_eq!(schema, MigrationSchema::all());
    }
}
