//! The user-facing log of a migration run.
//!
//! Entries accumulate while the generator runs and are emitted once at the
//! end through `tracing`, after the tree changes have been committed. The log
//! never influences control flow.

use serde::{Deserialize, Serialize};

/// Severity of a [`LogEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Something was skipped.
    Warn,
    /// Something failed.
    Error,
}

/// A single log message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Message severity.
    pub severity: Severity,
    /// Message text.
    pub message: String,
}

/// An append-only, ordered log.
///
/// # Examples
///
/// ```
/// use cm_core::{Severity, UserLog};
///
/// let mut log = UserLog::new();
/// log.info("migrating @fluentui/react-button");
/// log.warn("no stories found");
/// assert_eq!(log.count(Severity::Warn), 1);
/// assert_eq!(log.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLog {
    entries: Vec<LogEntry>,
}

impl UserLog {
    /// Creates an empty log.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.entries.push(LogEntry {
            severity,
            message: message.into(),
        });
    }

    /// Appends an informational entry.
    #[inline]
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    /// Appends a warning.
    #[inline]
    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(Severity::Warn, message);
    }

    /// Appends an error.
    #[inline]
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    /// All entries in insertion order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.severity == severity)
            .count()
    }

    /// Total number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was logged.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Emits every entry through `tracing`, consuming the log.
    ///
    /// Returns the number of entries emitted.
    pub fn flush(self) -> usize {
        let count = self.entries.len();
        for entry in self.entries {
            match entry.severity {
                Severity::Info => tracing::info!("{}", entry.message),
                Severity::Warn => tracing::warn!("{}", entry.message),
                Severity::Error => tracing::error!("{}", entry.message),
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let mut log = UserLog::new();
        log.warn("first");
        log.info("second");
        log.error("third");

        let messages: Vec<_> = log.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(log.entries()[2].severity, Severity::Error);
    }

    #[test]
    fn test_flush_returns_count() {
        let mut log = UserLog::new();
        log.info("a");
        log.warn("b");
        assert_eq!(log.flush(), 2);
        assert_eq!(UserLog::new().flush(), 0);
    }
}
