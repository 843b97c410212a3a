//! Interactive prompt capability.
//!
//! The validator asks for a project name at most once per run, and only when
//! the caller injected a [`Prompt`]. Non-interactive callers pass `None`, or
//! a closure returning a fixed answer.

use crate::error::MigrateError;

/// Asks the operator a question and blocks until answered.
pub trait Prompt {
    /// Returns the operator's answer to `question`.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::Prompt`] if no answer can be obtained.
    fn ask(&mut self, question: &str) -> Result<String, MigrateError>;
}

impl<F> Prompt for F
where
    F: FnMut(&str) -> Result<String, MigrateError>,
{
    fn ask(&mut self, question: &str) -> Result<String, MigrateError> {
        self(question)
    }
}
