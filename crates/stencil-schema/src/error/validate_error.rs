//! The ValidateError type for wrapping validation diagnostics.
//!
//! [`ValidateError`] wraps one or more [`Diagnostic`]s that were collected
//! while checking a drawing document. Validation is all-or-nothing, so a
//! `ValidateError` always means the whole document was rejected.

use std::fmt;

use crate::error::Diagnostic;

/// Error type for drawing validation.
///
/// Wraps the full, ordered list of diagnostics found in one pass.
#[derive(Debug)]
pub struct ValidateError {
    diagnostics: Vec<Diagnostic>,
}

impl ValidateError {
    /// Create a new validation error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{}", first)?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidateError {}

impl From<Diagnostic> for ValidateError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ValidateError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}
