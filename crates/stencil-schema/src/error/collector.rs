//! Collector for accumulating diagnostics during validation.
//!
//! The [`DiagnosticCollector`] lets the validator report every problem in a
//! document instead of failing on the first error encountered.

use crate::error::{Diagnostic, ValidateError};

/// A collector for accumulating diagnostics during validation.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    ///
    /// The diagnostic is added to the collection and if it's an error,
    /// the collector is marked as having errors.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return a result.
    ///
    /// - If there are errors, returns `Err(ValidateError)` with all diagnostics.
    /// - If there are no errors, returns `Ok(())`.
    ///
    /// Note: Warnings are currently discarded in the success case.
    pub fn finish(self) -> Result<(), ValidateError> {
        if self.has_errors {
            Err(ValidateError::new(self.diagnostics))
        } else {
            Ok(())
        }
    }
}
