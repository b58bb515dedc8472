//! A single validation diagnostic qualified by a JSON field path.

use std::fmt;

use crate::error::Severity;

/// Path label used when a diagnostic refers to the whole document.
pub(crate) const ROOT_PATH: &str = "(root)";

/// A single validation message tied to the JSON field it refers to.
///
/// The path uses dot notation with array indices inlined, e.g.
/// `elements.3.position.x`. A diagnostic with no explicit path refers to
/// the document root and reports its path as `(root)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    path: String,
    message: String,
}

impl Diagnostic {
    /// Create an error diagnostic at the document root.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            path: ROOT_PATH.to_owned(),
            message: message.into(),
        }
    }

    /// Create a warning diagnostic at the document root.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            path: ROOT_PATH.to_owned(),
            message: message.into(),
        }
    }

    /// Attach the field path this diagnostic refers to (builder style).
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the field path this diagnostic refers to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the message of this diagnostic.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.path, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_is_root() {
        let diag = Diagnostic::error("missing field `elements`");
        assert_eq!(diag.path(), ROOT_PATH);
        assert!(diag.severity().is_error());
    }

    #[test]
    fn test_with_path() {
        let diag = Diagnostic::error("expected a number").with_path("elements.0.position.x");
        assert_eq!(diag.path(), "elements.0.position.x");
    }

    #[test]
    fn test_display_includes_severity_and_path() {
        let diag = Diagnostic::error("expected a number").with_path("elements.0.size.width");
        assert_eq!(
            diag.to_string(),
            "error: elements.0.size.width: expected a number"
        );
    }
}
