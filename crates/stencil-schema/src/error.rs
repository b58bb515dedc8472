//! Error and diagnostic system for drawing validation.
//!
//! This module provides the validation error handling system with:
//! - Field-path qualified messages (`elements.3.position.x`)
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message qualified by the JSON field path it
//! refers to. Multiple diagnostics are wrapped in [`ValidateError`] for
//! returning from validation, which is all-or-nothing: a document either
//! validates completely or every problem found is reported together.
//!
//! # Example
//!
//! ```
//! # use stencil_schema::error::Diagnostic;
//! let diag = Diagnostic::error("expected a non-empty string")
//!     .with_path("elements.2.id");
//!
//! assert_eq!(diag.path(), "elements.2.id");
//! ```

mod collector;
mod diagnostic;
mod severity;
mod validate_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use severity::Severity;
pub use validate_error::ValidateError;
