//! Error types for Stencil operations.
//!
//! This module provides the main error type [`StencilError`] which wraps
//! the error conditions that can occur during analysis and emission.

use std::io;

use thiserror::Error;

use stencil_schema::error::ValidateError;

/// The main error type for Stencil operations.
///
/// Validation carries structured, path-qualified diagnostics inside the
/// `Validate` variant; everything downstream of validation reports through
/// the remaining variants. Limit and validation errors are terminal for a
/// single run and never retried by the core.
#[derive(Debug, Error)]
pub enum StencilError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Validate(#[from] ValidateError),

    #[error("element count exceeds limit ({count} > {max})")]
    Limit { count: usize, max: usize },

    #[error("Emit error: {0}")]
    Emit(String),
}
