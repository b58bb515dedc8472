//! Schema validation, normalization and fingerprinting for Stencil drawings.
//!
//! This crate is the front of the generation pipeline. It turns an untrusted
//! parsed-JSON value into a validated [`Document`], sanitizes embedded text,
//! and derives the content fingerprint used for cross-run provenance:
//!
//! ```text
//! serde_json::Value
//!     ↓ validate       (all-or-nothing, path-qualified diagnostics)
//! Document
//!     ↓ normalize      (markup stripping, idempotent)
//! Document
//!     ↓ fingerprint    (canonical serialization → SHA-256)
//! content hash
//! ```
//!
//! All three stages are pure; nothing here touches the filesystem.
//!
//! [`Document`]: stencil_core::model::Document

pub mod error;

mod fingerprint;
mod normalize;
mod validate;

pub use fingerprint::fingerprint;
pub use normalize::normalize;
pub use validate::validate;
