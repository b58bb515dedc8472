//! Stencil Core Types and Definitions
//!
//! This crate provides the foundational types and definitions for the Stencil
//! page generator. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Model**: The validated drawing model ([`model`] module)
//! - **Component**: Classification result types ([`component`] module)

pub mod color;
pub mod component;
pub mod geometry;
pub mod model;
