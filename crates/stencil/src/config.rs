//! Configuration types for the Stencil generation pipeline.
//!
//! This module provides the configuration structure that controls screen
//! detection, classification and emission. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Example
//!
//! ```
//! # use stencil::config::GeneratorConfig;
//! // Use documented defaults
//! let config = GeneratorConfig::default();
//! assert_eq!(config.max_elements(), 2000);
//! assert_eq!(config.page_file_name(), "page.tsx");
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Pipeline configuration with documented defaults.
///
/// Every knob the pipeline consults lives here rather than in module-level
/// constants, so callers can tune limits and output conventions per
/// invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Maximum number of elements accepted per document.
    max_elements: usize,

    /// Tolerance in drawing units applied when testing screen containment.
    /// Zero means strict containment.
    containment_tolerance: f64,

    /// Default output root for emitted page files and the manifest.
    out_dir: PathBuf,

    /// File name emitted inside each route directory.
    page_file_name: String,

    /// Fill color that marks a button as the primary action.
    primary_action_color: String,

    /// Id prefix that force-promotes a node to a screen container.
    screen_id_prefix: String,
}

impl GeneratorConfig {
    /// Returns the maximum accepted element count per document.
    pub fn max_elements(&self) -> usize {
        self.max_elements
    }

    /// Returns the containment tolerance in drawing units.
    pub fn containment_tolerance(&self) -> f64 {
        self.containment_tolerance
    }

    /// Returns the default output root.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Returns the per-route page file name.
    pub fn page_file_name(&self) -> &str {
        &self.page_file_name
    }

    /// Returns the primary-action fill color.
    pub fn primary_action_color(&self) -> &str {
        &self.primary_action_color
    }

    /// Returns the reserved screen id prefix.
    pub fn screen_id_prefix(&self) -> &str {
        &self.screen_id_prefix
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_elements: 2000,
            containment_tolerance: 0.0,
            out_dir: PathBuf::from("generated"),
            page_file_name: "page.tsx".to_owned(),
            primary_action_color: "#4caf50".to_owned(),
            screen_id_prefix: "mobile_screen_".to_owned(),
        }
    }
}
