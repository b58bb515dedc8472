//! Stencil - page generation from declarative drawing documents.
//!
//! This crate drives the full pipeline: validate a raw drawing JSON
//! document, normalize and fingerprint it, detect screen containers,
//! assign and classify their elements, and emit one page source file per
//! screen plus a generation manifest.

pub mod config;

mod classify;
mod emit;
mod error;
mod screens;

pub use stencil_core::{component, geometry, model};
pub use stencil_schema::error::{Diagnostic, Severity, ValidateError};

pub use emit::{EmittedFile, GenerationManifest, ManifestEntry, MANIFEST_FILE_NAME};
pub use error::StencilError;

use std::path::PathBuf;

use log::{debug, info};

use stencil_core::component::{ClassifiedElement, ScreenSpec};

use config::GeneratorConfig;

/// A screen with its elements already classified.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedScreen {
    pub screen: ScreenSpec,
    pub classified: Vec<ClassifiedElement>,
}

/// Result of analyzing a drawing document, ready for generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Content hash of the canonical document.
    pub fingerprint: String,

    /// Detected screens in document order, elements classified.
    pub screens: Vec<AnalyzedScreen>,

    /// Non-fatal findings, e.g. elements outside every screen.
    pub warnings: Vec<String>,

    /// Total element count of the document, screens included.
    pub element_count: usize,

    /// Elements no screen encloses.
    pub unassigned_count: usize,
}

/// How a generation run touched the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Nothing was written; `files` holds previews.
    DryRun,

    /// Pages and manifest were written to the output root.
    Write,
}

/// Options for a single generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Plan and render without touching the filesystem.
    pub dry_run: bool,

    /// After writing, remove output child directories no route claims.
    pub prune: bool,

    /// Override the configured output root.
    pub out_dir: Option<PathBuf>,
}

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    pub mode: GenerationMode,

    /// Content hash of the source this run was generated from.
    pub fingerprint: String,

    /// Source hash found in the previous manifest, if any.
    pub previous_hash: Option<String>,

    /// Whether the source differs from the previous run.
    pub hash_changed: bool,

    /// Manifest describing this run (written to disk unless dry-run).
    pub manifest: GenerationManifest,

    /// Rendered pages; previews in dry-run, written files otherwise.
    pub files: Vec<EmittedFile>,

    /// Warnings carried over from analysis.
    pub warnings: Vec<String>,
}

/// Pipeline entry point for analyzing drawings and generating pages.
///
/// The generator is stateless across calls; each [`analyze`] /
/// [`generate`] pair stands alone. Concurrent writers into the same
/// output root are not coordinated.
///
/// # Examples
///
/// ```rust
/// use stencil::{config::GeneratorConfig, PageGenerator};
///
/// let source = serde_json::json!({
///     "fileType": "stencil-drawing",
///     "elements": [],
/// });
///
/// let generator = PageGenerator::new(GeneratorConfig::default());
/// let analysis = generator.analyze(&source).expect("valid document");
///
/// assert!(analysis.screens.is_empty());
/// ```
///
/// [`analyze`]: PageGenerator::analyze
/// [`generate`]: PageGenerator::generate
#[derive(Debug, Default)]
pub struct PageGenerator {
    config: GeneratorConfig,
}

impl PageGenerator {
    /// Create a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Validate, normalize and classify a raw drawing document.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::Validate`] when the document fails schema
    /// validation and [`StencilError::Limit`] when it exceeds the
    /// configured element ceiling.
    pub fn analyze(&self, source: &serde_json::Value) -> Result<Analysis, StencilError> {
        info!("analyzing drawing document");

        let document = stencil_schema::validate(source)?;

        let element_count = document.elements.len();
        let max = self.config.max_elements();
        if element_count > max {
            return Err(StencilError::Limit {
                count: element_count,
                max,
            });
        }

        let document = stencil_schema::normalize(document);
        let fingerprint = stencil_schema::fingerprint(&document);
        debug!(hash = fingerprint.as_str(); "document fingerprinted");

        let screen_nodes = screens::extract_screens(&document.elements, &self.config);

        let mut warnings = Vec::new();
        if screen_nodes.is_empty() {
            warnings.push("no screen candidates detected".to_owned());
        }

        let mut assignment = screens::assign_elements(&screen_nodes, &document.elements, &self.config);
        let unassigned_count = assignment.unassigned.len();
        if unassigned_count > 0 {
            warnings.push(format!(
                "{unassigned_count} elements not assigned to any screen"
            ));
        }

        let analyzed: Vec<AnalyzedScreen> = screen_nodes
            .iter()
            .map(|node| {
                let elements = assignment
                    .by_screen
                    .shift_remove(node.id.as_str())
                    .unwrap_or_default();
                let classified = elements
                    .iter()
                    .map(|element| classify::classify_node(element, &self.config))
                    .collect();
                AnalyzedScreen {
                    screen: ScreenSpec {
                        id: node.id.clone(),
                        route: screens::infer_route(node, &self.config),
                        frame: node.bounds(),
                        elements,
                    },
                    classified,
                }
            })
            .collect();

        info!(
            screens = analyzed.len(),
            elements = element_count,
            unassigned = unassigned_count;
            "analysis complete"
        );

        Ok(Analysis {
            fingerprint,
            screens: analyzed,
            warnings,
            element_count,
            unassigned_count,
        })
    }

    /// Generate page files and a manifest from an analysis.
    ///
    /// In dry-run mode nothing is written and the returned files are
    /// previews; otherwise every page file is written before the
    /// manifest, and a failed write leaves any existing manifest intact.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::Io`] on filesystem failures outside
    /// pruning and [`StencilError::Emit`] when the manifest cannot be
    /// serialized.
    pub fn generate(
        &self,
        analysis: &Analysis,
        options: &GenerateOptions,
    ) -> Result<GenerationOutcome, StencilError> {
        let out_dir = options
            .out_dir
            .clone()
            .unwrap_or_else(|| self.config.out_dir().to_path_buf());

        let previous_hash = emit::read_manifest(&out_dir).map(|manifest| manifest.source_hash);
        let hash_changed = previous_hash.as_deref() != Some(analysis.fingerprint.as_str());

        let bundle = emit::plan(
            &analysis.screens,
            &analysis.fingerprint,
            previous_hash.clone(),
            &self.config,
        );

        let mode = if options.dry_run {
            info!(files = bundle.files.len(); "dry run, nothing written");
            GenerationMode::DryRun
        } else {
            emit::write_bundle(&out_dir, &bundle)?;
            if options.prune {
                let routes: Vec<String> = analysis
                    .screens
                    .iter()
                    .map(|screen| screen.screen.route.clone())
                    .collect();
                emit::prune(&out_dir, &routes);
            }
            GenerationMode::Write
        };

        Ok(GenerationOutcome {
            mode,
            fingerprint: analysis.fingerprint.clone(),
            previous_hash,
            hash_changed,
            manifest: bundle.manifest,
            files: bundle.files,
            warnings: analysis.warnings.clone(),
        })
    }
}
