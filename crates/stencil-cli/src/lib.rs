//! CLI logic for the Stencil page generator.
//!
//! This module contains the core CLI logic for the Stencil page generator.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;
use std::path::PathBuf;

use log::{info, warn};

use stencil::{
    Diagnostic, GenerateOptions, GenerationMode, PageGenerator, StencilError, ValidateError,
};

/// Run the Stencil CLI application
///
/// This function processes the input drawing through the generation
/// pipeline and writes page files and the manifest to the output
/// directory, or prints a preview in dry-run mode.
///
/// # Errors
///
/// Returns `StencilError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Validation errors
/// - Emission errors
pub fn run(args: &Args) -> Result<(), StencilError> {
    info!(input_path = args.input; "Processing drawing");

    // Load configuration
    let generator_config = config::load_config(args.config.as_ref())?;

    // Read and parse the input file
    let raw = fs::read_to_string(&args.input)?;
    let source: serde_json::Value = serde_json::from_str(&raw).map_err(|err| {
        StencilError::Validate(ValidateError::new(vec![Diagnostic::error(format!(
            "invalid JSON: {err}"
        ))]))
    })?;

    // Analyze and generate using the PageGenerator API
    let generator = PageGenerator::new(generator_config);
    let analysis = generator.analyze(&source)?;

    for warning in &analysis.warnings {
        warn!("{warning}");
    }

    let outcome = generator.generate(
        &analysis,
        &GenerateOptions {
            dry_run: args.dry_run,
            prune: args.prune,
            out_dir: args.out_dir.as_ref().map(PathBuf::from),
        },
    )?;

    match outcome.mode {
        GenerationMode::DryRun => {
            println!("dry run: {} page(s) would be written", outcome.files.len());
            for file in &outcome.files {
                println!("  {}  ->  {}", file.route, file.rel_path.display());
            }
        }
        GenerationMode::Write => {
            println!("generated {} page(s)", outcome.files.len());
            for entry in &outcome.manifest.screens {
                println!("  {}  ->  {}", entry.route, entry.file);
            }
        }
    }
    println!(
        "source hash {} ({})",
        outcome.fingerprint,
        if outcome.hash_changed { "changed" } else { "unchanged" }
    );

    info!(files = outcome.files.len(); "Generation finished");

    Ok(())
}
