//! Command-line argument definitions for the Stencil CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, run mode,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Stencil page generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input drawing JSON file
    #[arg(help = "Path to the input drawing file")]
    pub input: String,

    /// Output directory for generated pages and the manifest
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Render everything but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Remove output directories no current screen claims
    #[arg(long)]
    pub prune: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
