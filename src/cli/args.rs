//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, FromArgMatches, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::catalog::Category;

/// Fyne Doctor - check a machine for Fyne development readiness.
#[derive(Debug, Parser)]
#[command(name = "fyne-doctor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (replaces .fyne-doctor.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show full versions and per-probe details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check dependencies and print the report (default if no command specified)
    Doctor(DoctorArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `doctor` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DoctorArgs {
    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Only report these categories (comma-separated or repeated)
    #[arg(long = "category", value_delimiter = ',')]
    pub categories: Vec<Category>,

    /// Per-probe timeout in seconds
    #[arg(long, env = "FYNE_DOCTOR_TIMEOUT", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Also write the report to this file
    #[arg(short, long, env = "FYNE_DOCTOR_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Exit with status 1 when the diagnosis fails
    #[arg(long)]
    pub strict: bool,
}

impl DoctorArgs {
    /// Doctor arguments with no flags given, so only `FYNE_DOCTOR_*` apply.
    ///
    /// Used when the binary runs without a subcommand.
    pub fn from_env() -> Result<Self, clap::Error> {
        let matches =
            Self::augment_args(clap::Command::new("doctor")).try_get_matches_from(["doctor"])?;
        Self::from_arg_matches(&matches)
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
