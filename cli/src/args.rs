//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain::OriginPolicy;

/// Inspect and check the options baked into this build
#[derive(Parser, Debug)]
#[command(name = "app-options")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the active options snapshot as JSON
    Show(ShowArgs),

    /// Print one module's options
    Module(ModuleArgs),

    /// Check the baked-in options or a deployment manifest
    Check(CheckArgs),
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print only the global options
    #[arg(short, long)]
    pub global: bool,
}

/// Arguments for the module command
#[derive(Parser, Debug)]
pub struct ModuleArgs {
    /// Module identifier (e.g., "@modules/app-menu")
    pub id: String,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Deployment manifest to check instead of the baked-in options
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Only warn when api and url have different origins
    #[arg(long)]
    pub warn_origin: bool,
}

impl CheckArgs {
    pub fn origin_policy(&self) -> OriginPolicy {
        if self.warn_origin {
            OriginPolicy::Warn
        } else {
            OriginPolicy::Enforce
        }
    }
}
