//! CLI argument definitions using clap
//!
//! Commands:
//! - formtree check --input <path> [--qualified]
//! - formtree show

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// formtree - a strict, deterministic form-field model
#[derive(Parser, Debug)]
#[command(name = "formtree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a JSON document against the built-in profile form
    Check {
        /// Path to a JSON document holding the field values to apply
        #[arg(long)]
        input: PathBuf,

        /// Report fully qualified field paths instead of immediate names
        #[arg(long)]
        qualified: bool,
    },

    /// Print the pristine profile form's value as JSON
    Show,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
