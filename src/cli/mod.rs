//! CLI module for formtree
//!
//! Provides the demo binary's commands:
//! - check: patch the built-in profile form with a JSON document and report
//!   every validation failure
//! - show: print the pristine profile form's assembled value

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{profile_form, run, run_command};
pub use errors::{CliError, CliResult};
