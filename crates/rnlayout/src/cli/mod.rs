//! Command-line interface for rnlayout.
//!
//! This module provides the CLI structure and command definitions for the
//! `rnlay` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, LintCommand, OutputFormat, RulesCommand, ScaffoldCommand};

/// rnlay - Keep React Native project layouts on the style guide
///
/// Scaffolds the canonical starter tree for a new project and lints existing
/// trees for file and folder naming violations.
#[derive(Debug, Parser)]
#[command(name = "rnlay")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the canonical starter tree under a target directory
    Scaffold(ScaffoldCommand),

    /// Check a project tree against the naming conventions
    #[command(visible_alias = "lint-names")]
    Lint(LintCommand),

    /// List the built-in naming rules
    Rules(RulesCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
