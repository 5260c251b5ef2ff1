//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Scaffold command arguments.
#[derive(Debug, Args)]
pub struct ScaffoldCommand {
    /// Directory to scaffold the starter tree into
    pub target: PathBuf,

    /// Scaffold into a non-empty directory, keeping existing entries
    #[arg(short, long)]
    pub merge: bool,

    /// Skip placeholder files, create directories only
    #[arg(long)]
    pub no_placeholders: bool,
}

/// Lint command arguments.
#[derive(Debug, Args)]
pub struct LintCommand {
    /// Root directory of the project tree to lint
    pub root: PathBuf,

    /// Treat advisory findings as errors for the exit code
    #[arg(short, long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Rules command arguments.
#[derive(Debug, Args)]
pub struct RulesCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}
