//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::knownfolders::OsGeneration;
use crate::output::OutputFormat;

/// Runtrail - UserAssist execution-history parser.
#[derive(Debug, Parser)]
#[command(name = "runtrail")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

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
    /// Parse a registry hive's UserAssist data (default if no command specified)
    Parse(ParseArgs),

    /// Print the known-folder GUID table
    Folders(FoldersArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `parse` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ParseArgs {
    /// Path to the registry hive (e.g. NTUSER.DAT)
    pub hive: Option<PathBuf>,

    /// Windows generation the hive was taken from
    #[arg(long, value_enum)]
    pub os: Option<OsGeneration>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Never prompt; fail if required input is missing
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `folders` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FoldersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
