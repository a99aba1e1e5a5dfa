//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Find hardcoded strings and propose key replacements
//! - `apply`: Interactively apply proposed replacements
//! - `init`: Initialize lokey configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by scan and apply.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Localization catalog JSON file (overrides config file)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Source root directory to scan (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Export a CSV report of proposed replacements to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ApplyCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan Dart sources and propose localization key replacements
    Scan(ScanCommand),
    /// Interactively replace hardcoded strings with key lookups
    Apply(ApplyCommand),
    /// Initialize a new .lokeyrc.json configuration file
    Init,
}
