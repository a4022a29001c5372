//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CandidatesCommand, CompletionsCommand, NormalizeCommand, PickCommand, RootCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for pulling file paths out of tool output.
#[derive(Parser)]
#[command(name = "pathpick")]
#[command(version, about = "Pick file paths out of compiler, search and VCS output", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of ~/.pathpick/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "PATHPICK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Resolve relative paths and discover the project root from this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub working_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Pick one path from each input line
    Pick(PickCommand),

    /// List every candidate path found in a line
    Candidates(CandidatesCommand),

    /// Show how a path is anchored for existence checks
    Normalize(NormalizeCommand),

    /// Print the discovered project root
    Root(RootCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
