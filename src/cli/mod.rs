// ABOUTME: CLI argument parsing and command routing for setupwiz
//
// Provides command-line interface for:
// - Launching the TUI wizard (tui, default)
// - Inspecting progress (summary, status, steps)
// - Managing saved progress (reset, goto)

pub mod reset;
pub mod status;
pub mod steps;
pub mod summary;
pub mod util;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Guided setup checklist for refurbished laptops
#[derive(Parser, Debug)]
#[command(name = "setupwiz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Directory holding saved progress (overrides config)
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,

    /// Step catalog in TOML (overrides config; builtin checklist by default)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Keep progress in memory only; nothing is read or written on disk
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Print the completion summary
    Summary,

    /// Show the current step and progress counts
    Status,

    /// List the steps in the catalog
    Steps,

    /// Forget saved progress
    Reset,

    /// Jump to a step
    Goto(GotoArgs),
}

/// Arguments for the goto command
#[derive(clap::Args, Debug, PartialEq, Eq)]
pub struct GotoArgs {
    /// Step number (1-based)
    pub step: usize,
}
