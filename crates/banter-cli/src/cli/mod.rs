//! CLI command definitions and dispatch for the `banter` binary.
//!
//! Uses clap derive macros for argument parsing. The surface is small:
//! `banter chat` starts an interactive session, `banter status` reports
//! the configured backend.

pub mod chat;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Small talk with a hosted generation model.
#[derive(Parser)]
#[command(name = "banter", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Show backend configuration and version.
    Status,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
