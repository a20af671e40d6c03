//! Command-line interface for recipedeck.
//!
//! This module provides the CLI structure and command definitions for the
//! `rcpd` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AddCommand, ConfigCommand, ListCommand, OutputFormat, ShowCommand, StatusCommand};

/// rcpd - Browse an in-memory recipe collection
///
/// Each invocation starts a fresh session: the store is seeded from
/// configuration, the command runs against it, and nothing is persisted.
#[derive(Debug, Parser)]
#[command(name = "rcpd")]
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
    /// List the current recipe collection
    List(ListCommand),

    /// Show a single recipe by id
    Show(ShowCommand),

    /// Add a recipe to the session's collection
    Add(AddCommand),

    /// Show store and configuration status
    Status(StatusCommand),

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
