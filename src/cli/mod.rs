//! CLI module for hypoboard
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;
use crate::errors::Result;
use crate::fs;
use crate::schemas::{Config, StageKey};

/// Hypoboard - Kanban board and stage-transition gates for AI project hypotheses
#[derive(Parser, Debug)]
#[command(name = "hypoboard")]
#[command(version)]
#[command(about = "Kanban board and stage-transition gates for AI project hypotheses")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a hypoboard.json config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the hypothesis service base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the board columns with their hypotheses
    Board {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Also write the dashboard snapshot to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show details of a hypothesis
    Show {
        /// Hypothesis ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate the readiness gate for a move
    Gate {
        /// Hypothesis ID
        id: String,

        /// Target stage (e.g. SCOPING)
        #[arg(long)]
        target: StageKey,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move a hypothesis to another stage
    Move {
        /// Hypothesis ID
        id: String,

        /// Target stage (e.g. SCOPING)
        #[arg(long)]
        to: StageKey,

        /// Name recorded as the author of the move
        #[arg(long)]
        actor: Option<String>,

        /// Apply drag semantics instead of the dialog's
        #[arg(long)]
        drag: bool,
    },

    /// Run the interactive board
    Tui,
}

impl Cli {
    /// Resolve configuration from file, environment and flags
    pub fn load_config(&self) -> Result<Config> {
        let cwd = fs::resolve_cwd(self.cwd.as_deref());
        let loaded = config::load_config(self.config.as_deref(), &cwd)?;
        Ok(config::apply_cli_overrides(loaded, self.api_url.as_deref()))
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_level(&self) -> &'static str {
        if matches!(self.command, Some(Commands::Tui)) || self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
