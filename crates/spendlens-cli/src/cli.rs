//! CLI argument definitions using clap
//!
//! This module contains the clap structs for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spendlens - Explain where the money went
#[derive(Parser)]
#[command(name = "spendlens")]
#[command(about = "Bank statement categorization and spending insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Analysis config file (TOML)
    ///
    /// Defaults to ~/.local/share/spendlens/config/analysis.toml when present,
    /// otherwise the built-in fares are used.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render file reports from a backend payload (one object or an array)
    Report {
        /// JSON file as returned by the my-files endpoint
        #[arg(short, long)]
        file: PathBuf,

        /// Print the reports as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Analyze a raw category_stats JSON array
    Analyze {
        /// JSON file containing [{"category": ..., "amount": ...}, ...]
        #[arg(short, long)]
        stats: PathBuf,

        /// Free-text analysis to scan for trip counts
        #[arg(short, long)]
        text: Option<String>,

        /// Print the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the effective analysis configuration
    Config,
}
