//! Spendlens CLI - Bank statement insights
//!
//! Usage:
//!   spendlens report --file files.json     Render statement cards
//!   spendlens analyze --stats stats.json   Summarize raw category stats
//!   spendlens config                       Show effective fares

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Report { file, json } => commands::cmd_report(&file, &config, json),
        Commands::Analyze { stats, text, json } => {
            commands::cmd_analyze(&stats, text.as_deref(), &config, json)
        }
        Commands::Config => commands::cmd_config(&config),
    }
}
