//! Command-line interface for pmc-loadout-overrides
//!
//! Provides `preview` and `check` subcommands that run the plugin against a
//! JSON snapshot of the host tables.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod preview;
mod utils;

/// Preview and check PMC bot-generation overrides against a host snapshot
#[derive(Parser)]
#[command(name = "pmc-loadout-overrides")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply config/config.json to a host snapshot and summarize the result
    Preview(preview::PreviewArgs),

    /// Report every applied and skipped override; fails if anything is skipped
    Check(check::CheckArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Preview(args) => preview::run(args),
        Commands::Check(args) => check::run(args),
    }
}
