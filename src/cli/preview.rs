//! Preview command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use super::utils::print_faction_summary;
use pmc_loadout_overrides::host::{InMemoryHost, StartupSequence, TracingLogger};
use pmc_loadout_overrides::PmcLoadoutOverrides;

#[derive(Args)]
pub struct PreviewArgs {
    /// Host table snapshot (JSON) to apply the overrides to
    #[arg(long, value_name = "FILE")]
    pub host: PathBuf,

    /// Plugin install directory containing config/config.json
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub mod_dir: PathBuf,

    /// Write the modified snapshot to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: PreviewArgs) -> Result<()> {
    let mut host = InMemoryHost::from_file(&args.host)?;

    let plugin = PmcLoadoutOverrides::new(&args.mod_dir);
    println!("Config: {}", plugin.config_path().display());

    let mut sequence = StartupSequence::new();
    sequence.register(Box::new(plugin));
    let logger = TracingLogger;
    let ran = sequence.run(&mut host.services(&logger));
    tracing::debug!(?ran, "startup hooks finished");

    print_faction_summary(&host.bots);

    if let Some(output) = args.output {
        let json = serde_json::to_string_pretty(&host.into_snapshot())?;
        fs::write(&output, json)
            .with_context(|| format!("Failed writing snapshot: {}", output.display()))?;
        println!("Wrote {}", output.display());
    }

    Ok(())
}
