//! Check command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use pmc_loadout_overrides::host::{InMemoryHost, MemoryLogger};
use pmc_loadout_overrides::merge::StepReport;
use pmc_loadout_overrides::PmcLoadoutOverrides;

#[derive(Args)]
pub struct CheckArgs {
    /// Host table snapshot (JSON) to check the overrides against
    #[arg(long, value_name = "FILE")]
    pub host: PathBuf,

    /// Plugin install directory containing config/config.json
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub mod_dir: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let mut host = InMemoryHost::from_file(&args.host)?;
    let plugin = PmcLoadoutOverrides::new(&args.mod_dir);
    let logger = MemoryLogger::new();

    let report = plugin.apply(&mut host.services(&logger));

    for (level, message) in logger.entries() {
        println!("[{level}] {message}");
    }

    let Some(report) = report else {
        anyhow::bail!("Overrides were not applied");
    };

    print_section("Equipment", &report.equipment);
    print_section("Ammo", &report.ammo);
    print_section("PMC settings", &report.pmc);
    println!("Armor weighting: {}", report.armor);
    println!("Level profile: {}", report.level_profile);

    let skipped = report.skipped_count();
    if skipped > 0 {
        anyhow::bail!("{} override entries were skipped", skipped);
    }
    println!("All overrides apply cleanly");
    Ok(())
}

fn print_section(title: &str, step: &StepReport) {
    println!("{title}: {step}");
    for key in &step.applied {
        println!("  applied {key}");
    }
    for skipped in &step.skipped {
        println!("  skipped {}: {}", skipped.key, skipped.reason);
    }
}
