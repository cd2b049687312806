//! pmc-loadout-overrides: preview and check PMC bot-generation overrides
//!
//! Runs the startup hook against a JSON snapshot of the host tables so an
//! operator can see what `config/config.json` will change before the server
//! loads it.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
