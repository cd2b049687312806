//! Startup hook: load `config/config.json` and apply it right after the
//! host's database import

use std::path::PathBuf;

use crate::config::{load_mod_config, CONFIG_DIR, CONFIG_FILE_NAME};
use crate::host::{load_order, HostServices, OnLoad};
use crate::merge::{generate_pmcs, MergeReport};

pub const PLUGIN_NAME: &str = "pmc-loadout-overrides";

#[derive(Debug, Clone)]
pub struct PmcLoadoutOverrides {
    install_dir: PathBuf,
}

impl PmcLoadoutOverrides {
    /// `install_dir` is the plugin directory as resolved by the host.
    pub fn new(install_dir: impl Into<PathBuf>) -> Self {
        Self { install_dir: install_dir.into() }
    }

    pub fn config_path(&self) -> PathBuf {
        self.install_dir.join(CONFIG_DIR).join(CONFIG_FILE_NAME)
    }

    /// Load the config and apply it. `None` when the config could not be
    /// loaded or the factions were missing; either way it has been logged.
    pub fn apply(&self, host: &mut HostServices<'_>) -> Option<MergeReport> {
        let config = match load_mod_config(&self.install_dir.join(CONFIG_DIR), CONFIG_FILE_NAME) {
            Ok(config) => config,
            Err(err) => {
                host.logger.error(&format!("{PLUGIN_NAME}: {err}; no overrides applied"));
                return None;
            }
        };

        let report = generate_pmcs(host, &config).ok()?;
        host.logger.success(&format!("{PLUGIN_NAME}: {}", report.summary()));
        Some(report)
    }
}

impl OnLoad for PmcLoadoutOverrides {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn priority(&self) -> i32 {
        load_order::DATABASE + 1
    }

    fn on_load(&self, host: &mut HostServices<'_>) {
        self.apply(host);
    }
}
