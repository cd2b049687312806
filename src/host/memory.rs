//! In-memory host built from a JSON snapshot of the server tables

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::config_server::ConfigServer;
use super::lifecycle::HostServices;
use super::logger::HostLogger;
use crate::domain::{BotConfig, BotTypes, PmcConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSnapshot {
    #[serde(default)]
    pub bots: BotTypes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_config: Option<BotConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmc_config: Option<PmcConfig>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    pub bots: BotTypes,
    pub configs: ConfigServer,
}

impl InMemoryHost {
    pub fn from_snapshot(snapshot: HostSnapshot) -> Self {
        let mut configs = ConfigServer::new();
        if let Some(bot_config) = snapshot.bot_config {
            configs.insert(bot_config);
        }
        if let Some(pmc_config) = snapshot.pmc_config {
            configs.insert(pmc_config);
        }
        Self { bots: snapshot.bots, configs }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed reading host snapshot: {}", path.display()))?;
        let snapshot: HostSnapshot = serde_json::from_str(&content)
            .with_context(|| format!("Invalid host snapshot: {}", path.display()))?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn services<'a>(&'a mut self, logger: &'a dyn HostLogger) -> HostServices<'a> {
        HostServices { bots: &mut self.bots, configs: &mut self.configs, logger }
    }

    pub fn into_snapshot(mut self) -> HostSnapshot {
        HostSnapshot {
            bot_config: self.configs.remove::<BotConfig>(),
            pmc_config: self.configs.remove::<PmcConfig>(),
            bots: self.bots,
        }
    }
}
