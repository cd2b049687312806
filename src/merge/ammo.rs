//! Ammo caliber weight overrides

use serde_json::Value;
use std::collections::BTreeMap;

use super::factions::PmcFactions;
use super::report::{SkipReason, StepReport};
use super::weights::WeightTable;
use crate::config::FactionTarget;
use crate::domain::Caliber;
use crate::host::HostLogger;

pub const SECTION: &str = "pmcAmmo";

/// Replace caliber weight maps on the faction(s) picked by `target`.
pub fn apply_ammo_overrides(
    factions: &mut PmcFactions<'_>,
    overrides: &BTreeMap<String, Value>,
    target: FactionTarget,
    logger: &dyn HostLogger,
) -> StepReport {
    let mut report = StepReport::default();

    for (name, value) in overrides {
        let caliber = match name.parse::<Caliber>() {
            Ok(caliber) => caliber,
            Err(err) => {
                report.reject(logger, SECTION, name, err.into());
                continue;
            }
        };

        let table = match WeightTable::parse(value) {
            Ok(table) => table,
            Err(err) => {
                report.reject(logger, SECTION, name, err.into());
                continue;
            }
        };

        let missing = target
            .factions()
            .find(|faction| !factions.get(*faction).inventory.ammo.contains_key(caliber.as_str()));
        if let Some(faction) = missing {
            let reason = SkipReason::MissingHostTable { faction, table: caliber.to_string() };
            report.reject(logger, SECTION, name, reason);
            continue;
        }

        for faction in target.factions() {
            if let Some(weights) = factions.get_mut(faction).inventory.ammo.get_mut(caliber.as_str()) {
                table.replace_into(weights);
            }
        }
        tracing::debug!(caliber = %caliber, items = table.len(), ?target, "replaced ammo weights");
        report.apply(name);
    }

    report
}
