//! Equipment slot weight overrides, applied to both factions in lockstep

use serde_json::Value;
use std::collections::BTreeMap;

use super::factions::PmcFactions;
use super::report::{SkipReason, StepReport};
use super::weights::WeightTable;
use crate::domain::{EquipmentSlot, Faction};
use crate::host::HostLogger;

pub const SECTION: &str = "pmcEquipment";

pub fn apply_equipment_overrides(
    factions: &mut PmcFactions<'_>,
    overrides: &BTreeMap<String, Value>,
    logger: &dyn HostLogger,
) -> StepReport {
    let mut report = StepReport::default();

    for (name, value) in overrides {
        let slot = match name.parse::<EquipmentSlot>() {
            Ok(slot) => slot,
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

        // Both factions or neither.
        let missing = Faction::ALL
            .iter()
            .copied()
            .find(|faction| !factions.get(*faction).inventory.equipment.contains_key(&slot));
        if let Some(faction) = missing {
            let reason = SkipReason::MissingHostTable { faction, table: slot.to_string() };
            report.reject(logger, SECTION, name, reason);
            continue;
        }

        for faction in Faction::ALL {
            if let Some(weights) = factions.get_mut(*faction).inventory.equipment.get_mut(&slot) {
                table.replace_into(weights);
            }
        }
        tracing::debug!(slot = %slot, items = table.len(), "replaced equipment weights");
        report.apply(name);
    }

    report
}
