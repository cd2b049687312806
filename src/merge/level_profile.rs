//! Level 1-14 loot and roll-chance profile for the `pmc` bucket
//!
//! Clears the bucket's level-gated randomisation rules, sets the attachment
//! active-chance percentages, and builds one [`RandomisationDetails`] for the
//! first level bracket. The built profile is only pushed back into the bucket
//! when `attach` is set; otherwise it is logged as unattached.

use std::collections::BTreeMap;

use crate::domain::{BotConfig, GenerationData, MinMax, NighttimeChanges, RandomisationDetails};
use crate::host::HostLogger;

use super::armor::PMC_ROLE;
use super::report::StepOutcome;

pub const PROFILE_LEVELS: MinMax = MinMax::new(1, 14);

/// Percent chance an attachment spawns switched on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveChances {
    pub face_shield: f64,
    pub laser: f64,
    pub light_day: f64,
    pub light_night: f64,
    pub nvg_day: f64,
    pub nvg_night: f64,
}

pub const PMC_ACTIVE_CHANCES: ActiveChances = ActiveChances {
    face_shield: 90.0,
    laser: 85.0,
    light_day: 25.0,
    light_night: 95.0,
    nvg_day: 10.0,
    nvg_night: 95.0,
};

type Weights = &'static [(&'static str, f64)];

struct LootCategory {
    name: &'static str,
    quantities: Weights,
    whitelist: Weights,
}

const GENERATION: &[LootCategory] = &[
    LootCategory {
        name: "backpackLoot",
        quantities: &[("0", 1.0), ("1", 3.0), ("2", 6.0), ("3", 4.0), ("4", 2.0), ("5", 1.0)],
        whitelist: &[],
    },
    LootCategory {
        name: "drugs",
        quantities: &[("0", 2.0), ("1", 5.0), ("2", 1.0)],
        whitelist: &[
            ("544fb37f4bdc2dee738b4567", 3.0),
            ("5af0548586f7743a532b7e99", 2.0),
        ],
    },
    LootCategory {
        name: "grenades",
        quantities: &[("0", 1.0), ("1", 4.0), ("2", 2.0), ("3", 1.0)],
        whitelist: &[
            ("5710c24ad2720bc3458b45a3", 4.0),
            ("58d3db5386f77426186285a0", 3.0),
            ("5a0c27731526d80618476ac4", 1.0),
        ],
    },
    LootCategory {
        name: "healing",
        quantities: &[("0", 1.0), ("1", 4.0), ("2", 3.0), ("3", 1.0)],
        whitelist: &[
            ("544fb25a4bdc2dfb738b4567", 4.0),
            ("5e831507ea0a7c419c2f9bd9", 3.0),
            ("5755356824597772cb798962", 4.0),
            ("590c661e86f7741e566b646a", 2.0),
            ("544fb45d4bdc2dee738b4568", 1.0),
            ("5af0454c86f7746bf20992e8", 1.0),
        ],
    },
    LootCategory {
        name: "magazines",
        quantities: &[("1", 1.0), ("2", 4.0), ("3", 3.0)],
        whitelist: &[],
    },
    LootCategory {
        name: "pocketLoot",
        quantities: &[("0", 2.0), ("1", 5.0), ("2", 3.0), ("3", 1.0)],
        whitelist: &[],
    },
    LootCategory {
        name: "stims",
        quantities: &[("0", 6.0), ("1", 1.0)],
        whitelist: &[
            ("5c10c8fd86f7743d7d706df3", 2.0),
            ("5c0e533786f7747fa23f4d47", 1.0),
        ],
    },
    LootCategory {
        name: "vestLoot",
        quantities: &[("0", 1.0), ("1", 4.0), ("2", 4.0), ("3", 2.0)],
        whitelist: &[],
    },
];

const EQUIPMENT_CHANCES: Weights = &[
    ("ArmBand", 90.0),
    ("ArmorVest", 85.0),
    ("Backpack", 70.0),
    ("Earpiece", 45.0),
    ("Eyewear", 30.0),
    ("FaceCover", 40.0),
    ("Headwear", 80.0),
    ("Holster", 20.0),
    ("SecondPrimaryWeapon", 5.0),
];

const WEAPON_MOD_CHANCES: Weights = &[
    ("mod_barrel", 20.0),
    ("mod_bipod", 5.0),
    ("mod_catch", 20.0),
    ("mod_charge", 15.0),
    ("mod_equipment", 10.0),
    ("mod_equipment_000", 10.0),
    ("mod_equipment_001", 10.0),
    ("mod_equipment_002", 10.0),
    ("mod_flashlight", 25.0),
    ("mod_foregrip", 35.0),
    ("mod_gas_block", 15.0),
    ("mod_handguard", 30.0),
    ("mod_hammer", 10.0),
    ("mod_launcher", 0.0),
    ("mod_magazine", 40.0),
    ("mod_mount", 40.0),
    ("mod_mount_000", 30.0),
    ("mod_mount_001", 30.0),
    ("mod_mount_002", 25.0),
    ("mod_mount_003", 25.0),
    ("mod_mount_004", 20.0),
    ("mod_muzzle", 35.0),
    ("mod_muzzle_000", 30.0),
    ("mod_muzzle_001", 25.0),
    ("mod_pistol_grip", 25.0),
    ("mod_pistol_grip_akms", 25.0),
    ("mod_reciever", 30.0),
    ("mod_scope", 55.0),
    ("mod_scope_000", 50.0),
    ("mod_scope_001", 40.0),
    ("mod_sight_front", 60.0),
    ("mod_sight_rear", 60.0),
    ("mod_stock", 35.0),
    ("mod_stock_000", 30.0),
    ("mod_stock_akms", 30.0),
    ("mod_tactical", 30.0),
    ("mod_tactical_000", 25.0),
    ("mod_tactical_001", 20.0),
    ("mod_trigger", 10.0),
];

const EQUIPMENT_MOD_CHANCES: Weights = &[
    ("back_plate", 60.0),
    ("front_plate", 75.0),
    ("left_side_plate", 30.0),
    ("right_side_plate", 30.0),
    ("mod_equipment", 15.0),
    ("mod_equipment_000", 20.0),
    ("mod_equipment_001", 15.0),
    ("mod_equipment_002", 10.0),
    ("mod_mount", 25.0),
    ("mod_nvg", 10.0),
];

const NIGHT_EQUIPMENT_MOD_MODIFIERS: Weights = &[("mod_nvg", 40.0)];

fn to_map(weights: Weights) -> BTreeMap<String, f64> {
    weights.iter().map(|(key, weight)| (key.to_string(), *weight)).collect()
}

/// The fixed level 1-14 profile.
pub fn build_level_profile() -> RandomisationDetails {
    let generation = GENERATION
        .iter()
        .map(|category| {
            let data = GenerationData {
                weights: to_map(category.quantities),
                whitelist: to_map(category.whitelist),
                extra: BTreeMap::new(),
            };
            (category.name.to_string(), data)
        })
        .collect();

    RandomisationDetails {
        level_range: PROFILE_LEVELS,
        generation,
        equipment: to_map(EQUIPMENT_CHANCES),
        weapon_mods: to_map(WEAPON_MOD_CHANCES),
        equipment_mods: to_map(EQUIPMENT_MOD_CHANCES),
        nighttime_changes: Some(NighttimeChanges {
            equipment_mods_modifiers: to_map(NIGHT_EQUIPMENT_MOD_MODIFIERS),
            extra: BTreeMap::new(),
        }),
        extra: BTreeMap::new(),
    }
}

pub fn apply_level_profile(
    bot_config: Option<&mut BotConfig>,
    attach: bool,
    logger: &dyn HostLogger,
) -> StepOutcome {
    let Some(pmc) = bot_config.and_then(|config| config.equipment.get_mut(PMC_ROLE)) else {
        let reason = format!("bot config has no '{PMC_ROLE}' equipment bucket");
        logger.warning(&format!("level profile not applied: {reason}"));
        return StepOutcome::Skipped(reason);
    };

    pmc.randomisation.clear();

    let chances = PMC_ACTIVE_CHANCES;
    pmc.face_shield_is_active_chance_percent = Some(chances.face_shield);
    pmc.laser_is_active_chance_percent = Some(chances.laser);
    pmc.light_is_active_day_chance_percent = Some(chances.light_day);
    pmc.light_is_active_night_chance_percent = Some(chances.light_night);
    pmc.nvg_is_active_chance_day_percent = Some(chances.nvg_day);
    pmc.nvg_is_active_chance_night_percent = Some(chances.nvg_night);

    let profile = build_level_profile();
    if attach {
        pmc.randomisation.push(profile);
        logger.info(&format!(
            "attached level {}-{} loot profile",
            PROFILE_LEVELS.min, PROFILE_LEVELS.max
        ));
    } else {
        // Attaching is opt-in; without it the bucket keeps no level-gated rules.
        logger.warning(&format!(
            "built level {}-{} loot profile ({} loot categories) but left it unattached; \
             set settings.attachLevelProfile to use it",
            PROFILE_LEVELS.min,
            PROFILE_LEVELS.max,
            profile.generation.len()
        ));
    }
    StepOutcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EquipmentFilters, ItemId};
    use crate::host::{LogLevel, MemoryLogger};

    fn bot_config_with_rules() -> BotConfig {
        let mut config = BotConfig::default();
        let filters = EquipmentFilters {
            randomisation: vec![RandomisationDetails {
                level_range: MinMax::new(1, 99),
                ..RandomisationDetails::default()
            }],
            ..EquipmentFilters::default()
        };
        config.equipment.insert(PMC_ROLE.to_string(), filters);
        config
    }

    #[test]
    fn test_profile_shape() {
        let profile = build_level_profile();
        assert_eq!(profile.level_range, MinMax::new(1, 14));
        assert_eq!(profile.generation.len(), 8);
        assert_eq!(profile.equipment.len(), 9);
        assert!(profile.weapon_mods.len() >= 30);
        assert_eq!(profile.equipment_mods.len(), 10);
        let night = profile.nighttime_changes.as_ref().expect("night modifiers");
        assert_eq!(night.equipment_mods_modifiers.get("mod_nvg"), Some(&40.0));
    }

    #[test]
    fn test_profile_whitelists_hold_item_ids() {
        let profile = build_level_profile();
        let with_whitelist =
            profile.generation.values().filter(|data| !data.whitelist.is_empty()).count();
        assert!(with_whitelist >= 3);
        for data in profile.generation.values() {
            for id in data.whitelist.keys() {
                assert!(ItemId::parse(id).is_ok(), "{id} should be a valid item id");
            }
            assert!(data.weights.values().all(|weight| *weight >= 0.0));
        }
    }

    #[test]
    fn test_clears_rules_and_leaves_profile_unattached() {
        let mut config = bot_config_with_rules();
        let logger = MemoryLogger::new();

        let outcome = apply_level_profile(Some(&mut config), false, &logger);

        assert_eq!(outcome, StepOutcome::Applied);
        let pmc = &config.equipment[PMC_ROLE];
        assert!(pmc.randomisation.is_empty());
        assert_eq!(pmc.face_shield_is_active_chance_percent, Some(90.0));
        assert_eq!(pmc.nvg_is_active_chance_night_percent, Some(95.0));
        assert_eq!(logger.count(LogLevel::Warning), 1);
    }

    #[test]
    fn test_attach_pushes_profile() {
        let mut config = bot_config_with_rules();
        let logger = MemoryLogger::new();

        apply_level_profile(Some(&mut config), true, &logger);

        let pmc = &config.equipment[PMC_ROLE];
        assert_eq!(pmc.randomisation, vec![build_level_profile()]);
    }

    #[test]
    fn test_missing_bucket_is_skipped() {
        let logger = MemoryLogger::new();
        let outcome = apply_level_profile(None, true, &logger);
        assert!(matches!(outcome, StepOutcome::Skipped(_)));
        assert_eq!(logger.count(LogLevel::Warning), 1);
        assert_eq!(logger.count(LogLevel::Error), 0);
    }
}
