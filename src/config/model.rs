//! `config.json` model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::{Faction, MinMax};

/// Operator overrides.
///
/// Slot and caliber values stay raw JSON here; each is shape-checked on its
/// own when applied so one bad entry doesn't reject the whole file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModConfig {
    pub pmc_equipment: BTreeMap<String, Value>,
    pub pmc_ammo: BTreeMap<String, Value>,
    pub pmc: PmcOverrides,
    pub settings: MergeSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PmcOverrides {
    pub usec_chance_percent: Option<f64>,
    pub loose_weapon_in_backpack_chance_percent: Option<f64>,
    pub weapon_has_enhancement_chance_percent: Option<f64>,
    pub max_backpack_loot_total_rub: Option<u64>,
    pub max_pocket_loot_total_rub: Option<u64>,
    pub max_vest_loot_total_rub: Option<u64>,
}

impl PmcOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeSettings {
    pub ammo_target: FactionTarget,
    pub armor_preset: ArmorPreset,
    pub plate_weights: bool,
    pub level_profile: bool,
    pub attach_level_profile: bool,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            ammo_target: FactionTarget::default(),
            armor_preset: ArmorPreset::default(),
            plate_weights: true,
            level_profile: false,
            attach_level_profile: false,
        }
    }
}

/// Which faction records receive an override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactionTarget {
    Both,
    #[default]
    UsecOnly,
    BearOnly,
}

impl FactionTarget {
    pub fn includes(self, faction: Faction) -> bool {
        match self {
            FactionTarget::Both => true,
            FactionTarget::UsecOnly => faction == Faction::Usec,
            FactionTarget::BearOnly => faction == Faction::Bear,
        }
    }

    pub fn factions(self) -> impl Iterator<Item = Faction> {
        Faction::ALL.iter().copied().filter(move |faction| self.includes(*faction))
    }
}

/// Named armor-plate level bracket sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArmorPreset {
    #[default]
    Progressive,
    Compressed,
}

const PROGRESSIVE_BRACKETS: [MinMax; 6] = [
    MinMax::new(1, 14),
    MinMax::new(15, 26),
    MinMax::new(27, 36),
    MinMax::new(37, 43),
    MinMax::new(44, 49),
    MinMax::new(50, 100),
];

const COMPRESSED_BRACKETS: [MinMax; 6] = [
    MinMax::new(1, 14),
    MinMax::new(15, 26),
    MinMax::new(27, 30),
    MinMax::new(31, 34),
    MinMax::new(35, 38),
    MinMax::new(39, 42),
];

impl ArmorPreset {
    pub const fn brackets(self) -> [MinMax; 6] {
        match self {
            ArmorPreset::Progressive => PROGRESSIVE_BRACKETS,
            ArmorPreset::Compressed => COMPRESSED_BRACKETS,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ArmorPreset::Progressive => "progressive",
            ArmorPreset::Compressed => "compressed",
        }
    }
}
