//! Bot-generation config (`spt-bot`)
//!
//! Only the `equipment` buckets are modelled: armor-plate weighting, level
//! gated randomisation profiles, and the active-chance percentages for
//! attachments.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::bots::WeightMap;
use super::number;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Equipment filters keyed by bot role (`pmc`, `assault`, ...).
    #[serde(default)]
    pub equipment: BTreeMap<String, EquipmentFilters>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Inclusive level bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinMax {
    pub min: u32,
    pub max: u32,
}

impl MinMax {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatePosition {
    Front,
    Back,
    Left,
    Right,
}

impl PlatePosition {
    pub const ALL: [PlatePosition; 4] = [Self::Front, Self::Back, Self::Left, Self::Right];
}

/// One level bracket of the armor-plate weighting table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorPlateWeights {
    pub level_range: MinMax,
    #[serde(rename = "front_plate", default, serialize_with = "number::map")]
    pub front_plate: WeightMap,
    #[serde(rename = "back_plate", default, serialize_with = "number::map")]
    pub back_plate: WeightMap,
    #[serde(rename = "left_side_plate", default, serialize_with = "number::map")]
    pub left_side_plate: WeightMap,
    #[serde(rename = "right_side_plate", default, serialize_with = "number::map")]
    pub right_side_plate: WeightMap,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ArmorPlateWeights {
    pub fn plate_mut(&mut self, position: PlatePosition) -> &mut WeightMap {
        match position {
            PlatePosition::Front => &mut self.front_plate,
            PlatePosition::Back => &mut self.back_plate,
            PlatePosition::Left => &mut self.left_side_plate,
            PlatePosition::Right => &mut self.right_side_plate,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor_plate_weighting: Option<Vec<ArmorPlateWeights>>,
    #[serde(default)]
    pub randomisation: Vec<RandomisationDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number::option")]
    pub face_shield_is_active_chance_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number::option")]
    pub laser_is_active_chance_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number::option")]
    pub light_is_active_day_chance_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number::option")]
    pub light_is_active_night_chance_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number::option")]
    pub nvg_is_active_chance_day_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number::option")]
    pub nvg_is_active_chance_night_percent: Option<f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Level-gated generation and roll-chance profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomisationDetails {
    pub level_range: MinMax,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub generation: BTreeMap<String, GenerationData>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty", serialize_with = "number::map")]
    pub equipment: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty", serialize_with = "number::map")]
    pub weapon_mods: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty", serialize_with = "number::map")]
    pub equipment_mods: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nighttime_changes: Option<NighttimeChanges>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Quantity → weight for one loot category, with an optional item whitelist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationData {
    #[serde(serialize_with = "number::map")]
    pub weights: BTreeMap<String, f64>,
    #[serde(default, serialize_with = "number::map")]
    pub whitelist: WeightMap,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NighttimeChanges {
    #[serde(default, serialize_with = "number::map")]
    pub equipment_mods_modifiers: BTreeMap<String, f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
