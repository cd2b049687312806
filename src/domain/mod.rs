//! Host data model
//!
//! Shapes of the host tables this plugin reads and writes. The host owns every
//! instance; these types only mirror the fields that get overridden and carry
//! everything else through untouched in flattened `extra` maps.

pub mod bot_config;
pub mod bots;
pub mod ids;
pub mod names;
mod number;
pub mod pmc_config;

pub use bot_config::{
    ArmorPlateWeights, BotConfig, EquipmentFilters, GenerationData, MinMax, NighttimeChanges,
    PlatePosition, RandomisationDetails,
};
pub use bots::{BotType, BotTypes, Inventory, WeightMap};
pub use ids::{InvalidItemId, ItemId};
pub use names::{Caliber, EquipmentSlot, Faction, UnknownName};
pub use pmc_config::PmcConfig;
