//! Armor-plate level brackets and plate-class weights for the `pmc` bucket

use crate::config::ArmorPreset;
use crate::domain::{BotConfig, PlatePosition};
use crate::host::HostLogger;

use super::report::StepOutcome;

/// Equipment bucket the PMC overrides live under in the bot config.
pub const PMC_ROLE: &str = "pmc";

pub const BRACKET_COUNT: usize = 6;

type PlateWeights = &'static [(&'static str, f64)];

/// Plate-class weights for one bracket. Front and back share a table; both
/// side plates share another.
struct PlateWeightSet {
    chest: PlateWeights,
    side: PlateWeights,
}

impl PlateWeightSet {
    fn for_position(&self, position: PlatePosition) -> PlateWeights {
        match position {
            PlatePosition::Front | PlatePosition::Back => self.chest,
            PlatePosition::Left | PlatePosition::Right => self.side,
        }
    }
}

static PLATE_WEIGHTS: [PlateWeightSet; BRACKET_COUNT] = [
    PlateWeightSet {
        chest: &[("2", 25.0), ("3", 50.0), ("4", 20.0), ("5", 5.0)],
        side: &[("2", 60.0), ("3", 35.0), ("4", 5.0)],
    },
    PlateWeightSet {
        chest: &[("2", 5.0), ("3", 40.0), ("4", 40.0), ("5", 12.0), ("6", 3.0)],
        side: &[("2", 30.0), ("3", 50.0), ("4", 20.0)],
    },
    PlateWeightSet {
        chest: &[("3", 20.0), ("4", 45.0), ("5", 28.0), ("6", 7.0)],
        side: &[("2", 10.0), ("3", 50.0), ("4", 35.0), ("5", 5.0)],
    },
    PlateWeightSet {
        chest: &[("3", 8.0), ("4", 40.0), ("5", 40.0), ("6", 12.0)],
        side: &[("3", 40.0), ("4", 45.0), ("5", 15.0)],
    },
    PlateWeightSet {
        chest: &[("4", 25.0), ("5", 50.0), ("6", 25.0)],
        side: &[("3", 25.0), ("4", 50.0), ("5", 25.0)],
    },
    PlateWeightSet {
        chest: &[("4", 10.0), ("5", 50.0), ("6", 40.0)],
        side: &[("4", 45.0), ("5", 40.0), ("6", 15.0)],
    },
];

/// Rewrite the six level brackets of the `pmc` armor-plate weighting table.
///
/// A missing bot config, `pmc` bucket or weighting table (or one that isn't six
/// brackets long) is logged and left alone; nothing is partially written.
pub fn apply_armor_plate_weighting(
    bot_config: Option<&mut BotConfig>,
    preset: ArmorPreset,
    plate_weights: bool,
    logger: &dyn HostLogger,
) -> StepOutcome {
    let Some(bot_config) = bot_config else {
        return nothing_to_do(logger, "bot config is not loaded".to_string());
    };
    let Some(pmc) = bot_config.equipment.get_mut(PMC_ROLE) else {
        return nothing_to_do(logger, format!("bot config has no '{PMC_ROLE}' equipment bucket"));
    };
    let Some(table) = pmc.armor_plate_weighting.as_mut() else {
        return nothing_to_do(logger, "pmc armor plate weighting table is missing".to_string());
    };
    if table.len() != BRACKET_COUNT {
        return nothing_to_do(
            logger,
            format!("expected {BRACKET_COUNT} armor plate brackets, host has {}", table.len()),
        );
    }

    let brackets = preset.brackets();
    for ((entry, range), weights) in table.iter_mut().zip(brackets).zip(PLATE_WEIGHTS.iter()) {
        entry.level_range = range;
        if plate_weights {
            for position in PlatePosition::ALL {
                let plate = entry.plate_mut(position);
                plate.clear();
                plate.extend(
                    weights
                        .for_position(position)
                        .iter()
                        .map(|(class, weight)| (class.to_string(), *weight)),
                );
            }
        }
    }

    logger.info(&format!(
        "armor plate brackets set to the {} preset{}",
        preset.as_str(),
        if plate_weights { " with plate weights" } else { "" }
    ));
    StepOutcome::Applied
}

fn nothing_to_do(logger: &dyn HostLogger, reason: String) -> StepOutcome {
    logger.warning(&format!("armor plate weighting not applied: {reason}"));
    StepOutcome::Skipped(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArmorPlateWeights, EquipmentFilters, MinMax};
    use crate::host::{LogLevel, MemoryLogger};

    fn bot_config_with_brackets(count: usize) -> BotConfig {
        let mut config = BotConfig::default();
        let table = (0..count)
            .map(|i| ArmorPlateWeights {
                level_range: MinMax::new(i as u32 * 10, i as u32 * 10 + 9),
                ..ArmorPlateWeights::default()
            })
            .collect();
        config.equipment.insert(
            PMC_ROLE.to_string(),
            EquipmentFilters { armor_plate_weighting: Some(table), ..EquipmentFilters::default() },
        );
        config
    }

    fn ranges(config: &BotConfig) -> Vec<MinMax> {
        config.equipment[PMC_ROLE]
            .armor_plate_weighting
            .as_ref()
            .expect("table")
            .iter()
            .map(|entry| entry.level_range)
            .collect()
    }

    #[test]
    fn test_progressive_preset_bounds() {
        let mut config = bot_config_with_brackets(6);
        let logger = MemoryLogger::new();

        let outcome =
            apply_armor_plate_weighting(Some(&mut config), ArmorPreset::Progressive, false, &logger);

        assert_eq!(outcome, StepOutcome::Applied);
        assert_eq!(ranges(&config), ArmorPreset::Progressive.brackets().to_vec());
        let first = &config.equipment[PMC_ROLE].armor_plate_weighting.as_ref().expect("table")[0];
        assert!(first.front_plate.is_empty(), "plate weights stay off");
    }

    #[test]
    fn test_compressed_preset_with_plate_weights() {
        let mut config = bot_config_with_brackets(6);
        let logger = MemoryLogger::new();

        apply_armor_plate_weighting(Some(&mut config), ArmorPreset::Compressed, true, &logger);

        assert_eq!(ranges(&config)[2], MinMax::new(27, 30));
        assert_eq!(ranges(&config)[5], MinMax::new(39, 42));
        let table = config.equipment[PMC_ROLE].armor_plate_weighting.as_ref().expect("table");
        for entry in table {
            assert!(!entry.front_plate.is_empty());
            assert_eq!(entry.front_plate, entry.back_plate);
            assert_eq!(entry.left_side_plate, entry.right_side_plate);
            assert!(entry.front_plate.values().all(|weight| *weight >= 0.0));
        }
        assert_eq!(table[0].front_plate.get("3"), Some(&50.0));
    }

    #[test]
    fn test_missing_host_structures_are_logged_not_fatal() {
        let logger = MemoryLogger::new();
        let outcome = apply_armor_plate_weighting(None, ArmorPreset::Progressive, true, &logger);
        assert!(matches!(outcome, StepOutcome::Skipped(_)));

        let mut no_bucket = BotConfig::default();
        let outcome =
            apply_armor_plate_weighting(Some(&mut no_bucket), ArmorPreset::Progressive, true, &logger);
        assert!(matches!(outcome, StepOutcome::Skipped(_)));

        let mut no_table = BotConfig::default();
        no_table.equipment.insert(PMC_ROLE.to_string(), EquipmentFilters::default());
        let outcome =
            apply_armor_plate_weighting(Some(&mut no_table), ArmorPreset::Progressive, true, &logger);
        assert!(matches!(outcome, StepOutcome::Skipped(_)));

        assert_eq!(logger.count(LogLevel::Warning), 3);
        assert_eq!(logger.count(LogLevel::Error), 0);
    }

    #[test]
    fn test_short_table_is_left_untouched() {
        let mut config = bot_config_with_brackets(4);
        let before = config.clone();
        let logger = MemoryLogger::new();

        let outcome =
            apply_armor_plate_weighting(Some(&mut config), ArmorPreset::Progressive, true, &logger);

        assert!(matches!(outcome, StepOutcome::Skipped(_)));
        assert_eq!(config, before);
    }
}
