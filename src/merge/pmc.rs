//! Scalar PMC settings copied into the host PMC config

use crate::config::PmcOverrides;
use crate::domain::PmcConfig;
use crate::host::{ConfigType, HostLogger};

use super::report::{SkipReason, StepReport};

pub const SECTION: &str = "pmc";

pub fn apply_pmc_overrides(
    pmc_config: Option<&mut PmcConfig>,
    overrides: &PmcOverrides,
    logger: &dyn HostLogger,
) -> StepReport {
    let mut report = StepReport::default();
    if overrides.is_empty() {
        return report;
    }

    let Some(pmc) = pmc_config else {
        let reason = SkipReason::MissingConfig(ConfigType::Pmc);
        report.reject(logger, SECTION, ConfigType::Pmc.as_str(), reason);
        return report;
    };

    let mut percent = |field: &'static str, value: Option<f64>, target: &mut Option<f64>| {
        let Some(value) = value else { return };
        if (0.0..=100.0).contains(&value) {
            *target = Some(value);
            report.apply(field);
        } else {
            report.reject(logger, SECTION, field, SkipReason::OutOfRange { field, value });
        }
    };
    percent("usecChancePercent", overrides.usec_chance_percent, &mut pmc.is_usec);
    percent(
        "looseWeaponInBackpackChancePercent",
        overrides.loose_weapon_in_backpack_chance_percent,
        &mut pmc.loose_weapon_in_backpack_chance_percent,
    );
    percent(
        "weaponHasEnhancementChancePercent",
        overrides.weapon_has_enhancement_chance_percent,
        &mut pmc.weapon_has_enhancement_chance_percent,
    );

    let rouble_caps = [
        (
            "maxBackpackLootTotalRub",
            overrides.max_backpack_loot_total_rub,
            &mut pmc.max_backpack_loot_total_rub,
        ),
        (
            "maxPocketLootTotalRub",
            overrides.max_pocket_loot_total_rub,
            &mut pmc.max_pocket_loot_total_rub,
        ),
        ("maxVestLootTotalRub", overrides.max_vest_loot_total_rub, &mut pmc.max_vest_loot_total_rub),
    ];
    for (field, value, target) in rouble_caps {
        if let Some(value) = value {
            *target = Some(value);
            report.apply(field);
        }
    }

    report
}
