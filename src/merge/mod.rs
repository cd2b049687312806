//! Overwrite host bot-generation tables from a loaded [`ModConfig`]
//!
//! Order: resolve `usec`/`bear` → equipment → ammo → armor-plate weighting →
//! level profile → PMC settings. A failed faction lookup stops everything
//! before the first write. After that, each step fails on its own and the
//! remaining steps still run; nothing is rolled back.

pub mod ammo;
pub mod armor;
pub mod equipment;
pub mod factions;
pub mod level_profile;
pub mod pmc;
pub mod report;
pub mod weights;

pub use ammo::apply_ammo_overrides;
pub use armor::apply_armor_plate_weighting;
pub use equipment::apply_equipment_overrides;
pub use factions::{resolve_factions, MergeError, PmcFactions};
pub use level_profile::{apply_level_profile, build_level_profile};
pub use pmc::apply_pmc_overrides;
pub use report::{MergeReport, SkipReason, Skipped, StepOutcome, StepReport};
pub use weights::{ShapeMismatch, WeightTable};

use crate::config::ModConfig;
use crate::domain::{BotConfig, PmcConfig};
use crate::host::HostServices;

/// Apply every override in `config` to the host tables.
///
/// Returns `Err` only when the faction lookup fails, in which case one error
/// has been logged and no host table was modified.
pub fn generate_pmcs(
    host: &mut HostServices<'_>,
    config: &ModConfig,
) -> Result<MergeReport, MergeError> {
    let logger = host.logger;
    let settings = &config.settings;

    let mut factions = match resolve_factions(&mut *host.bots) {
        Ok(factions) => factions,
        Err(err) => {
            logger.error(&format!("{err}; leaving bot generation unchanged"));
            return Err(err);
        }
    };

    let equipment = apply_equipment_overrides(&mut factions, &config.pmc_equipment, logger);
    let ammo = apply_ammo_overrides(&mut factions, &config.pmc_ammo, settings.ammo_target, logger);

    let armor = apply_armor_plate_weighting(
        host.configs.get_mut::<BotConfig>(),
        settings.armor_preset,
        settings.plate_weights,
        logger,
    );

    let level_profile = if settings.level_profile {
        let bot_config = host.configs.get_mut::<BotConfig>();
        apply_level_profile(bot_config, settings.attach_level_profile, logger)
    } else {
        StepOutcome::Disabled
    };

    let pmc = apply_pmc_overrides(host.configs.get_mut::<PmcConfig>(), &config.pmc, logger);

    Ok(MergeReport { equipment, ammo, armor, level_profile, pmc })
}
