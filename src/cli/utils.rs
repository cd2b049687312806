//! Shared CLI utilities.

use pmc_loadout_overrides::domain::{BotTypes, Faction};

/// Print slot and caliber sizes for both PMC factions.
pub fn print_faction_summary(bots: &BotTypes) {
    for faction in Faction::ALL {
        let Some(bot) = bots.get(faction.as_str()) else {
            println!("{faction}: missing from bot table");
            continue;
        };
        println!("{faction}:");
        for (slot, weights) in &bot.inventory.equipment {
            println!("  {slot}: {} items", weights.len());
        }
        for (caliber, weights) in &bot.inventory.ammo {
            println!("  {caliber}: {} items", weights.len());
        }
    }
}
