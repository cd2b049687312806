//! Resolve the `usec` and `bear` bot records

use thiserror::Error;

use crate::domain::{BotType, BotTypes, Faction};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("bot table is missing required faction(s): {}", join_factions(.0))]
    MissingFactions(Vec<Faction>),
}

fn join_factions(factions: &[Faction]) -> String {
    factions.iter().map(|faction| faction.as_str()).collect::<Vec<_>>().join(", ")
}

/// Both PMC faction records, borrowed together.
pub struct PmcFactions<'a> {
    usec: &'a mut BotType,
    bear: &'a mut BotType,
}

impl PmcFactions<'_> {
    pub fn get(&self, faction: Faction) -> &BotType {
        match faction {
            Faction::Usec => &*self.usec,
            Faction::Bear => &*self.bear,
        }
    }

    pub fn get_mut(&mut self, faction: Faction) -> &mut BotType {
        match faction {
            Faction::Usec => &mut *self.usec,
            Faction::Bear => &mut *self.bear,
        }
    }
}

/// Both records or nothing: a single missing key fails the lookup.
pub fn resolve_factions(bots: &mut BotTypes) -> Result<PmcFactions<'_>, MergeError> {
    match bots.pair_mut(Faction::Usec.as_str(), Faction::Bear.as_str()) {
        (Some(usec), Some(bear)) => Ok(PmcFactions { usec, bear }),
        (usec, bear) => {
            let mut missing = Vec::new();
            if usec.is_none() {
                missing.push(Faction::Usec);
            }
            if bear.is_none() {
                missing.push(Faction::Bear);
            }
            Err(MergeError::MissingFactions(missing))
        }
    }
}
