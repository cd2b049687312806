//! Enumerated host names: factions, equipment slots, ammo calibers
//!
//! The host spells these as plain strings in its JSON tables. Each enum keeps
//! the exact host spelling so parsing an operator key and serializing a host
//! table use the same text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{name}'")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

macro_rules! host_names {
    (
        $(#[$meta:meta])*
        $kind:literal => pub enum $name:ident {
            $($variant:ident => $text:tt),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == s)
                    .ok_or_else(|| UnknownName { kind: $kind, name: s.to_string() })
            }
        }
    };
}

host_names! {
    /// PMC allegiance; the key of a bot record in the host's bot table.
    "faction" => pub enum Faction {
        Usec => "usec",
        Bear => "bear",
    }
}

host_names! {
    /// Loadout slot on a bot's inventory.
    "equipment slot" => pub enum EquipmentSlot {
        FirstPrimaryWeapon => "FirstPrimaryWeapon",
        SecondPrimaryWeapon => "SecondPrimaryWeapon",
        Holster => "Holster",
        Scabbard => "Scabbard",
        Headwear => "Headwear",
        Earpiece => "Earpiece",
        FaceCover => "FaceCover",
        ArmorVest => "ArmorVest",
        TacticalVest => "TacticalVest",
        Backpack => "Backpack",
        Eyewear => "Eyewear",
        ArmBand => "ArmBand",
        SecuredContainer => "SecuredContainer",
        Pockets => "Pockets",
    }
}

host_names! {
    /// Ammo caliber bucket. Covers every caliber the host ships ammo tables for,
    /// including launcher and mounted-weapon rounds.
    "caliber" => pub enum Caliber {
        Caliber9x18PM => "Caliber9x18PM",
        Caliber9x19PARA => "Caliber9x19PARA",
        Caliber9x21 => "Caliber9x21",
        Caliber9x33R => "Caliber9x33R",
        Caliber9x39 => "Caliber9x39",
        Caliber1143x23ACP => "Caliber1143x23ACP",
        Caliber127x33 => "Caliber127x33",
        Caliber127x55 => "Caliber127x55",
        Caliber127x99 => "Caliber127x99",
        Caliber127x108 => "Caliber127x108",
        Caliber12g => "Caliber12g",
        Caliber20g => "Caliber20g",
        Caliber20x1mm => "Caliber20x1mm",
        Caliber23x75 => "Caliber23x75",
        Caliber26x75 => "Caliber26x75",
        Caliber30x29 => "Caliber30x29",
        Caliber366TKM => "Caliber366TKM",
        Caliber40mmRU => "Caliber40mmRU",
        Caliber40x46 => "Caliber40x46",
        Caliber46x30 => "Caliber46x30",
        Caliber545x39 => "Caliber545x39",
        Caliber556x45NATO => "Caliber556x45NATO",
        Caliber57x28 => "Caliber57x28",
        Caliber68x51 => "Caliber68x51",
        Caliber725 => "Caliber725",
        Caliber762x25TT => "Caliber762x25TT",
        Caliber762x35 => "Caliber762x35",
        Caliber762x39 => "Caliber762x39",
        Caliber762x51 => "Caliber762x51",
        Caliber762x54R => "Caliber762x54R",
        Caliber86x70 => "Caliber86x70",
        Caliber93x64 => "Caliber93x64",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faction_round_trips_host_spelling() {
        assert_eq!("usec".parse::<Faction>(), Ok(Faction::Usec));
        assert_eq!(Faction::Bear.as_str(), "bear");
        assert!("USEC".parse::<Faction>().is_err());
    }

    #[test]
    fn test_unknown_slot_reports_kind_and_name() {
        let err = "FooSlot".parse::<EquipmentSlot>().unwrap_err();
        assert_eq!(err.kind, "equipment slot");
        assert_eq!(err.to_string(), "unknown equipment slot 'FooSlot'");
    }

    #[test]
    fn test_every_slot_parses_from_its_own_name() {
        for slot in EquipmentSlot::ALL {
            assert_eq!(slot.as_str().parse::<EquipmentSlot>(), Ok(*slot));
        }
        for caliber in Caliber::ALL {
            assert_eq!(caliber.to_string().parse::<Caliber>(), Ok(*caliber));
        }
    }

    #[test]
    fn test_heavy_and_launcher_calibers_are_known() {
        for name in ["Caliber127x108", "Caliber127x99", "Caliber725", "Caliber20x1mm"] {
            assert_eq!(name.parse::<Caliber>().map(Caliber::as_str), Ok(name));
        }
    }

    #[test]
    fn test_slot_serializes_as_host_name() {
        let json = serde_json::to_string(&EquipmentSlot::ArmBand).expect("serialize");
        assert_eq!(json, "\"ArmBand\"");
    }
}
