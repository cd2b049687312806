//! Bot records and the faction-keyed bot table

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::names::EquipmentSlot;
use super::number;

/// Item id → relative selection weight.
pub type WeightMap = BTreeMap<String, f64>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default, serialize_with = "number::nested")]
    pub equipment: BTreeMap<EquipmentSlot, WeightMap>,
    /// Keyed by the host's caliber name. Kept as plain strings so host calibers
    /// this crate never overrides still load.
    #[serde(default, serialize_with = "number::nested")]
    pub ammo: BTreeMap<String, WeightMap>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotType {
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The host's bot table, keyed by bot type name (`usec`, `bear`, `assault`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BotTypes {
    types: BTreeMap<String, BotType>,
}

impl BotTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, bot: BotType) -> Option<BotType> {
        self.types.insert(name.into(), bot)
    }

    pub fn remove(&mut self, name: &str) -> Option<BotType> {
        self.types.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&BotType> {
        self.types.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut BotType> {
        self.types.get_mut(name)
    }

    /// Borrow two distinct records mutably at once.
    ///
    /// Either side is `None` when absent. Asking for the same name twice only
    /// fills the first slot.
    pub fn pair_mut(
        &mut self,
        first: &str,
        second: &str,
    ) -> (Option<&mut BotType>, Option<&mut BotType>) {
        let mut a = None;
        let mut b = None;
        for (name, bot) in self.types.iter_mut() {
            if a.is_none() && name == first {
                a = Some(bot);
            } else if b.is_none() && name == second {
                b = Some(bot);
            }
        }
        (a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_mut_returns_both_records() {
        let mut bots = BotTypes::new();
        bots.insert("usec", BotType::default());
        bots.insert("bear", BotType::default());
        bots.insert("assault", BotType::default());

        let (usec, bear) = bots.pair_mut("usec", "bear");
        assert!(usec.is_some());
        assert!(bear.is_some());
    }

    #[test]
    fn test_pair_mut_reports_missing_side() {
        let mut bots = BotTypes::new();
        bots.insert("usec", BotType::default());

        let (usec, bear) = bots.pair_mut("usec", "bear");
        assert!(usec.is_some());
        assert!(bear.is_none());
    }

    #[test]
    fn test_unknown_host_fields_survive_round_trip() {
        let json = r#"{
            "usec": {
                "inventory": {
                    "equipment": {"Holster": {"5447a9cd4bdc2dbd208b4567": 3}},
                    "ammo": {"Caliber9x19PARA": {}},
                    "mods": {"a": 1}
                },
                "difficulty": {"easy": {}}
            }
        }"#;
        let bots: BotTypes = serde_json::from_str(json).expect("parse");
        let usec = bots.get("usec").expect("usec");
        assert!(usec.extra.contains_key("difficulty"));
        assert!(usec.inventory.extra.contains_key("mods"));

        let back = serde_json::to_value(&bots).expect("serialize");
        assert_eq!(back["usec"]["inventory"]["mods"]["a"], 1);
        assert_eq!(back["usec"]["inventory"]["equipment"]["Holster"]["5447a9cd4bdc2dbd208b4567"], 3);
    }
}
