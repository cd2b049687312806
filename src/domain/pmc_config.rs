//! PMC config (`spt-pmc`)
//!
//! Every modelled field is optional so a field the host leaves out is written
//! back out as absent, not as zero.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::number;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PmcConfig {
    /// Percent chance a generated PMC is `usec` rather than `bear`.
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number::option")]
    pub is_usec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number::option")]
    pub loose_weapon_in_backpack_chance_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number::option")]
    pub weapon_has_enhancement_chance_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_backpack_loot_total_rub: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pocket_loot_total_rub: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_vest_loot_total_rub: Option<u64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_stay_absent() {
        let input = json!({"isUsec": 60, "botRelativeLevelDeltaMax": 10});

        let config: PmcConfig = serde_json::from_value(input.clone()).expect("parse");
        assert_eq!(config.is_usec, Some(60.0));
        assert_eq!(config.max_vest_loot_total_rub, None);

        assert_eq!(serde_json::to_value(&config).expect("serialize"), input);
    }
}
