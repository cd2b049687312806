//! Serialize helpers that write whole-valued `f64`s as JSON integers
//!
//! The host stores most weights and percentages as integers. Reading them into
//! `f64` and writing them back unchanged would turn `10` into `10.0`, so every
//! numeric host field serializes through these.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Largest magnitude an `f64` can hold with every integer below it exact.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

struct Whole(f64);

impl Serialize for Whole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

struct WholeMap<'a>(&'a BTreeMap<String, f64>);

impl Serialize for WholeMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        map(self.0, serializer)
    }
}

pub fn option<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serializer.serialize_some(&Whole(*value)),
        None => serializer.serialize_none(),
    }
}

pub fn map<K, S>(values: &BTreeMap<K, f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    K: Serialize,
    S: Serializer,
{
    serializer.collect_map(values.iter().map(|(key, value)| (key, Whole(*value))))
}

/// A map of weight tables, such as an inventory's slots or calibers.
pub fn nested<K, S>(
    tables: &BTreeMap<K, BTreeMap<String, f64>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    K: Serialize,
    S: Serializer,
{
    serializer.collect_map(tables.iter().map(|(key, table)| (key, WholeMap(table))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Sample {
        #[serde(serialize_with = "map")]
        weights: BTreeMap<String, f64>,
        #[serde(serialize_with = "option")]
        chance: Option<f64>,
    }

    #[test]
    fn test_whole_values_stay_integers() {
        let sample = Sample {
            weights: [("a".to_string(), 10.0), ("b".to_string(), 2.5), ("c".to_string(), 0.0)]
                .into_iter()
                .collect(),
            chance: Some(95.0),
        };

        let text = serde_json::to_string(&sample).expect("serialize");
        assert_eq!(text, r#"{"weights":{"a":10,"b":2.5,"c":0},"chance":95}"#);
        assert_eq!(
            serde_json::to_value(&sample).expect("serialize"),
            json!({"weights": {"a": 10, "b": 2.5, "c": 0}, "chance": 95})
        );
    }
}
