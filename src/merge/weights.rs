//! Typed parse of an operator weight table
//!
//! A slot or caliber value must be an object of item id → non-negative
//! number. Anything else is a [`ShapeMismatch`] for that one entry.

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::domain::{InvalidItemId, ItemId, WeightMap};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeMismatch {
    #[error("expected an object of item id to weight, found {found}")]
    NotAnObject { found: &'static str },
    #[error(transparent)]
    InvalidItemId(#[from] InvalidItemId),
    #[error("weight for {id} must be a number, found {found}")]
    NotANumber { id: String, found: &'static str },
    #[error("weight for {id} must be non-negative, got {weight}")]
    Negative { id: String, weight: f64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightTable(BTreeMap<ItemId, f64>);

impl WeightTable {
    pub fn parse(value: &Value) -> Result<Self, ShapeMismatch> {
        let Value::Object(entries) = value else {
            return Err(ShapeMismatch::NotAnObject { found: json_kind(value) });
        };

        let mut weights = BTreeMap::new();
        for (raw_id, raw_weight) in entries {
            let id = ItemId::parse(raw_id)?;
            let weight = raw_weight.as_f64().ok_or_else(|| ShapeMismatch::NotANumber {
                id: raw_id.clone(),
                found: json_kind(raw_weight),
            })?;
            if weight < 0.0 {
                return Err(ShapeMismatch::Negative { id: raw_id.clone(), weight });
            }
            weights.insert(id, weight);
        }
        Ok(Self(weights))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, f64)> {
        self.0.iter().map(|(id, weight)| (id, *weight))
    }

    /// Clear `target` and fill it with exactly this table.
    pub fn replace_into(&self, target: &mut WeightMap) {
        target.clear();
        target.extend(self.iter().map(|(id, weight)| (id.as_str().to_string(), weight)));
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
