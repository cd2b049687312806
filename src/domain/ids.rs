//! Item identifiers

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

static ITEM_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a 24-character hex item id")]
pub struct InvalidItemId(pub String);

/// Opaque 24-character hex token naming a host item template.
///
/// Only the format is checked. The id is echoed into host tables exactly as
/// the operator wrote it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn parse(raw: &str) -> Result<Self, InvalidItemId> {
        if ITEM_ID_PATTERN.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidItemId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
