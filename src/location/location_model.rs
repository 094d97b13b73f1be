use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::assets::assets_errors::Result;

/// Versions of the cross-consensus location format, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Version {
    V2,
    V3,
    V4,
    V5,
}

impl Version {
    /// First version that encodes the X1 junction level as an array.
    pub const ARRAY_X1_FROM: Version = Version::V4;

    pub fn uses_array_x1(self) -> bool {
        self >= Version::ARRAY_X1_FROM
    }
}

/// A parents-and-junctions address identifying an account, asset, or chain
/// relative to the referring chain.
///
/// The interior is kept as raw JSON: it is either the string `"Here"` or an
/// object with a single `X1`..`X8` level. Registries serialize junctions with
/// inconsistent key casing and numeric formatting, so the interior is only
/// ever interpreted through the comparator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    #[serde(default)]
    pub parents: u32,
    pub interior: Value,
}

impl Location {
    pub fn new(parents: u32, interior: Value) -> Self {
        Self { parents, interior }
    }

    /// The location of the referring chain itself.
    pub fn here() -> Self {
        Self {
            parents: 0,
            interior: Value::String("Here".to_string()),
        }
    }

    pub fn is_here(&self) -> bool {
        match &self.interior {
            Value::String(keyword) => keyword.eq_ignore_ascii_case("here"),
            _ => false,
        }
    }

    /// Parses a location from its canonical JSON string serialization.
    pub fn from_json_str(serialized: &str) -> Result<Self> {
        Ok(serde_json::from_str(serialized)?)
    }

    /// The entry at the first junction level, if the interior has one.
    /// Junction keys arrive with inconsistent casing.
    pub fn x1_entry(&self) -> Option<(&str, &Value)> {
        self.interior.as_object().and_then(|junctions| {
            junctions
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case("x1"))
                .map(|(key, entry)| (key.as_str(), entry))
        })
    }
}
