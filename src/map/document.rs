//! JSON schema types for generated dungeon maps
//!
//! This module defines types for deserializing the map generator's API
//! response. Only the shape needed to convert the map is enforced: every
//! field except a cell's `id` has a documented fallback.

use serde::{Deserialize, Deserializer, Serialize};

use crate::hex::HexCoord;

/// Fallback for a cell's `height`
pub const DEFAULT_HEIGHT: f64 = 1.0;

/// Root structure of a map document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawMapDocument {
    /// Cells in generation order
    #[serde(default)]
    pub hexagons: Vec<RawHexCell>,
    #[serde(default)]
    pub metadata: RawMetadata,
}

/// Map-wide metadata
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMetadata {
    /// Generator seed, shared with the generator for palette selection
    #[serde(default)]
    pub seed: String,
    /// Declared cell count (falls back to the actual count when absent)
    #[serde(default)]
    pub total_hexagons: Option<i64>,
    #[serde(default)]
    pub rooms: Option<i64>,
    #[serde(default)]
    pub corridors: Option<i64>,
}

/// A single hex cell
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHexCell {
    /// Unique identifier, referenced by other cells' `connections`
    pub id: String,
    #[serde(default, deserialize_with = "integral_coordinate")]
    pub q: i64,
    #[serde(default, deserialize_with = "integral_coordinate")]
    pub r: i64,
    /// Cell type. Kept as raw JSON: anything but the string `"CORRIDOR"`
    /// compiles to a room.
    #[serde(default, rename = "type")]
    pub kind: Option<serde_json::Value>,
    /// Floor height in generator units
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub is_walkable: Option<bool>,
    /// Ids this cell is connected to by design
    #[serde(default)]
    pub connections: Vec<String>,
}

/// Accept integers and integral floats (`3.0`); reject fractions.
fn integral_coordinate<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coordinate {
        Int(i64),
        Float(f64),
    }

    match Coordinate::deserialize(deserializer)? {
        Coordinate::Int(v) => Ok(v),
        Coordinate::Float(v) if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 => {
            Ok(v as i64)
        }
        Coordinate::Float(v) => Err(serde::de::Error::custom(format!(
            "coordinate {} is not an integer",
            v
        ))),
    }
}

impl RawHexCell {
    pub fn coord(&self) -> HexCoord {
        HexCoord::new(self.q, self.r)
    }

    pub fn height_or_default(&self) -> f64 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn walkable_or_default(&self) -> bool {
        self.is_walkable.unwrap_or(true)
    }

    pub fn is_corridor(&self) -> bool {
        matches!(&self.kind, Some(serde_json::Value::String(s)) if s == "CORRIDOR")
    }

    pub fn connects_to(&self, id: &str) -> bool {
        self.connections.iter().any(|c| c == id)
    }
}

impl RawMapDocument {
    /// Declared total, or the number of cells when the metadata omits it
    pub fn total_hexagons(&self) -> i64 {
        self.metadata
            .total_hexagons
            .unwrap_or(self.hexagons.len() as i64)
    }

    pub fn rooms(&self) -> i64 {
        self.metadata.rooms.unwrap_or(0)
    }

    pub fn corridors(&self) -> i64 {
        self.metadata.corridors.unwrap_or(0)
    }
}
