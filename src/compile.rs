//! Merge projection, connectivity and per-cell attributes into the records
//! written to the header.

use crate::connectivity::{ConnectionMask, ConnectivityAnalyzer};
use crate::map::document::{RawHexCell, RawMapDocument};
use crate::palette::{select_palette, PaletteSelection};

/// Multiplier from generator height units to the 0-255 height byte
pub const HEIGHT_SCALE: f64 = 12.0;

/// Hex type, written as `hex_type_t`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum HexType {
    #[default]
    Room = 0,
    Corridor = 1,
}

impl HexType {
    pub fn of(cell: &RawHexCell) -> Self {
        if cell.is_corridor() {
            HexType::Corridor
        } else {
            HexType::Room
        }
    }
}

/// Scale a raw height to a byte, truncating and then saturating to 0-255.
pub fn scale_height(raw: f64) -> u8 {
    ((raw * HEIGHT_SCALE) as i64).clamp(0, u8::MAX as i64) as u8
}

/// One fixed-layout `hex_t` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledHexRecord {
    /// Source id, emitted as a comment
    pub id: String,
    pub q: i8,
    pub r: i8,
    pub x_fixed: i32,
    pub z_fixed: i32,
    pub kind: HexType,
    pub height: u8,
    pub connections: ConnectionMask,
    pub walkable: bool,
}

impl CompiledHexRecord {
    /// Build the record for one cell
    ///
    /// Coordinates wrap to `i8` the way the target narrows an oversized
    /// literal. Projection uses the unwrapped values.
    pub fn build(cell: &RawHexCell, connections: ConnectionMask) -> Self {
        let (x_fixed, z_fixed) = cell.coord().project();
        Self {
            id: cell.id.clone(),
            q: cell.q as i8,
            r: cell.r as i8,
            x_fixed,
            z_fixed,
            kind: HexType::of(cell),
            height: scale_height(cell.height_or_default()),
            connections,
            walkable: cell.walkable_or_default(),
        }
    }
}

/// Header-level metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSummary {
    pub seed: String,
    pub palette: PaletteSelection,
    pub total_hexagons: i64,
    pub rooms: i64,
    pub corridors: i64,
}

/// A fully converted map, records in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMap {
    pub summary: MapSummary,
    pub records: Vec<CompiledHexRecord>,
}

impl CompiledMap {
    pub fn hex_count(&self) -> usize {
        self.records.len()
    }
}

pub fn compile(document: &RawMapDocument) -> CompiledMap {
    let masks = ConnectivityAnalyzer::analyze(&document.hexagons);
    let records = document
        .hexagons
        .iter()
        .map(|cell| {
            let mask = masks.get(&cell.id).copied().unwrap_or_default();
            CompiledHexRecord::build(cell, mask)
        })
        .collect::<Vec<_>>();

    let summary = MapSummary {
        seed: document.metadata.seed.clone(),
        palette: select_palette(&document.metadata.seed),
        total_hexagons: document.total_hexagons(),
        rooms: document.rooms(),
        corridors: document.corridors(),
    };

    tracing::debug!(
        hexagons = records.len(),
        palette = summary.palette.index(),
        palette_name = summary.palette.palette().name,
        "Compiled map"
    );

    CompiledMap { summary, records }
}
