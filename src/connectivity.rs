//! Per-hex connection bitmasks
//!
//! A direction bit is set when the geometric neighbor in that direction
//! exists and is listed in the cell's own `connections`. Nothing makes masks
//! symmetric: a connection listed on one side only sets one bit.

use ahash::AHashMap;
use std::fmt;

use crate::hex::{HexCoord, HexDirection};
use crate::map::document::RawHexCell;

/// 6-bit neighbor mask, bit `i` for `HexDirection::ALL[i]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConnectionMask(u8);

impl ConnectionMask {
    pub const EMPTY: ConnectionMask = ConnectionMask(0);

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, direction: HexDirection) -> bool {
        self.0 & direction.bit() != 0
    }

    #[must_use]
    pub fn with(self, direction: HexDirection) -> Self {
        ConnectionMask(self.0 | direction.bit())
    }
}

impl fmt::Display for ConnectionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// Coordinate and id lookups over one map's cells
pub struct ConnectivityAnalyzer<'a> {
    by_coord: AHashMap<HexCoord, &'a RawHexCell>,
}

impl<'a> ConnectivityAnalyzer<'a> {
    /// Index cells by coordinate. When two cells share a coordinate the later
    /// one wins; `map::validation` reports the collision.
    pub fn new(cells: &'a [RawHexCell]) -> Self {
        let by_coord = cells.iter().map(|cell| (cell.coord(), cell)).collect();
        Self { by_coord }
    }

    pub fn neighbor(
        &self,
        cell: &RawHexCell,
        direction: HexDirection,
    ) -> Option<&'a RawHexCell> {
        let coord = cell.coord().neighbor(direction)?;
        self.by_coord.get(&coord).copied()
    }

    pub fn mask_for(&self, cell: &RawHexCell) -> ConnectionMask {
        HexDirection::ALL
            .into_iter()
            .filter(|d| {
                self.neighbor(cell, *d)
                    .is_some_and(|neighbor| cell.connects_to(&neighbor.id))
            })
            .fold(ConnectionMask::EMPTY, ConnectionMask::with)
    }

    /// Masks for every cell, keyed by id. A repeated id keeps the mask of its
    /// last occurrence.
    pub fn analyze(cells: &'a [RawHexCell]) -> AHashMap<String, ConnectionMask> {
        let analyzer = Self::new(cells);
        cells
            .iter()
            .map(|cell| (cell.id.clone(), analyzer.mask_for(cell)))
            .collect()
    }
}
