//! Hex coordinate system for dungeon maps (axial coordinates, flat-top)
//!
//! Uses axial coordinates (q, r) for easy neighbor calculation.

use serde::{Deserialize, Serialize};

use crate::core::fixed::to_fixed;

/// Hex edge length in world units
pub const HEX_SIZE: f64 = 25.0;

pub const SQRT3_2: f64 = 0.866025404;
pub const SQRT3: f64 = 1.732050808;

/// Axial hex coordinate
///
/// Components are kept at full input width; narrowing to the `i8` record
/// fields happens at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct HexCoord {
    pub q: i64,
    pub r: i64,
}

impl HexCoord {
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Adjacent coordinate, or `None` when it falls outside the `i64` range
    pub fn neighbor(&self, direction: HexDirection) -> Option<HexCoord> {
        let (dq, dr) = direction.offset();
        Some(HexCoord::new(self.q.checked_add(dq)?, self.r.checked_add(dr)?))
    }

    /// Direction from self to an adjacent hex, if it is adjacent
    pub fn direction_to(&self, other: &Self) -> Option<HexDirection> {
        HexDirection::ALL
            .into_iter()
            .find(|d| self.neighbor(*d) == Some(*other))
    }

    /// Project to 16.16 fixed-point world coordinates `(x, z)`.
    ///
    /// Computed in `f64` from the full-width coordinates and truncated toward
    /// zero. Coordinates far enough from the origin to leave the `i32` range
    /// saturate at its bounds.
    pub fn project(&self) -> (i32, i32) {
        let q = self.q as f64;
        let r = self.r as f64;
        let x = HEX_SIZE * (1.5 * q);
        let z = HEX_SIZE * (SQRT3_2 * q + SQRT3 * r);
        (to_fixed(x), to_fixed(z))
    }
}

/// Connection direction. Discriminants are the bit positions in the header's
/// connection mask, so the order must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HexDirection {
    SouthEast = 0,
    NorthEast = 1,
    North = 2,
    NorthWest = 3,
    SouthWest = 4,
    South = 5,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::SouthEast,
        HexDirection::NorthEast,
        HexDirection::North,
        HexDirection::NorthWest,
        HexDirection::SouthWest,
        HexDirection::South,
    ];

    /// Axial offset `(dq, dr)`
    pub const fn offset(self) -> (i64, i64) {
        match self {
            HexDirection::SouthEast => (1, 0),
            HexDirection::NorthEast => (1, -1),
            HexDirection::North => (0, -1),
            HexDirection::NorthWest => (-1, 0),
            HexDirection::SouthWest => (-1, 1),
            HexDirection::South => (0, 1),
        }
    }

    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Suffix of the `CONN_*` constant in the header
    pub const fn const_name(self) -> &'static str {
        match self {
            HexDirection::SouthEast => "SOUTHEAST",
            HexDirection::NorthEast => "NORTHEAST",
            HexDirection::North => "NORTH",
            HexDirection::NorthWest => "NORTHWEST",
            HexDirection::SouthWest => "SOUTHWEST",
            HexDirection::South => "SOUTH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_origin() {
        assert_eq!(HexCoord::new(0, 0).project(), (0, 0));
    }

    #[test]
    fn test_project_unit_q() {
        // 25 * 1.5 * 65536, 25 * 0.866025404 * 65536
        assert_eq!(HexCoord::new(1, 0).project(), (2457600, 1418896));
    }

    #[test]
    fn test_project_truncates_negative_toward_zero() {
        assert_eq!(HexCoord::new(0, 1).project(), (0, 2837792));
        assert_eq!(HexCoord::new(2, -3).project(), (4915200, -5675584));
        assert_eq!(HexCoord::new(-1, 0).project(), (-2457600, -1418896));
    }

    #[test]
    fn test_project_saturates_far_coordinates() {
        assert_eq!(HexCoord::new(1_000_000, 0).project().0, i32::MAX);
    }

    #[test]
    fn test_direction_bits_follow_order() {
        for (i, direction) in HexDirection::ALL.iter().enumerate() {
            assert_eq!(direction.bit(), 1 << i);
        }
    }

    #[test]
    fn test_direction_to_adjacent() {
        let origin = HexCoord::new(3, -2);
        for direction in HexDirection::ALL {
            let (dq, dr) = direction.offset();
            let there = HexCoord::new(3 + dq, -2 + dr);
            assert_eq!(origin.neighbor(direction), Some(there));
            assert_eq!(origin.direction_to(&there), Some(direction));
        }
        assert_eq!(origin.direction_to(&HexCoord::new(5, -2)), None);
        assert_eq!(origin.direction_to(&origin), None);
    }

    #[test]
    fn test_neighbor_at_i64_edge_is_none() {
        let max = HexCoord::new(i64::MAX, 0);
        assert_eq!(max.neighbor(HexDirection::SouthEast), None);
        assert_eq!(max.neighbor(HexDirection::NorthEast), None);
        assert_eq!(max.neighbor(HexDirection::NorthWest), Some(HexCoord::new(i64::MAX - 1, 0)));

        let min = HexCoord::new(0, i64::MIN);
        assert_eq!(min.neighbor(HexDirection::North), None);
        assert_eq!(min.direction_to(&HexCoord::new(0, i64::MAX)), None);
    }
}
