//! Palette selection and the built-in RGB565 palette table.

use crate::hash::string_hash;

/// Number of built-in palettes
pub const PALETTE_COUNT: usize = 5;

/// Entries per palette (dark, medium, bright). Also the stride of the
/// flattened palette index written to the header.
pub const PALETTE_STRIDE: usize = 3;

/// A palette of packed RGB565 colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub dark: u16,
    pub medium: u16,
    pub bright: u16,
}

impl Palette {
    pub const fn colors(&self) -> [u16; PALETTE_STRIDE] {
        [self.dark, self.medium, self.bright]
    }
}

/// Built-in palettes, in table order
pub const PALETTES: [Palette; PALETTE_COUNT] = [
    Palette {
        name: "green",
        dark: 0x0340,
        medium: 0x0660,
        bright: 0x05A0,
    },
    Palette {
        name: "purple",
        dark: 0x4004,
        medium: 0x9009,
        bright: 0xA80D,
    },
    Palette {
        name: "teal",
        dark: 0x0141,
        medium: 0x0281,
        bright: 0x158C,
    },
    Palette {
        name: "red",
        dark: 0x4000,
        medium: 0x9000,
        bright: 0xA000,
    },
    Palette {
        name: "amber",
        dark: 0x4080,
        medium: 0x8140,
        bright: 0xD340,
    },
];

/// Flattened palette index: palette id times [`PALETTE_STRIDE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PaletteSelection(u8);

impl PaletteSelection {
    /// Value written as `MAP_COLOR_INDEX`
    pub fn index(self) -> u8 {
        self.0
    }

    pub fn palette_id(self) -> usize {
        self.0 as usize / PALETTE_STRIDE
    }

    pub fn palette(self) -> &'static Palette {
        &PALETTES[self.palette_id()]
    }
}

/// Pick the palette for a map seed. An empty seed always selects palette 0.
pub fn select_palette(seed: &str) -> PaletteSelection {
    if seed.is_empty() {
        return PaletteSelection::default();
    }
    let id = string_hash(seed) % PALETTE_COUNT as u32;
    PaletteSelection((id as usize * PALETTE_STRIDE) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_seed_selects_zero() {
        let selection = select_palette("");
        assert_eq!(selection.index(), 0);
        assert_eq!(selection.palette().name, "green");
    }

    #[test]
    fn test_known_seeds() {
        assert_eq!(select_palette("x").index(), 0);
        assert_eq!(select_palette("seed").index(), 6);
        assert_eq!(select_palette("abc").index(), 12);
        assert_eq!(select_palette("abc").palette().name, "amber");
    }

    #[test]
    fn test_palette_colors_order() {
        assert_eq!(PALETTES[1].colors(), [0x4004, 0x9009, 0xA80D]);
    }

    proptest! {
        #[test]
        fn prop_selection_in_range(seed in ".{0,32}") {
            let index = select_palette(&seed).index();
            prop_assert!([0u8, 3, 6, 9, 12].contains(&index));
        }
    }
}
