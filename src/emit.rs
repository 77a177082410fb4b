//! Render a compiled map as a C header.
//!
//! The header layout (macro names, struct field order, table shape) is read by
//! the target runtime and must stay stable.

use crate::compile::{CompiledHexRecord, CompiledMap, HEIGHT_SCALE};
use crate::core::fixed::FIXED_POINT_SHIFT;
use crate::hex::{HexDirection, HEX_SIZE};
use crate::palette::{Palette, PALETTES, PALETTE_COUNT, PALETTE_STRIDE};

/// Include guard wrapping the generated header
pub const HEADER_GUARD: &str = "MAP_DATA_H";

/// Render the full header text
pub fn emit(map: &CompiledMap) -> String {
    [
        prelude(map),
        constants(),
        records(&map.records),
        palette_table(),
        format!("\n#endif // {}\n", HEADER_GUARD),
    ]
    .concat()
}

fn prelude(map: &CompiledMap) -> String {
    let summary = &map.summary;
    format!(
        "/*
 * ENCOM-64 Generated Map Data
 * Auto-generated from API response - DO NOT EDIT
 */

#ifndef {guard}
#define {guard}

#include <stdint.h>

// Map metadata
#define MAP_SEED \"{seed}\"
#define MAP_HEX_COUNT {count}
#define MAP_COLOR_INDEX {palette}
#define MAP_TOTAL_HEXAGONS {total}
#define MAP_ROOMS {rooms}
#define MAP_CORRIDORS {corridors}
",
        guard = HEADER_GUARD,
        seed = escape_c_string(&summary.seed),
        count = map.hex_count(),
        palette = summary.palette.index(),
        total = summary.total_hexagons,
        rooms = summary.rooms,
        corridors = summary.corridors,
    )
}

fn constants() -> String {
    let directions: String = HexDirection::ALL
        .iter()
        .map(|d| {
            let name = format!("CONN_{}", d.const_name());
            format!("#define {:<16}(1 << {})\n", name, *d as u8)
        })
        .collect();

    format!(
        "
// Hex constants
#define HEX_SIZE {size}
#define HEX_HEIGHT_SCALE {scale}

// Fixed-point math (16.16)
#define FIXED_POINT_SHIFT {shift}
#define INT_TO_FIXED(x) ((x) << FIXED_POINT_SHIFT)
#define FIXED_TO_INT(x) ((x) >> FIXED_POINT_SHIFT)

// Hex types
typedef enum {{
    HEX_TYPE_ROOM = 0,
    HEX_TYPE_CORRIDOR = 1
}} hex_type_t;

// Connection directions (bitmask)
{directions}
// Hex data structure
typedef struct {{
    int8_t q, r;              // Hex coordinates
    int32_t x_fixed, z_fixed; // 16.16 fixed-point world position
    uint8_t type;             // hex_type_t
    uint8_t height;           // Height level (0-255)
    uint8_t connections;      // Connection bitmask
    uint8_t is_walkable;      // 0 or 1
}} hex_t;
",
        size = HEX_SIZE as i64,
        scale = HEIGHT_SCALE as i64,
        shift = FIXED_POINT_SHIFT,
        directions = directions,
    )
}

fn records(records: &[CompiledHexRecord]) -> String {
    let last = records.len().saturating_sub(1);
    let body: String = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let separator = if i < last { "," } else { "" };
            format!("{}{}  // {}\n", record_literal(record), separator, record.id)
        })
        .collect();

    format!(
        "
// Map data array
static const hex_t map_hexagons[MAP_HEX_COUNT] = {{
{}}};
",
        body
    )
}

/// One `hex_t` initializer, without separator or comment
pub fn record_literal(record: &CompiledHexRecord) -> String {
    format!(
        "    {{ {:2}, {:2}, {:8}, {:8}, {}, {:3}, 0x{:02X}, {} }}",
        record.q,
        record.r,
        record.x_fixed,
        record.z_fixed,
        record.kind as u8,
        record.height,
        record.connections.bits(),
        u8::from(record.walkable),
    )
}

fn palette_table() -> String {
    let rows: String = PALETTES
        .iter()
        .enumerate()
        .map(|(i, palette)| palette_row(palette, i + 1 == PALETTE_COUNT))
        .collect();

    format!(
        "
// Color palette data (RGB565 format for N64)
static const uint16_t color_palettes[{count}][{stride}] = {{
{rows}}};

// Get current palette colors
#define GET_DARK_COLOR()   (color_palettes[MAP_COLOR_INDEX / {stride}][0])
#define GET_MEDIUM_COLOR() (color_palettes[MAP_COLOR_INDEX / {stride}][1])
#define GET_BRIGHT_COLOR() (color_palettes[MAP_COLOR_INDEX / {stride}][2])
",
        count = PALETTE_COUNT,
        stride = PALETTE_STRIDE,
        rows = rows,
    )
}

fn palette_row(palette: &Palette, last: bool) -> String {
    let colors = palette
        .colors()
        .iter()
        .map(|c| format!("0x{:04X}", c))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "    // {title} palette\n    {{ {colors} }}{sep}  // dark, medium, bright {name}\n",
        title = capitalize(palette.name),
        colors = colors,
        sep = if last { " " } else { "," },
        name = palette.name,
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escape a string for use inside a C string literal
pub fn escape_c_string(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '"' => "\\\"".to_string(),
            '\\' => "\\\\".to_string(),
            '\n' => "\\n".to_string(),
            '\r' => "\\r".to_string(),
            '\t' => "\\t".to_string(),
            c if c.is_ascii_control() => format!("\\{:03o}", c as u32),
            c => c.to_string(),
        })
        .collect()
}
