//! Hexmap Compiler - dungeon map JSON to fixed-layout C header

pub mod compile;
pub mod connectivity;
pub mod core;
pub mod emit;
pub mod hash;
pub mod hex;
pub mod map;
pub mod palette;
pub mod pipeline;

pub use pipeline::{convert, convert_file, Conversion};
