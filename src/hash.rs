//! Seed hashing shared with the map generator.
//!
//! Seeds are hashed with the classic `h * 31 + c` string hash over Unicode
//! scalar values, truncated to 32 bits after every step. The map generator
//! hashes seeds the same way to pick its palette, so the two must agree bit
//! for bit.

/// Hash a seed string to 32 bits. The empty string hashes to 0.
pub fn string_hash(s: &str) -> u32 {
    s.chars()
        .fold(0u32, |acc, c| (acc << 5).wrapping_sub(acc).wrapping_add(c as u32))
}
