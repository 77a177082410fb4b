//! 16.16 fixed-point helpers.
//!
//! These mirror the `INT_TO_FIXED` / `FIXED_TO_INT` macros written into the
//! generated header, so host-side code and tests can reason about the values
//! the target sees.

/// Number of fractional bits
pub const FIXED_POINT_SHIFT: u32 = 16;

/// `1.0` in fixed-point
pub const FIXED_ONE: i32 = 1 << FIXED_POINT_SHIFT;

/// Quantize a real value, truncating toward zero.
///
/// Values outside the `i32` range saturate at the bounds.
pub fn to_fixed(value: f64) -> i32 {
    (value * FIXED_ONE as f64) as i32
}

pub fn int_to_fixed(value: i32) -> i32 {
    value.wrapping_shl(FIXED_POINT_SHIFT)
}

/// Arithmetic shift, so negative values round toward negative infinity.
pub fn fixed_to_int(value: i32) -> i32 {
    value >> FIXED_POINT_SHIFT
}

pub fn fixed_to_f32(value: i32) -> f32 {
    value as f32 / FIXED_ONE as f32
}
