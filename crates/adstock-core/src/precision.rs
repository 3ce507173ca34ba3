//! Output precision policy: decimal rounding followed by narrowing to `f32`.
//!
//! Rounding is scale → round-half-to-even → unscale, the same sequence the
//! reference data tooling uses, so results agree bit-for-bit with published
//! processed tables. Narrowing is a plain IEEE round-to-nearest cast.

use crate::constants::MAX_ROUNDING_DIGITS;

/// Round `value` to `digits` decimal places, ties to even.
///
/// Returns `value` unchanged when scaling would overflow (very large
/// magnitudes or very high precision), and for non-finite input.
///
/// ```
/// use adstock_core::precision::round_to_digits;
/// assert_eq!(round_to_digits(7.071067811865476, 4), 7.0711);
/// assert_eq!(round_to_digits(0.125, 2), 0.12);
/// ```
pub fn round_to_digits(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits.min(MAX_ROUNDING_DIGITS) as i32);
    let scaled = value * scale;
    // Departs from plain scale-round-unscale, which would emit `inf` here.
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / scale
}

/// Narrow to single precision. Magnitudes beyond `f32::MAX` become infinite.
pub fn narrow(value: f64) -> f32 {
    value as f32
}
