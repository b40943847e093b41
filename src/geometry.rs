//! Approximate-math helpers used across the detector pipeline.
//!
//! Line detection works on quantized, pixelated data, so most comparisons in
//! the pipeline are tolerance-based rather than exact. The helpers here keep
//! those conventions in one place.

/// Returns true when two integers differ by at most `resolution`.
#[inline]
pub fn values_are_close_i32(a: i32, b: i32, resolution: i32) -> bool {
    (a - b).abs() <= resolution
}

/// Returns true when two floats differ by at most `resolution`.
#[inline]
pub fn values_are_close_f64(a: f64, b: f64, resolution: f64) -> bool {
    (a - b).abs() <= resolution
}

/// Round to the nearest integer, halves away from zero.
#[inline]
pub fn round_to_i32(value: f64) -> i32 {
    value.round() as i32
}

/// Snap a value to the nearest multiple of `step`.
///
/// Used to limit angles to the accumulator precision before sweeping, so
/// that pixels on the same pixelated line derive the same quantized angle.
#[inline]
pub fn quantize_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}
