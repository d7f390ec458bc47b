//! Math utility functions shared by the sampler.
//!
//! Provides clamping, interpolation, hue-angle helpers, and byte packing
//! used when moving colors in and out of the perceptual space.

/// Clamp a value to [min, max] range.
#[inline(always)]
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v < min { min } else if v > max { max } else { v }
}

/// Linear interpolation between a and b.
#[inline(always)]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Wrap an angle in degrees into [0, 360).
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed shortest angular distance from `from` to `to`, in (-180, 180].
#[inline]
pub fn hue_delta(from: f64, to: f64) -> f64 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Interpolate between two hue angles along the shorter arc of the wheel.
///
/// The result is normalized into [0, 360).
#[inline]
pub fn lerp_hue(a: f64, b: f64, t: f64) -> f64 {
    normalize_degrees(a + hue_delta(a, b) * t)
}

/// Pack a float in [0, 1] to a byte [0, 255], rounding to nearest.
#[inline(always)]
pub fn float_to_byte(v: f64) -> u8 {
    let vi = (v * 255.0).round() as i32;
    if vi < 0 { 0 } else if vi > 255 { 255 } else { vi as u8 }
}
