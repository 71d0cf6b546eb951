//! Fixed-point conversion between decimal degrees and wire units.

/// Wire units per degree: 1e7, roughly 1.1 cm of longitude at the equator.
pub const GEO_SCALE: f64 = 10_000_000.0;

/// Converts decimal degrees to fixed-point wire units, rounding half away
/// from zero.
///
/// Plain truncation would be systematically biased low: 51.5074 scales to
/// 515073999.99999994 in f64, one short of the correct fixed value. Adding
/// half a unit toward the sign before truncating gives the rounded result
/// without a library round call.
///
/// Out-of-range coordinates are not clamped; validation is the caller's
/// responsibility.
pub fn to_fixed(degrees: f64) -> i64 {
    let half = if degrees < 0.0 { -0.5 } else { 0.5 };
    (degrees * GEO_SCALE + half) as i64
}

/// Converts fixed-point wire units back to decimal degrees.
pub fn from_fixed(value: i64) -> f64 {
    value as f64 / GEO_SCALE
}
