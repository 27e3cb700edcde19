//! Free-standing vector helpers used by the path tracer.
//!
//! These are deliberately thin wrappers over glam so the tracing code reads
//! the same as the light transport equations it implements.

use glam::Vec3;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (a - b).length()
}

/// Scale a vector to unit length.
///
/// A zero-length input yields NaN components instead of panicking, so a
/// degenerate bounce only corrupts its own pixel.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v / v.length()
}

/// Reflect `d` about the normal `n`.
///
/// `n` should be unit length for a physically correct mirror direction.
#[inline]
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - 2.0 * d.dot(n) * n
}

/// Component-wise linear interpolation, `a + t * (b - a)`.
#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + t * (b - a)
}
