//! Random sampling helpers.
//!
//! All draws take an explicit generator so callers control seeding.

use glam::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::PI;

/// Uniform draw in `[0, 1)`.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Random unit vector from uniformly drawn spherical angles.
///
/// `theta` is drawn uniformly rather than through `acos(1 - 2u)`, so samples
/// cluster toward the poles. The diffuse bounce relies on this exact
/// distribution.
pub fn random_direction(rng: &mut dyn RngCore) -> Vec3 {
    let phi = gen_f32(rng) * 2.0 * PI;
    let theta = gen_f32(rng) * PI;

    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    Vec3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}
