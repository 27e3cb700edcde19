//! Euler-angle rotation helpers.
//!
//! Two conventions live here side by side:
//!
//! - [`rotate`] is the fixed pitch/yaw composition used to orient camera rays.
//!   It is evaluated per axis and is not guaranteed to be orthonormal for
//!   arbitrary angle pairs, so it must not be replaced with a matrix apply.
//! - [`rotation_matrix`] / [`inverse_rotation`] build a proper XYZ rotation
//!   matrix. Nothing on the tracing path uses them.

use glam::{Mat3, Vec3};

/// Transform a local-space vector into world space using the camera's
/// pitch (`rotation.x`) and yaw (`rotation.y`). `rotation.z` is ignored.
pub fn rotate(point: Vec3, rotation: Vec3) -> Vec3 {
    let (sin_x, cos_x) = rotation.x.sin_cos();
    let (sin_y, cos_y) = rotation.y.sin_cos();

    Vec3::new(
        point.x * cos_y + point.z * sin_y,
        point.y * cos_x + point.z * sin_x * sin_y + point.x * sin_x * cos_y,
        point.z * cos_x * cos_y - point.y * sin_x + point.x * cos_x * sin_y,
    )
}

/// Build the XYZ rotation matrix for the given Euler angles (radians).
pub fn rotation_matrix(rotation: Vec3) -> Mat3 {
    let (sx, cx) = rotation.x.sin_cos();
    let (sy, cy) = rotation.y.sin_cos();
    let (sz, cz) = rotation.z.sin_cos();

    let rows = [
        [cy * cz, -cy * sz, sy],
        [sx * sy * cz + cx * sz, -sx * sy * sz + cx * cz, -sx * cy],
        [-cx * sy * cz + sx * sz, cx * sy * sz + sx * cz, cx * cy],
    ];

    // glam takes columns
    Mat3::from_cols_array_2d(&rows).transpose()
}

/// Euler angles of the inverse rotation, in the same convention as
/// [`rotation_matrix`].
pub fn inverse_rotation(rotation: Vec3) -> Vec3 {
    Vec3::new(rotation.x, -rotation.y, -rotation.z)
}
