//! Camera for ray generation.

use glint_core::{Placement, Ray};
use glint_math::{rotate, Vec3};

use crate::RenderSettings;

/// Pinhole camera that maps pixel coordinates to world-space rays.
///
/// The camera holds no render state, so one instance can be shared by
/// every worker during a frame.
#[derive(Debug, Clone)]
pub struct Camera {
    placement: Placement,
    width: u32,
    height: u32,
    /// Horizontal and vertical field of view share this angle (radians).
    fov: f32,
    max_distance: f32,
    // Cached tan(fov / 2)
    half_extent: f32,
}

impl Camera {
    /// Create a camera. `fov` is in radians.
    pub fn new(placement: Placement, width: u32, height: u32, fov: f32, max_distance: f32) -> Self {
        Self {
            placement,
            width,
            height,
            fov,
            max_distance,
            half_extent: (fov / 2.0).tan(),
        }
    }

    /// Create a camera using the resolution, field of view and ray cutoff
    /// from `settings`.
    pub fn from_settings(placement: Placement, settings: &RenderSettings) -> Self {
        Self::new(
            placement,
            settings.width,
            settings.height,
            settings.fov_radians(),
            settings.max_distance,
        )
    }

    /// Get the image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Get the camera's placement.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// World-space direction through pixel `(x, y)`.
    ///
    /// Pixel centers sit at half-integer offsets, so `(width / 2 - 0.5,
    /// height / 2 - 0.5)` looks straight down the camera's -Z axis. The
    /// result is not normalized.
    pub fn ray_direction(&self, x: f32, y: f32) -> Vec3 {
        let width = self.width as f32;
        let height = self.height as f32;
        let aspect = width / height;

        let local = Vec3::new(
            (2.0 * (x + 0.5) / width - 1.0) * self.half_extent * aspect,
            (1.0 - 2.0 * (y + 0.5) / height) * self.half_extent,
            -1.0,
        );

        rotate(local, self.placement.rotation)
    }

    /// Generate the primary ray for pixel `(x, y)`.
    pub fn ray(&self, x: f32, y: f32) -> Ray {
        Ray::new(
            self.placement.position,
            self.ray_direction(x, y),
            self.max_distance,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    #[test]
    fn test_center_pixel_looks_down_negative_z() {
        for (width, height, fov) in [(100, 100, FRAC_PI_2), (1920, 1080, 1.2), (7, 3, 0.1)] {
            let camera = Camera::new(Placement::default(), width, height, fov, 1000.0);
            let dir = camera.ray_direction(width as f32 / 2.0 - 0.5, height as f32 / 2.0 - 0.5);
            assert!((dir - Vec3::new(0.0, 0.0, -1.0)).length() < EPS, "{width}x{height}: {dir}");
        }
    }

    #[test]
    fn test_corner_pixels_span_fov() {
        // 90 degrees: tan(45) = 1, square image
        let camera = Camera::new(Placement::default(), 2, 2, FRAC_PI_2, 1000.0);

        let top_left = camera.ray_direction(-0.5, -0.5);
        assert!((top_left - Vec3::new(-1.0, 1.0, -1.0)).length() < EPS);

        let bottom_right = camera.ray_direction(1.5, 1.5);
        assert!((bottom_right - Vec3::new(1.0, -1.0, -1.0)).length() < EPS);
    }

    #[test]
    fn test_aspect_widens_horizontal_extent() {
        let camera = Camera::new(Placement::default(), 200, 100, FRAC_PI_2, 1000.0);
        let right_edge = camera.ray_direction(199.5, 49.5);
        assert!((right_edge.x - 2.0).abs() < EPS);
        assert!(right_edge.y.abs() < EPS);
    }

    #[test]
    fn test_rotation_turns_rays() {
        let placement = Placement::new(Vec3::ZERO, Vec3::new(0.0, PI, 0.0));
        let camera = Camera::new(placement, 10, 10, FRAC_PI_2, 1000.0);
        let dir = camera.ray_direction(4.5, 4.5);
        assert!((dir - Vec3::new(0.0, 0.0, 1.0)).length() < EPS);
    }

    #[test]
    fn test_ray_starts_at_camera() {
        let placement = Placement::at(Vec3::new(1.0, 2.0, 3.0));
        let camera = Camera::new(placement, 4, 4, FRAC_PI_2, 250.0);
        let ray = camera.ray(0.0, 0.0);

        assert_eq!(ray.origin(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(ray.max_distance(), 250.0);
        assert_eq!(ray.direction(), camera.ray_direction(0.0, 0.0));
    }

    #[test]
    fn test_from_settings_converts_degrees() {
        let settings = RenderSettings::default().with_resolution(64, 32);
        let camera = Camera::from_settings(Placement::default(), &settings);

        assert_eq!((camera.width(), camera.height()), (64, 32));
        assert!((camera.fov() - FRAC_PI_2).abs() < EPS);
    }
}
