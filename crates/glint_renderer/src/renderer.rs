//! Frame rendering.
//!
//! Pixels are independent given an immutable scene, so a frame is traced
//! in parallel with rayon. Every pixel gets its own random stream derived
//! from the base seed, the frame index and the pixel index. Output is
//! therefore deterministic regardless of thread count or scheduling.

use glint_core::Scene;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::{trace_path, Camera, FrameBuffer};

/// Seed for one pixel's random stream.
///
/// Mixes the inputs with the SplitMix64 finalizer so neighbouring pixels
/// and consecutive frames get unrelated streams.
pub fn pixel_seed(seed: u64, frame_index: u32, pixel_index: usize) -> u64 {
    let mut z = seed
        ^ (u64::from(frame_index)).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (pixel_index as u64).wrapping_mul(0xD1B5_4A32_D192_ED03);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Render one frame: trace a single path per pixel.
pub fn render_frame(
    camera: &Camera,
    scene: &Scene,
    bounce_limit: u32,
    seed: u64,
    frame_index: u32,
) -> FrameBuffer {
    let mut frame = FrameBuffer::new(camera.width(), camera.height());
    let width = camera.width() as usize;

    frame
        .pixels
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, pixel)| {
            let x = (index % width) as f32;
            let y = (index / width) as f32;

            let mut rng = StdRng::seed_from_u64(pixel_seed(seed, frame_index, index));
            *pixel = trace_path(camera.ray(x, y), scene, bounce_limit, &mut rng);
        });

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Accumulator;
    use glint_core::{Material, Placement, Sphere};
    use glint_math::Vec3;
    use std::f32::consts::FRAC_PI_2;

    fn test_camera() -> Camera {
        Camera::new(Placement::default(), 16, 9, FRAC_PI_2, 1000.0)
    }

    fn lit_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(Placement::default());
        scene.add(Sphere::new(
            Placement::at(Vec3::new(0.0, 0.0, -4.0)),
            Material::diffuse(Vec3::splat(0.8)).with_emission(Vec3::splat(255.0), 10.0),
            1.0,
        ));
        scene.add(Sphere::new(
            Placement::at(Vec3::new(0.0, 4.0, -5.0)),
            Material::diffuse(Vec3::new(0.0, 1.0, 0.0)).with_specular(Vec3::ONE, 0.5, 0.5),
            2.0,
        ));
        scene
    }

    #[test]
    fn test_pixel_seed_varies() {
        let base = pixel_seed(1, 0, 0);
        assert_ne!(base, pixel_seed(1, 0, 1));
        assert_ne!(base, pixel_seed(1, 1, 0));
        assert_ne!(base, pixel_seed(2, 0, 0));
        assert_eq!(base, pixel_seed(1, 0, 0));
    }

    #[test]
    fn test_render_frame_is_deterministic() {
        let camera = test_camera();
        let scene = lit_scene();

        let a = render_frame(&camera, &scene, 3, 7, 0);
        let b = render_frame(&camera, &scene, 3, 7, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_center_pixel_sees_light() {
        let camera = Camera::new(Placement::default(), 9, 9, FRAC_PI_2, 1000.0);
        let frame = render_frame(&camera, &lit_scene(), 3, 0, 0);

        // First bounce always hits the emitter straight ahead
        assert!(frame.get(4, 4).min_element() >= 2550.0);
    }

    #[test]
    fn test_empty_scene_is_black() {
        let camera = test_camera();
        let mut scene = Scene::new();
        scene.add(Placement::default());

        for frame_index in 0..3 {
            let frame = render_frame(&camera, &scene, 3, 0, frame_index);
            assert!(frame.pixels.iter().all(|p| *p == Vec3::ZERO));
        }
    }

    #[test]
    fn test_enclosing_emitter_fills_view() {
        let camera = test_camera();
        let mut scene = Scene::new();
        scene.add(Placement::default());
        scene.add(Sphere::new(
            Placement::at(Vec3::ZERO),
            Material::diffuse(Vec3::ZERO).with_emission(Vec3::splat(255.0), 1.0),
            50.0,
        ));

        let mut acc = Accumulator::new(camera.width(), camera.height());
        for frame_index in 0..4 {
            let frame = render_frame(&camera, &scene, 3, 11, frame_index);
            assert!(frame.pixels.iter().all(|p| *p == Vec3::splat(255.0)));
            acc.add(&frame.to_image());
        }

        let image = acc.resolve();
        assert!(image.pixels.iter().all(|p| *p == [255, 255, 255]));
    }

    #[test]
    fn test_repeated_frame_averages_to_itself() {
        let camera = test_camera();
        let scene = lit_scene();
        let frame = render_frame(&camera, &scene, 3, 5, 2).to_image();

        let mut acc = Accumulator::new(camera.width(), camera.height());
        for _ in 0..6 {
            // Same seed and frame index reproduce the same frame
            acc.add(&render_frame(&camera, &scene, 3, 5, 2).to_image());
        }
        assert_eq!(acc.resolve(), frame);
    }
}
