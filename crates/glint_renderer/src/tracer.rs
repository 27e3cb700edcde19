//! Path tracing for a single camera ray.

use glint_core::{PhysicalObject, Ray, Scene};
use glint_math::{gen_f32, lerp, normalize, random_direction, reflect, Vec3};
use rand::RngCore;

/// Trace one light path and return the light it gathers.
///
/// Each bounce finds the nearest hit, adds the surface's emission weighted
/// by the path throughput, then attenuates the throughput and continues
/// from the hit point. A single specular trial per bounce picks both the
/// outgoing direction blend and the color used for attenuation. The path
/// ends after `bounce_limit` bounces or when a ray escapes the scene.
pub fn trace_path(ray: Ray, scene: &Scene, bounce_limit: u32, rng: &mut dyn RngCore) -> Vec3 {
    let mut light = Vec3::ZERO;
    let mut throughput = Vec3::ONE;
    let mut ray = ray;

    for _ in 0..bounce_limit {
        let Some(hit) = ray.nearest_hit(scene) else {
            break;
        };

        let material = hit.material();
        let point = ray.at(hit.distance);
        let normal = hit.object.normal(point);

        let diffuse_dir = normalize(normal + random_direction(rng));
        let specular_dir = reflect(-ray.direction(), normal);

        // 1.0 on the specular branch, 0.0 on the diffuse one
        let specular_weight = if material.specular >= gen_f32(rng) {
            1.0
        } else {
            0.0
        };
        let direction = lerp(
            diffuse_dir,
            specular_dir,
            material.smoothness * specular_weight,
        );

        light += material.emitted_light() * throughput;
        throughput *= lerp(material.color, material.specular_color, specular_weight);

        ray = ray.with_bounce(point, direction);
    }

    light
}
