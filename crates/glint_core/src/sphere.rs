//! Sphere primitive.

use glint_math::{normalize, Vec3};

use crate::{Material, PhysicalObject, Placement, Ray};

/// A sphere primitive.
#[derive(Clone, Debug)]
pub struct Sphere {
    placement: Placement,
    material: Material,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere centered at the placement's position.
    pub fn new(placement: Placement, material: Material, radius: f32) -> Self {
        Self {
            placement,
            material,
            radius,
        }
    }

    /// Get the sphere's center.
    pub fn center(&self) -> Vec3 {
        self.placement.position
    }

    /// Get the sphere's radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl PhysicalObject for Sphere {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin() - self.center();
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b + sqrtd) / (2.0 * a);
        let t2 = (-b - sqrtd) / (2.0 * a);

        match (t1 < 0.0, t2 < 0.0) {
            // Sphere is entirely behind the origin
            (true, true) => None,
            // Origin is inside the sphere
            (true, false) => Some(t2),
            (false, true) => Some(t1),
            (false, false) => Some(t1.min(t2)),
        }
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        normalize(point - self.center())
    }
}
