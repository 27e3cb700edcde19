//! Placed objects and the intersection capability.

use std::fmt;

use glint_math::Vec3;

use crate::{Material, Ray};

/// Position and Euler rotation (radians) shared by everything in a scene.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Placement {
    /// Create a placement from a position and rotation.
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// Create an unrotated placement at `position`.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }
}

/// Trait for objects that rays can hit.
///
/// Implementors own their material and answer exact intersection queries.
/// New primitive kinds plug in here.
pub trait PhysicalObject: fmt::Debug + Send + Sync {
    /// Where the object sits in the world.
    fn placement(&self) -> &Placement;

    /// Shading parameters at every point of the surface.
    fn material(&self) -> &Material;

    /// Distance along `ray` to the nearest non-negative intersection.
    ///
    /// The result is in units of the ray's direction length.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward unit normal at a surface point.
    fn normal(&self, point: Vec3) -> Vec3;

    /// Object center used by the broad-phase reject.
    fn position(&self) -> Vec3 {
        self.placement().position
    }
}

/// Result of a nearest-hit query.
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    /// Parameter `t` along the ray
    pub distance: f32,
    /// The object that was hit
    pub object: &'a dyn PhysicalObject,
}

impl<'a> Hit<'a> {
    /// Material of the hit object.
    #[inline]
    pub fn material(&self) -> &'a Material {
        self.object.material()
    }
}
