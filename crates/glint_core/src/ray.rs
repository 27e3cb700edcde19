//! Ray type and nearest-hit queries.
//!
//! A ray is an origin, a direction (not necessarily normalized) and a cutoff
//! distance. Rays are immutable values: each bounce produces a new one.

use glint_math::{distance, Vec3};

use crate::{Hit, PhysicalObject, Scene};

/// A ray with origin, direction and maximum distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3, max_distance: f32) -> Self {
        Self {
            origin,
            direction,
            max_distance,
        }
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the ray's direction vector.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the distance beyond which hits are ignored.
    #[inline]
    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }

    /// The next segment of a light path, keeping this ray's cutoff.
    #[inline]
    pub fn with_bounce(&self, origin: Vec3, direction: Vec3) -> Self {
        Self::new(origin, direction, self.max_distance)
    }

    /// Find the nearest object hit by this ray.
    ///
    /// Objects whose center lies farther than `max_distance` from the origin
    /// are skipped before the exact test. That broad-phase reject ignores
    /// the ray direction and the object's extent, so it is only an
    /// approximation of "out of reach". Hits at or beyond `max_distance` are
    /// never reported, and on exact ties the earliest object wins.
    pub fn nearest_hit<'s>(&self, scene: &'s Scene) -> Option<Hit<'s>> {
        let mut closest_so_far = self.max_distance;
        let mut nearest = None;

        for object in scene.physical_objects() {
            if distance(self.origin, object.position()) > self.max_distance {
                continue;
            }

            if let Some(t) = object.intersect(self) {
                if t < closest_so_far {
                    closest_so_far = t;
                    nearest = Some(Hit {
                        distance: t,
                        object,
                    });
                }
            }
        }

        nearest
    }
}
