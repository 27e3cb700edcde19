//! Glint Core - scene description for the Glint path tracer.
//!
//! This crate provides:
//!
//! - **Materials**: per-surface shading parameters
//! - **Objects**: the `PhysicalObject` capability and its `Sphere` primitive
//! - **Scene registry**: the flat, ordered list of placed objects
//! - **Rays**: nearest-hit queries against a scene
//!
//! # Example
//!
//! ```
//! use glint_core::{Material, Placement, Ray, Scene, Sphere};
//! use glint_math::Vec3;
//!
//! let mut scene = Scene::new();
//! scene.add(Sphere::new(
//!     Placement::at(Vec3::new(0.0, 0.0, -4.0)),
//!     Material::diffuse(Vec3::new(255.0, 0.0, 0.0)),
//!     1.0,
//! ));
//!
//! let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 1000.0);
//! let hit = ray.nearest_hit(&scene).expect("sphere is straight ahead");
//! assert!((hit.distance - 3.0).abs() < 1e-5);
//! ```

pub mod material;
pub mod object;
pub mod ray;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use material::{Material, MaterialError};
pub use object::{Hit, PhysicalObject, Placement};
pub use ray::Ray;
pub use scene::{Scene, SceneError, SceneObject};
pub use sphere::Sphere;
