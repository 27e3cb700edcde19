// Re-export glam for convenience
pub use glam::*;

// Glint math helpers
mod rotation;
mod sampling;
mod vector;

pub use rotation::{inverse_rotation, rotate, rotation_matrix};
pub use sampling::{gen_f32, random_direction};
pub use vector::{distance, lerp, normalize, reflect};
