//! Surface shading parameters.
//!
//! A material blends a Lambertian response (`color`) with a specular one
//! (`specular_color`). Colors are expressed in display units (0-255).

use glint_math::Vec3;
use thiserror::Error;

/// Errors reported by [`Material::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },

    #[error("emission strength must not be negative, got {0}")]
    NegativeEmission(f32),

    #[error("{field} is not finite")]
    NonFinite { field: &'static str },
}

/// Shading parameters owned by a single physical object.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Diffuse color
    pub color: Vec3,
    /// Color of emitted light
    pub emission_color: Vec3,
    /// Color used when a bounce takes the specular branch
    pub specular_color: Vec3,
    /// How closely a specular bounce follows the mirror direction (0-1)
    pub smoothness: f32,
    /// Probability that a bounce is specular (0-1)
    pub specular: f32,
    /// Multiplier applied to `emission_color`
    pub emission_strength: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Vec3::splat(255.0),
            emission_color: Vec3::ZERO,
            specular_color: Vec3::splat(255.0),
            smoothness: 0.0,
            specular: 0.0,
            emission_strength: 0.0,
        }
    }
}

impl Material {
    /// Create a material from all of its parameters.
    pub fn new(
        color: Vec3,
        emission_color: Vec3,
        specular_color: Vec3,
        smoothness: f32,
        specular: f32,
        emission_strength: f32,
    ) -> Self {
        Self {
            color,
            emission_color,
            specular_color,
            smoothness,
            specular,
            emission_strength,
        }
    }

    /// A purely diffuse, non-emissive material.
    pub fn diffuse(color: Vec3) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set emission.
    pub fn with_emission(mut self, emission_color: Vec3, emission_strength: f32) -> Self {
        self.emission_color = emission_color;
        self.emission_strength = emission_strength;
        self
    }

    /// Set specular response.
    pub fn with_specular(mut self, specular_color: Vec3, smoothness: f32, specular: f32) -> Self {
        self.specular_color = specular_color;
        self.smoothness = smoothness;
        self.specular = specular;
        self
    }

    /// Light emitted by this surface, `emission_color * emission_strength`.
    #[inline]
    pub fn emitted_light(&self) -> Vec3 {
        self.emission_color * self.emission_strength
    }

    /// Check if this material acts as a light source (positive emission strength).
    pub fn is_emissive(&self) -> bool {
        self.emission_strength > 0.0
    }

    /// Check the blending invariants the tracer relies on.
    ///
    /// Materials are not validated on construction; the renderer calls this
    /// once per scene before tracing.
    pub fn validate(&self) -> Result<(), MaterialError> {
        let colors = [
            ("color", self.color),
            ("emission_color", self.emission_color),
            ("specular_color", self.specular_color),
        ];
        for (field, value) in colors {
            if !value.is_finite() {
                return Err(MaterialError::NonFinite { field });
            }
        }

        for (field, value) in [("smoothness", self.smoothness), ("specular", self.specular)] {
            if !value.is_finite() {
                return Err(MaterialError::NonFinite { field });
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(MaterialError::OutOfUnitRange { field, value });
            }
        }

        if !self.emission_strength.is_finite() {
            return Err(MaterialError::NonFinite {
                field: "emission_strength",
            });
        }
        if self.emission_strength < 0.0 {
            return Err(MaterialError::NegativeEmission(self.emission_strength));
        }

        Ok(())
    }
}
