//! Render settings.
//!
//! Everything the renderer needs besides the scene itself. Settings can be
//! built in code or loaded from JSON; missing fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Resolution must be non-zero, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    #[error("At least one frame must be rendered")]
    NoFrames,

    #[error("Field of view must be within (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("Max distance must be positive, got {0}")]
    InvalidMaxDistance(f32),

    #[error("Thread count must be non-zero")]
    ZeroThreads,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Title shown by the presentation layer
    pub title: String,
    /// Field of view in degrees
    pub fov_degrees: f32,
    /// Rays ignore hits (and object centers) farther than this
    pub max_distance: f32,
    /// Maximum surface interactions per path
    pub bounce_limit: u32,
    /// Number of frames averaged into the final image
    pub render_frames: u32,
    /// Base seed for all per-pixel random streams
    pub seed: u64,
    /// Worker threads (None = rayon's default)
    pub threads: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            title: "Raytracer".to_string(),
            fov_degrees: 90.0,
            max_distance: 1000.0,
            bounce_limit: 3,
            render_frames: 200,
            seed: 0,
            threads: None,
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, bounce_limit: u32, render_frames: u32) -> Self {
        self.bounce_limit = bounce_limit;
        self.render_frames = render_frames;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, fov_degrees: f32, max_distance: f32) -> Self {
        self.fov_degrees = fov_degrees;
        self.max_distance = max_distance;
        self
    }

    /// Set the base random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the worker thread count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Field of view in radians.
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    /// Parse settings from a JSON string and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file and validate them.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        log::info!("Loading render settings from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that the settings describe a renderable image.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::ZeroResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.render_frames == 0 {
            return Err(SettingsError::NoFrames);
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(SettingsError::InvalidFov(self.fov_degrees));
        }
        if !(self.max_distance > 0.0) {
            return Err(SettingsError::InvalidMaxDistance(self.max_distance));
        }
        if self.threads == Some(0) {
            return Err(SettingsError::ZeroThreads);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = RenderSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!((settings.width, settings.height), (1920, 1080));
        assert_eq!(settings.bounce_limit, 3);
        assert_eq!(settings.render_frames, 200);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            RenderSettings::from_json_str(r#"{ "width": 320, "height": 240, "seed": 9 }"#).unwrap();

        assert_eq!((settings.width, settings.height), (320, 240));
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.title, "Raytracer");
        assert_eq!(settings.max_distance, 1000.0);
    }

    #[test]
    fn test_preview_preset_parses() {
        let json = include_str!("../../../settings/preview.json");
        let settings = RenderSettings::from_json_str(json).unwrap();

        assert_eq!((settings.width, settings.height), (480, 270));
        assert_eq!(settings.render_frames, 20);
        assert_eq!(settings.fov_degrees, 90.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = RenderSettings::default()
            .with_resolution(64, 48)
            .with_quality(5, 10)
            .with_threads(2);
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(RenderSettings::from_json_str(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json() {
        let err = RenderSettings::from_json_str("{ width: }").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = RenderSettings::default().with_resolution(0, 10);
        assert!(matches!(bad.validate(), Err(SettingsError::ZeroResolution { .. })));

        let bad = RenderSettings::default().with_quality(3, 0);
        assert!(matches!(bad.validate(), Err(SettingsError::NoFrames)));

        let bad = RenderSettings::default().with_lens(180.0, 10.0);
        assert!(matches!(bad.validate(), Err(SettingsError::InvalidFov(_))));

        let bad = RenderSettings::default().with_lens(90.0, f32::NAN);
        assert!(matches!(bad.validate(), Err(SettingsError::InvalidMaxDistance(_))));

        let bad = RenderSettings::default().with_threads(0);
        assert!(matches!(bad.validate(), Err(SettingsError::ZeroThreads)));
    }

    #[test]
    fn test_missing_file() {
        let err = RenderSettings::load("/nonexistent/glint/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
