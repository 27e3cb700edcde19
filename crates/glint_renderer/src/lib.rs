//! Glint Renderer - CPU path tracing.
//!
//! A Monte Carlo path tracer over a linearly scanned scene of spheres.
//! Each frame traces one path per pixel; frames are averaged into a
//! noise-reduced image.

mod camera;
mod frame;
mod progress;
mod renderer;
mod session;
mod settings;
mod tracer;

pub use camera::Camera;
pub use frame::{quantize, Accumulator, FrameBuffer, Image, Rgb8};
pub use progress::progress_bar;
pub use renderer::{pixel_seed, render_frame};
pub use session::{CancelHandle, RenderError, RenderEvent, RenderSession, EVENT_QUEUE};
pub use settings::{RenderSettings, SettingsError};
pub use tracer::trace_path;

/// Re-export scene types from glint_core
pub use glint_core::{Material, Placement, Scene, SceneObject, Sphere};
/// Re-export Vec3 from glint_math
pub use glint_math::Vec3;
