//! Progressive multi-frame rendering.
//!
//! A [`RenderSession`] renders `render_frames` frames and averages them.
//! Presentation is decoupled from tracing: after each frame the session
//! offers a preview of the running average on a bounded event channel and
//! never waits on it. Events that do not fit are dropped, so a slow
//! presenter sees fewer previews instead of an ever-growing queue. The
//! channel closes when the session ends; the final image is the session's
//! return value.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use glint_core::{Placement, Scene, SceneError};
use thiserror::Error;

use crate::{render_frame, Accumulator, Camera, FrameBuffer, Image, RenderSettings, SettingsError};

/// Events buffered for the presenter before further events are dropped.
pub const EVENT_QUEUE: usize = 4;

/// Errors that prevent a render session from starting.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to spawn render thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Progress notifications sent to the presentation layer.
#[derive(Debug, Clone)]
pub enum RenderEvent {
    /// Rendering has begun
    Started { frames: u32, width: u32, height: u32 },
    /// A frame finished; `preview` is the average of frames `0..=index`
    FrameDone { index: u32, preview: Image },
    /// All frames are done
    Finished(Image),
    /// The session stopped early
    Cancelled { frames_done: u32 },
}

/// Cooperative cancellation flag, checked between frames.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Ask the session to stop after the current frame.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check if cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A scene, a camera and the settings to render them with.
pub struct RenderSession {
    scene: Arc<Scene>,
    camera: Camera,
    settings: RenderSettings,
    pool: Option<rayon::ThreadPool>,
    cancel: CancelHandle,
}

impl RenderSession {
    /// Create a session, validating the settings and every material.
    pub fn new(
        scene: Arc<Scene>,
        camera_placement: Placement,
        settings: RenderSettings,
    ) -> Result<Self, RenderError> {
        settings.validate()?;
        scene.validate_materials()?;

        let lights = scene
            .physical_objects()
            .filter(|object| object.material().is_emissive())
            .count();
        if lights == 0 {
            log::warn!("Scene has no emissive objects; the render will be black");
        }

        let pool = match settings.threads {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?,
            ),
            None => None,
        };

        let camera = Camera::from_settings(camera_placement, &settings);

        Ok(Self {
            scene,
            camera,
            settings,
            pool,
            cancel: CancelHandle::default(),
        })
    }

    /// Get a handle that can stop this session from another thread.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Get the session's camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Get the session's settings.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Render every frame on the calling thread.
    ///
    /// Returns the averaged image, or `None` if cancelled before the last
    /// frame. Events are best-effort: a full queue drops the event and a
    /// dropped receiver does not stop the render.
    pub fn run(&self, events: &SyncSender<RenderEvent>) -> Option<Image> {
        let frames = self.settings.render_frames;
        let (width, height) = (self.camera.width(), self.camera.height());

        log::info!(
            "Rendering {}x{}, {} frames, {} bounces, {} objects",
            width,
            height,
            frames,
            self.settings.bounce_limit,
            self.scene.count()
        );

        let mut presenter_gone = false;
        let mut emit = |event: RenderEvent| match events.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => log::trace!("Presenter busy, dropping render event"),
            Err(TrySendError::Disconnected(_)) => {
                if !presenter_gone {
                    log::debug!("Render event receiver dropped; continuing without presentation");
                    presenter_gone = true;
                }
            }
        };

        emit(RenderEvent::Started {
            frames,
            width,
            height,
        });

        let start = Instant::now();
        let mut accumulator = Accumulator::new(width, height);

        for index in 0..frames {
            if self.cancel.is_cancelled() {
                log::info!("Render cancelled after {} frames", index);
                emit(RenderEvent::Cancelled { frames_done: index });
                return None;
            }

            let frame_start = Instant::now();
            let frame = self.render_frame(index);
            accumulator.add(&frame.to_image());
            log::debug!("Frame {}/{} in {:?}", index + 1, frames, frame_start.elapsed());

            emit(RenderEvent::FrameDone {
                index,
                preview: accumulator.resolve(),
            });
        }

        log::info!("Rendered {} frames in {:?}", frames, start.elapsed());

        let image = accumulator.resolve();
        emit(RenderEvent::Finished(image.clone()));
        Some(image)
    }

    /// Run the session on a dedicated thread.
    ///
    /// Returns the event receiver, a cancellation handle, and the thread's
    /// join handle, which yields the same value as [`RenderSession::run`].
    pub fn spawn(
        self,
    ) -> Result<(Receiver<RenderEvent>, CancelHandle, JoinHandle<Option<Image>>), RenderError> {
        let (tx, rx) = mpsc::sync_channel(EVENT_QUEUE);
        let cancel = self.cancel_handle();

        let handle = thread::Builder::new()
            .name("glint-render".to_string())
            .spawn(move || self.run(&tx))?;

        Ok((rx, cancel, handle))
    }

    fn render_frame(&self, index: u32) -> FrameBuffer {
        let render = || {
            render_frame(
                &self.camera,
                &self.scene,
                self.settings.bounce_limit,
                self.settings.seed,
                index,
            )
        };

        match &self.pool {
            Some(pool) => pool.install(render),
            None => render(),
        }
    }
}
