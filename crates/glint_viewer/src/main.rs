//! Glint viewer: renders the demo scene and writes the result as PNG.
//!
//! Usage: `glint_viewer [settings.json] [output.png]`

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use glint_core::{Material, Placement, Scene, Sphere};
use glint_math::Vec3;
use glint_renderer::{progress_bar, Image, RenderEvent, RenderSession, RenderSettings};
use log::{info, warn};

/// Width of the terminal progress bar in cells.
const PROGRESS_WIDTH: usize = 50;

/// Write the running average to disk every this many frames.
const PREVIEW_INTERVAL: u32 = 10;

/// Build the demo scene: a bright light between a green and a blue ball,
/// with a giant dim light behind the camera.
///
/// Returns the scene and the camera's placement. The camera is registered
/// in the scene as a locator, like every other placed object.
fn create_scene() -> (Scene, Placement) {
    let mut scene = Scene::new();
    let white = Vec3::splat(255.0);

    let camera = Placement::default();
    scene.add(camera);

    // Small bright light straight ahead
    scene.add(Sphere::new(
        Placement::at(Vec3::new(0.0, 0.0, -4.0)),
        Material::new(white, white, white, 1.0, 1.0, 10.0),
        1.0,
    ));

    // Green ball above
    scene.add(Sphere::new(
        Placement::at(Vec3::new(0.0, 4.0, -5.0)),
        Material::new(Vec3::new(0.0, 255.0, 0.0), Vec3::ZERO, white, 0.5, 0.5, 0.0),
        2.0,
    ));

    // Blue mirror ball below
    scene.add(Sphere::new(
        Placement::at(Vec3::new(0.0, -4.0, -5.0)),
        Material::new(Vec3::new(0.0, 0.0, 255.0), Vec3::ZERO, white, 1.0, 1.0, 0.0),
        2.0,
    ));

    // Giant glowing sphere behind the camera
    scene.add(Sphere::new(
        Placement::at(Vec3::new(0.0, 0.0, 25.0)),
        Material::new(white, white, white, 1.0, 1.0, 1.0),
        20.0,
    ));

    (scene, camera)
}

fn save_png(frame: &Image, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        frame.as_bytes(),
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("Failed to write {}", path.display()))
}

fn preview_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "render".to_string());
    output.with_file_name(format!("{stem}_preview.png"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => RenderSettings::load(&path)
            .with_context(|| format!("Failed to load settings from {path}"))?,
        None => RenderSettings::default(),
    };
    let output = PathBuf::from(args.next().unwrap_or_else(|| "render.png".to_string()));
    let preview = preview_path(&output);

    info!("{} - {}x{}", settings.title, settings.width, settings.height);

    let frame_total = settings.render_frames;
    let (scene, camera) = create_scene();
    info!("Scene has {} objects", scene.count());

    let session = RenderSession::new(Arc::new(scene), camera, settings)?;
    let (events, _cancel, handle) = session.spawn()?;

    for event in events {
        match event {
            RenderEvent::Started { frames, .. } => {
                info!("Rendering {} frames {}", frames, progress_bar(PROGRESS_WIDTH, 0.0));
            }
            RenderEvent::FrameDone { index, preview: image } => {
                let done = index + 1;
                info!(
                    "Rendering frame {}/{} {}",
                    done,
                    frame_total,
                    progress_bar(PROGRESS_WIDTH, done as f32 / frame_total as f32)
                );
                if done % PREVIEW_INTERVAL == 0 {
                    save_png(&image, &preview)?;
                }
            }
            RenderEvent::Finished(_) => info!("Render finished"),
            RenderEvent::Cancelled { frames_done } => {
                warn!("Render cancelled after {} frames", frames_done);
            }
        }
    }

    let finished = handle
        .join()
        .map_err(|_| anyhow!("Render thread panicked"))?;

    if let Some(image) = finished {
        save_png(&image, &output)?;
        info!("Saved {}", output.display());
    }

    Ok(())
}
