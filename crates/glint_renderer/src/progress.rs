//! Text progress bar for terminal output.

/// Render `progress` (0-1) as a bracketed bar `width` cells wide.
///
/// Partially filled cells round down; out-of-range progress is clamped.
pub fn progress_bar(width: usize, progress: f32) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f32) as usize).min(width);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(width - filled))
}
