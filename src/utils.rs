//! Shared helpers for terminal feedback.

use crate::logger;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress spinner with consistent styling.
///
/// In quiet mode a hidden spinner is returned so callers don't have to
/// branch.
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    if logger::is_quiet() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid progress template"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Format file size in human-readable form (e.g. "1.2 MB", "512 B").
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
