//! Formatting utilities for terminal output

/// Strength shown to the user: one decimal place
#[must_use]
pub fn format_strength(strength: f64) -> String {
    format!("{strength:.1}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a word's strength relative to the strongest word shown
#[must_use]
pub fn strength_bar(strength: f64, strongest: f64, width: usize) -> String {
    create_progress_bar(strength, strongest, width)
}
