//! Formatting utilities for terminal output

use crate::game::{GameStatus, Session};

/// Shareable summary: a `Wordle 3/6` header and one emoji line per guess
///
/// Lost games show `X` as the score. Letters are never revealed.
#[must_use]
pub fn share_text(session: &Session) -> String {
    let score = match session.status() {
        GameStatus::Won => session.rows().len().to_string(),
        GameStatus::Lost => "X".to_string(),
        GameStatus::InProgress => "-".to_string(),
    };

    let mut text = format!("Wordle {score}/{}", session.max_rows());
    for row in session.rows() {
        text.push('\n');
        text.push_str(&row.result.to_emoji());
    }
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
