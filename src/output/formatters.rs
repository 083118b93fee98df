//! Formatting utilities for terminal output

use crate::core::{Attempt, Classification, EMPTY_SLOT, Feedback, Mode};
use colored::{Color, Colorize};

/// Background colour for each verdict
#[must_use]
pub const fn classification_color(classification: Classification) -> Color {
    match classification {
        Classification::Exact => Color::Green,
        Classification::Present => Color::Yellow,
        Classification::Absent => Color::Red,
    }
}

/// Render a submitted row as coloured tiles
#[must_use]
pub fn feedback_row(attempt: &Attempt, feedback: &Feedback) -> String {
    attempt
        .slots()
        .iter()
        .zip(feedback.verdicts())
        .map(|(slot, &verdict)| {
            let ch = slot.unwrap_or(EMPTY_SLOT);
            format!(" {ch} ")
                .black()
                .bold()
                .on_color(classification_color(verdict))
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render an unfilled row as blank tiles
#[must_use]
pub fn blank_row(length: usize) -> String {
    vec![" · ".bright_black().to_string(); length].join(" ")
}

/// Column headings aligned with the tiles, empty for Word mode
#[must_use]
pub fn place_label_row(mode: Mode, length: usize) -> String {
    mode.place_labels(length)
        .iter()
        .map(|label| format!("{label:^3}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Secret;

    #[test]
    fn feedback_row_keeps_characters_in_order() {
        colored::control::set_override(false);
        let attempt = Attempt::parse("123");
        let feedback = Feedback::classify(&attempt, &Secret::new("145"));
        assert_eq!(feedback_row(&attempt, &feedback), " 1   2   3 ");
    }

    #[test]
    fn place_labels_align_with_tiles() {
        assert_eq!(place_label_row(Mode::Number, 3), " H   T   O ");
        assert_eq!(place_label_row(Mode::Word, 3), "");
    }

    #[test]
    fn classification_colors_are_traffic_lights() {
        assert_eq!(classification_color(Classification::Exact), Color::Green);
        assert_eq!(classification_color(Classification::Present), Color::Yellow);
        assert_eq!(classification_color(Classification::Absent), Color::Red);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
