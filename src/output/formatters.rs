//! Formatting utilities for terminal output

use crate::core::{Alphabet, Feedback, KeyboardStatuses, Status};
use colored::{ColoredString, Colorize};

/// A letter-unit drawn as a coloured tile
#[must_use]
pub fn tile(unit: &str, status: Option<Status>) -> ColoredString {
    let text = format!(" {} ", unit.to_uppercase());
    match status {
        Some(Status::Correct) => text.black().on_green().bold(),
        Some(Status::Present) => text.black().on_yellow().bold(),
        Some(Status::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A guessed row, one tile per unit
#[must_use]
pub fn render_row(units: &[String], feedback: &Feedback) -> String {
    units
        .iter()
        .zip(feedback)
        .map(|(unit, &status)| tile(unit, Some(status)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The alphabet as a keyboard coloured by best-known status
///
/// Keys are laid out in alphabet order, `per_line` to a line.
#[must_use]
pub fn render_keyboard(alphabet: &Alphabet, keyboard: &KeyboardStatuses, per_line: usize) -> String {
    alphabet
        .units()
        .chunks(per_line.max(1))
        .map(|line| {
            line.iter()
                .map(|unit| tile(unit, keyboard.get(unit)).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
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
