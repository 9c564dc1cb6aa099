//! Formatting utilities for terminal output

use crate::config::KeyboardLayout;
use crate::core::{Board, Chip, KeyStatus, Letter, Slot};
use colored::{ColoredString, Colorize};

/// Placeholder for a slot that has not been revealed
pub const BLANK: char = '_';

/// Plain text of the word row, e.g. `R _ _ Y`
#[must_use]
pub fn word_text(slots: &[Slot]) -> String {
    slots
        .iter()
        .map(|slot| slot.glyph().unwrap_or(BLANK).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Word row with missed letters in red
#[must_use]
pub fn word_line(board: &Board<'_>) -> String {
    board
        .slots()
        .into_iter()
        .map(|slot| match slot {
            Slot::Hidden => BLANK.to_string().bright_black().to_string(),
            Slot::Revealed(c) => c.to_ascii_uppercase().to_string().bold().to_string(),
            Slot::Missed(c) => c.to_ascii_uppercase().to_string().red().bold().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single language chip in its own colors
#[must_use]
pub fn chip(chip: &Chip) -> ColoredString {
    let lang = chip.language;
    if chip.eliminated {
        format!(" 💀 {} ", lang.name).bright_black().strikethrough()
    } else {
        format!(" {} ", lang.name)
            .truecolor(lang.foreground.r, lang.foreground.g, lang.foreground.b)
            .on_truecolor(lang.background.r, lang.background.g, lang.background.b)
    }
}

#[must_use]
pub fn chips_line(board: &Board<'_>) -> String {
    board
        .chips()
        .iter()
        .map(|c| chip(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text drawn on a key: the uppercase letter
#[must_use]
pub fn key_label(letter: Letter) -> String {
    format!("[{}]", letter.to_upper())
}

/// Keyboard rows, keys colored by status and dimmed once the game is over
#[must_use]
pub fn keyboard_lines(board: &Board<'_>, layout: KeyboardLayout) -> Vec<String> {
    let over = board.is_over();
    layout
        .rows()
        .iter()
        .map(|row| {
            row.chars()
                .filter_map(|c| Letter::new(c).ok())
                .map(|letter| {
                    let label = key_label(letter);
                    let styled = match board.key_status(letter) {
                        KeyStatus::Unguessed => label.normal(),
                        KeyStatus::Correct => label.black().on_green(),
                        KeyStatus::Wrong => label.white().on_red(),
                    };
                    (if over { styled.dimmed() } else { styled }).to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
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

/// Remaining attempts as a bar, one cell per attempt
#[must_use]
pub fn attempts_bar(board: &Board<'_>) -> String {
    let total = board.registry().loss_threshold();
    create_progress_bar(board.attempts_left() as f64, total as f64, total)
}
