//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus};
use crate::game::{GameSession, GameState, KEY_ROWS, KeyState};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// A guessed letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// A whole guess as a row of colored tiles
#[must_use]
pub fn feedback_tiles(feedback: &Feedback) -> String {
    feedback
        .letters()
        .map(|(letter, status)| letter_tile(char::from(letter), status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The on-screen keyboard, one colored line per row
#[must_use]
pub fn keyboard_lines(session: &GameSession) -> Vec<String> {
    KEY_ROWS
        .iter()
        .map(|row| {
            row.iter()
                .filter(|label| label.len() == 1)
                .map(|label| {
                    let letter = label.chars().next().unwrap_or(' ');
                    match session.key_state(letter) {
                        KeyState::Correct => label.black().on_green().to_string(),
                        KeyState::Present => label.black().on_yellow().to_string(),
                        KeyState::Burned => label.bright_black().strikethrough().to_string(),
                        KeyState::Default => label.white().to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Shareable emoji summary of a session
///
/// The header shows the puzzle number (or "Practice") and the score, `X` when
/// the game was lost.
#[must_use]
pub fn share_grid(session: &GameSession) -> String {
    let title = session
        .puzzle_number()
        .map_or_else(|| "Practice".to_string(), |n| format!("Word of the Day #{n}"));
    let score = match session.state() {
        GameState::Won => session.guesses().len().to_string(),
        GameState::Lost => "X".to_string(),
        GameState::Active => "-".to_string(),
    };

    let mut grid = format!("{title} {score}/{}", session.config().total_rows);
    for feedback in session.guesses() {
        let _ = write!(grid, "\n{}", feedback.to_emoji());
    }
    grid
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
    use crate::core::Word;
    use crate::game::GameConfig;

    fn play(target: &str, guesses: &[&str]) -> GameSession {
        let mut session =
            GameSession::with_target(Word::new(target).unwrap(), GameConfig::default()).unwrap();
        for guess in guesses {
            for ch in guess.chars() {
                session.handle_char(ch);
            }
            session.handle_submit();
        }
        session
    }

    #[test]
    fn share_grid_for_win() {
        let session = play("APPLE", &["ALLEY", "APPLE"]);
        assert_eq!(share_grid(&session), "Practice 2/6\n🟩🟨⬜🟨⬜\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_for_loss() {
        let session = play("APPLE", &["SOUND"; 6]);
        let grid = share_grid(&session);
        assert!(grid.starts_with("Practice X/6\n"));
        assert_eq!(grid.lines().count(), 7);
    }

    #[test]
    fn tiles_contain_letters() {
        colored::control::set_override(false);
        let session = play("APPLE", &["ALLEY"]);
        assert_eq!(feedback_tiles(&session.guesses()[0]), " A   L   L   E   Y ");
    }

    #[test]
    fn keyboard_has_three_rows_of_letters() {
        colored::control::set_override(false);
        let lines = keyboard_lines(&play("APPLE", &[]));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Q W E R T Y U I O P");
        assert_eq!(lines[2], "Z X C V B N M");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
