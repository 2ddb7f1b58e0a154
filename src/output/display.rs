//! Display functions for command results

use super::formatters::{feedback_tiles, keyboard_lines, share_grid};
use crate::commands::TodayResult;
use crate::core::Feedback;
use crate::game::GameSession;
use colored::Colorize;

/// Print the puzzle a date maps to
pub fn print_today(result: &TodayResult, reveal: bool) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " {} {}",
        "WORD OF THE DAY".bright_cyan().bold(),
        format!("#{}", result.puzzle_number).bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("   Date:      {}", result.date);
    println!(
        "   Position:  {} of {}",
        result.index + 1,
        result.list_len
    );
    if reveal {
        println!(
            "   Word:      {}",
            result.word.text().bright_green().bold()
        );
    } else {
        println!(
            "   Word:      {}",
            "?".repeat(result.word.len()).bright_black()
        );
    }
}

/// Print the feedback for a single guess
pub fn print_check_result(feedback: &Feedback) {
    println!("\n{}", feedback_tiles(feedback));
    println!(
        "\n   {} correct, {} misplaced",
        feedback.count_correct().to_string().green(),
        feedback.count_present().to_string().yellow()
    );
    if feedback.is_perfect() {
        println!("   {}", "✅ That's the word!".green().bold());
    }
}

/// Print the board so far: completed rows, then empty rows
pub fn print_board(session: &GameSession) {
    let config = session.config();
    println!();
    for feedback in session.guesses() {
        println!("   {}", feedback_tiles(feedback));
    }
    let empty = vec![" _ "; config.word_length].join(" ");
    for _ in session.current_row()..config.total_rows {
        println!("   {}", empty.bright_black());
    }
    println!();
    for line in keyboard_lines(session) {
        println!("   {line}");
    }
    println!();
}

/// Print the shareable summary
pub fn print_share(session: &GameSession) {
    println!("\n{}", share_grid(session));
}
