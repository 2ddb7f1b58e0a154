//! Simple line-mode game
//!
//! Text-based play without the TUI: one guess per line.

use crate::game::{GameSession, Key, Notice, dispatch};
use crate::output::{print_board, print_share};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of input asks for
#[derive(Debug, PartialEq, Eq)]
enum LineCommand {
    Quit,
    Guess(String),
}

fn parse_line(line: &str) -> Option<LineCommand> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" => None,
        "/quit" | "/q" | "/exit" => Some(LineCommand::Quit),
        _ => Some(LineCommand::Guess(trimmed.to_string())),
    }
}

/// Feed one typed line into the session as a full row plus Enter
///
/// Longer words are refused up front so extra letters are not silently
/// dropped. The row is cleared afterwards if the guess was refused.
fn submit_line(session: &mut GameSession, word: &str) -> Option<String> {
    let word_length = session.config().word_length;
    if word.chars().count() > word_length {
        return Some(format!("Guess must be exactly {word_length} letters"));
    }

    while session.handle_backspace() {}
    for ch in word.chars() {
        if let Some(key) = Key::from_char(ch) {
            dispatch(session, key);
        }
    }
    let notice = dispatch(session, Key::Enter);

    if matches!(notice, Some(Notice::IncompleteGuess { .. })) {
        while session.handle_backspace() {}
    }
    notice.map(|n| n.to_string())
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut GameSession) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Word of the Day - Simple Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let config = session.config();
    println!(
        "Guess the {}-letter word in {} tries. Type a word and press Enter.",
        config.word_length, config.total_rows
    );
    println!("  {} right letter, right spot", " A ".black().on_green());
    println!("  {} right letter, wrong spot", " A ".black().on_yellow());
    println!("  {} not in the word", " A ".white().on_bright_black());
    println!("\nCommands: '/quit' to exit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.state().is_over() {
        print_board(session);
        print!("Guess {}/{}: ", session.current_row() + 1, config.total_rows);
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            // End of input
            println!();
            return Ok(());
        };
        let line = line.map_err(|e| e.to_string())?;

        match parse_line(&line) {
            None => {}
            Some(LineCommand::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Some(LineCommand::Guess(word)) => {
                if let Some(message) = submit_line(session, &word) {
                    println!("\n{}", message.bright_yellow().bold());
                }
            }
        }
    }

    print_board(session);
    print_share(session);
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameConfig, GameState};

    fn session() -> GameSession {
        GameSession::with_target(Word::new("apple").unwrap(), GameConfig::default()).unwrap()
    }

    #[test]
    fn parse_commands_and_guesses() {
        assert_eq!(parse_line("  "), None);
        assert_eq!(parse_line("/QUIT"), Some(LineCommand::Quit));
        assert_eq!(parse_line("/q"), Some(LineCommand::Quit));
        assert_eq!(
            parse_line(" alley \n"),
            Some(LineCommand::Guess("alley".to_string()))
        );
    }

    #[test]
    fn submit_full_word() {
        let mut game = session();
        assert_eq!(submit_line(&mut game, "alley"), None);
        assert_eq!(game.current_row(), 1);
    }

    #[test]
    fn submit_short_word_is_refused_and_cleared() {
        let mut game = session();
        assert_eq!(
            submit_line(&mut game, "app").as_deref(),
            Some("Please enter 5-letter word")
        );
        assert_eq!(game.current_input(), "");
        assert_eq!(game.current_row(), 0);
    }

    #[test]
    fn submit_long_word_is_refused() {
        let mut game = session();
        assert!(submit_line(&mut game, "apples").is_some());
        assert_eq!(game.current_row(), 0);
    }

    #[test]
    fn submit_winning_word() {
        let mut game = session();
        assert_eq!(
            submit_line(&mut game, "Apple").as_deref(),
            Some("You guessed it!")
        );
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn non_letters_shorten_the_guess() {
        let mut game = session();
        assert_eq!(
            submit_line(&mut game, "ap-le").as_deref(),
            Some("Please enter 5-letter word")
        );
        assert_eq!(game.current_row(), 0);
    }
}
