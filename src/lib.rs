//! Word of the Day
//!
//! A daily word-guessing game: one deterministic word per day, a fixed number
//! of attempts, and per-letter feedback for every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{Timestamp, Word, WordList};
//! use wordle_daily::game::{GameConfig, GameSession, GameState, Key, dispatch};
//!
//! let list = WordList::new(vec![Word::new("apple").unwrap()]).unwrap();
//! let mut session = GameSession::new(&list, GameConfig::default(), Timestamp::now()).unwrap();
//!
//! for ch in "APPLE".chars() {
//!     dispatch(&mut session, Key::Letter(ch));
//! }
//! let notice = dispatch(&mut session, Key::Enter);
//!
//! assert_eq!(session.state(), GameState::Won);
//! assert_eq!(notice.unwrap().to_string(), "You guessed it!");
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
