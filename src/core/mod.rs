//! Core domain types for the word-guessing game
//!
//! This module holds the pure game rules: words, word lists, guess evaluation
//! and word-of-the-day selection. Nothing here performs I/O.

mod calendar;
mod feedback;
mod selector;
mod word;
mod word_list;

pub use calendar::{DateError, MS_PER_DAY, Timestamp};
pub use feedback::{Feedback, LetterStatus};
pub use selector::{START_EPOCH, days_since_start, puzzle_index, select_word};
pub use word::{Word, WordError};
pub use word_list::{ConfigError, WordList};
