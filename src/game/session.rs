//! Game session state machine
//!
//! A `GameSession` owns everything that changes during play: completed
//! guesses, the row being typed, keyboard knowledge and the game state. All
//! mutation goes through `handle_char`, `handle_backspace` and `handle_submit`.
//! Once the game is won or lost every transition is a no-op.

use super::keyboard::{KeyState, Keyboard};
use crate::core::{
    ConfigError, Feedback, Timestamp, Word, WordList, days_since_start, select_word,
};
use std::collections::BTreeSet;

/// Most rows a board may have
pub const MAX_ROWS: usize = 26;

/// Board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub total_rows: usize,
    pub word_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_rows: 6,
            word_length: 5,
        }
    }
}

impl GameConfig {
    /// Default rows, word length taken from `list`
    #[must_use]
    pub fn for_list(list: &WordList) -> Self {
        Self {
            word_length: list.word_length(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_rows(mut self, total_rows: usize) -> Self {
        self.total_rows = total_rows;
        self
    }
}

/// Overall game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Active,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Why a submit was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    IncompleteGuess,
}

/// Outcome of `GameSession::handle_submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// The guess was evaluated and recorded
    Accepted {
        feedback: Feedback,
        state: GameState,
    },
    /// Nothing changed; the player should be told why
    Rejected(RejectReason),
    /// The game is already over; nothing changed and nothing to report
    Ignored,
}

/// One game, from the first keystroke to win or loss
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    target: Word,
    puzzle_number: Option<i64>,
    guesses: Vec<Feedback>,
    current_input: String,
    state: GameState,
    keyboard: Keyboard,
}

impl GameSession {
    /// Start the word-of-the-day game for `date`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the row count is outside `1..=MAX_ROWS` or
    /// the word length differs from the list's.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Timestamp, Word, WordList};
    /// use wordle_daily::game::{GameConfig, GameSession, GameState};
    ///
    /// let list = WordList::new(vec![Word::new("apple").unwrap()]).unwrap();
    /// let session = GameSession::new(&list, GameConfig::default(), Timestamp::now()).unwrap();
    /// assert_eq!(session.state(), GameState::Active);
    /// ```
    pub fn new(list: &WordList, config: GameConfig, date: Timestamp) -> Result<Self, ConfigError> {
        if config.word_length != list.word_length() {
            return Err(ConfigError::WordLengthMismatch {
                configured: config.word_length,
                list: list.word_length(),
            });
        }

        let target = select_word(list, date).clone();
        let mut session = Self::with_target(target, config)?;
        session.puzzle_number = Some(days_since_start(date));

        log::info!(
            "Started puzzle #{} for {date} ({} rows)",
            days_since_start(date),
            config.total_rows
        );
        Ok(session)
    }

    /// Start a game against an explicit target, e.g. for practice
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the row count is outside `1..=MAX_ROWS` or
    /// the target's length differs from the configured word length.
    pub fn with_target(target: Word, config: GameConfig) -> Result<Self, ConfigError> {
        if config.total_rows == 0 {
            return Err(ConfigError::NoRows);
        }
        if config.total_rows > MAX_ROWS {
            return Err(ConfigError::TooManyRows {
                requested: config.total_rows,
                max: MAX_ROWS,
            });
        }
        if target.len() != config.word_length {
            return Err(ConfigError::WordLengthMismatch {
                configured: config.word_length,
                list: target.len(),
            });
        }

        Ok(Self {
            config,
            target,
            puzzle_number: None,
            guesses: Vec::with_capacity(config.total_rows),
            current_input: String::with_capacity(config.word_length),
            state: GameState::Active,
            keyboard: Keyboard::new(),
        })
    }

    /// Append a letter to the current row
    ///
    /// Only `A`-`Z` are accepted, and only while the row has room. Returns
    /// whether the row changed.
    pub fn handle_char(&mut self, ch: char) -> bool {
        if self.state.is_over()
            || !ch.is_ascii_uppercase()
            || self.current_input.len() >= self.config.word_length
        {
            return false;
        }
        self.current_input.push(ch);
        true
    }

    /// Remove the last letter of the current row, if any
    ///
    /// Returns whether the row changed.
    pub fn handle_backspace(&mut self) -> bool {
        if self.state.is_over() {
            return false;
        }
        self.current_input.pop().is_some()
    }

    /// Submit the current row for evaluation
    pub fn handle_submit(&mut self) -> SubmitResult {
        if self.state.is_over() {
            return SubmitResult::Ignored;
        }
        if self.current_input.len() != self.config.word_length {
            log::debug!(
                "Rejected incomplete guess '{}' ({}/{} letters)",
                self.current_input,
                self.current_input.len(),
                self.config.word_length
            );
            return SubmitResult::Rejected(RejectReason::IncompleteGuess);
        }

        // The row only ever holds A-Z, so it is always a valid word
        let Ok(guess) = Word::new(self.current_input.as_str()) else {
            return SubmitResult::Rejected(RejectReason::IncompleteGuess);
        };
        self.current_input.clear();

        let feedback = Feedback::calculate(&guess, &self.target);
        self.keyboard.record(&feedback);
        self.guesses.push(feedback.clone());

        if feedback.is_perfect() {
            self.state = GameState::Won;
            log::info!("Solved in {}/{}", self.guesses.len(), self.config.total_rows);
        } else if self.guesses.len() == self.config.total_rows {
            self.state = GameState::Lost;
            log::info!("Out of rows, the word was {}", self.target);
        }

        log::debug!(
            "Row {}: {} {}",
            self.guesses.len(),
            guess,
            feedback.to_emoji()
        );

        SubmitResult::Accepted {
            feedback,
            state: self.state,
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Completed guesses with their feedback, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Feedback] {
        &self.guesses
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Index of the row being typed
    ///
    /// Equals the number of completed guesses; reaches `total_rows` when the
    /// game is lost.
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.guesses.len()
    }

    /// Days since the rotation started, `None` for practice games
    #[must_use]
    pub const fn puzzle_number(&self) -> Option<i64> {
        self.puzzle_number
    }

    /// The target word, only once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.state.is_over().then_some(&self.target)
    }

    #[must_use]
    pub fn burned_letters(&self) -> BTreeSet<char> {
        self.keyboard.burned_letters()
    }

    /// Visual state of a keyboard letter
    #[must_use]
    pub fn key_state(&self, letter: char) -> KeyState {
        self.keyboard.key_state(letter)
    }
}
