//! Game setup shared by the play modes
//!
//! Holds the validated word list and board configuration, and starts new
//! sessions either for the word of the day or for a random practice word.

use crate::core::{ConfigError, Timestamp, WordList};
use crate::game::{GameConfig, GameSession};
use rand::seq::IndexedRandom;

/// Everything needed to start a game
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub list: WordList,
    pub config: GameConfig,
    pub date: Timestamp,
    pub practice: bool,
}

impl GameSetup {
    /// Setup with the default board for `list`
    #[must_use]
    pub fn new(list: WordList, date: Timestamp) -> Self {
        let config = GameConfig::for_list(&list);
        Self {
            list,
            config,
            date,
            practice: false,
        }
    }

    #[must_use]
    pub fn with_rows(mut self, total_rows: usize) -> Self {
        self.config = self.config.with_rows(total_rows);
        self
    }

    #[must_use]
    pub fn with_practice(mut self, practice: bool) -> Self {
        self.practice = practice;
        self
    }

    /// Start a session
    ///
    /// Practice games pick a random word from the list; otherwise the word of
    /// the day for `date` is used.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the board configuration does not fit the list.
    pub fn new_session(&self) -> Result<GameSession, ConfigError> {
        if !self.practice {
            return GameSession::new(&self.list, self.config, self.date);
        }

        let target = self
            .list
            .words()
            .choose(&mut rand::rng())
            .ok_or(ConfigError::EmptyWordList)?;
        log::info!("Started practice game ({} rows)", self.config.total_rows);
        GameSession::with_target(target.clone(), self.config)
    }
}
