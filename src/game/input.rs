//! Input dispatch
//!
//! Translates physical key presses and on-screen key clicks into session
//! transitions, and reports anything the player should be told.

use super::keyboard::{BACKSPACE_LABEL, ENTER_LABEL};
use super::session::{GameSession, GameState, RejectReason, SubmitResult};
use std::fmt;

/// A game key, after parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Enter,
}

impl Key {
    /// Parse a typed character
    ///
    /// Letters are uppercased; anything that is not an ASCII letter is `None`.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.is_ascii_alphabetic()
            .then(|| Self::Letter(ch.to_ascii_uppercase()))
    }

    /// Parse a physical key name such as `"a"`, `"Backspace"` or `"Enter"`
    #[must_use]
    pub fn from_physical(name: &str) -> Option<Self> {
        let upper = name.to_ascii_uppercase();
        match upper.as_str() {
            "BACKSPACE" => Some(Self::Backspace),
            "ENTER" => Some(Self::Enter),
            _ => {
                let mut chars = upper.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::from_char(ch),
                    _ => None,
                }
            }
        }
    }

    /// Parse an on-screen key label from `KEY_ROWS`
    #[must_use]
    pub fn from_virtual(label: &str) -> Option<Self> {
        match label {
            BACKSPACE_LABEL => Some(Self::Backspace),
            ENTER_LABEL => Some(Self::Enter),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_uppercase() => Some(Self::Letter(ch)),
                    _ => None,
                }
            }
        }
    }
}

/// Something to show the player after a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    IncompleteGuess { word_length: usize },
    Won { guesses: usize },
    Lost { answer: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess { word_length } => {
                write!(f, "Please enter {word_length}-letter word")
            }
            Self::Won { .. } => write!(f, "You guessed it!"),
            Self::Lost { answer } => write!(f, "Game over. The word was: {answer}"),
        }
    }
}

/// Route one key into the session
///
/// Invalid letters and anything pressed after the game is over are ignored
/// silently and yield `None`.
pub fn dispatch(session: &mut GameSession, key: Key) -> Option<Notice> {
    match key {
        Key::Letter(ch) => {
            session.handle_char(ch);
            None
        }
        Key::Backspace => {
            session.handle_backspace();
            None
        }
        Key::Enter => match session.handle_submit() {
            SubmitResult::Rejected(RejectReason::IncompleteGuess) => {
                Some(Notice::IncompleteGuess {
                    word_length: session.config().word_length,
                })
            }
            SubmitResult::Accepted {
                state: GameState::Won,
                ..
            } => Some(Notice::Won {
                guesses: session.guesses().len(),
            }),
            SubmitResult::Accepted {
                state: GameState::Lost,
                ..
            } => session.revealed_target().map(|target| Notice::Lost {
                answer: target.text().to_string(),
            }),
            SubmitResult::Accepted { .. } | SubmitResult::Ignored => None,
        },
    }
}
