//! Keyboard state and on-screen key layout
//!
//! Tracks the best status each letter has reached across all submitted
//! guesses, and the letters confirmed absent from the target ("burned").

use crate::core::{Feedback, LetterStatus};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

/// Label of the on-screen backspace key
pub const BACKSPACE_LABEL: &str = "←";

/// Label of the on-screen submit key
pub const ENTER_LABEL: &str = "ENTER";

/// On-screen keyboard rows, top to bottom
pub const KEY_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L", BACKSPACE_LABEL],
    &["Z", "X", "C", "V", "B", "N", "M", ENTER_LABEL],
];

/// Visual state of a letter key
///
/// Precedence when combining is `Correct > Present > Burned > Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyState {
    Default,
    Burned,
    Present,
    Correct,
}

/// Accumulated keyboard knowledge for one game
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    best: FxHashMap<u8, LetterStatus>,
    burned: FxHashSet<u8>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess's feedback into the keyboard
    ///
    /// Burned letters only ever grow. A letter that has been `Correct` or
    /// `Present` in any guess is never burned.
    pub fn record(&mut self, feedback: &Feedback) {
        for (letter, status) in feedback.letters() {
            self.best
                .entry(letter)
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }

        for letter in feedback.absent_letters() {
            if !self.is_found(letter) {
                self.burned.insert(letter);
            }
        }
    }

    fn is_found(&self, letter: u8) -> bool {
        self.best.get(&letter).is_some_and(|s| s.is_found())
    }

    /// Visual state for a letter key
    ///
    /// Anything that is not an uppercase ASCII letter is `Default`.
    #[must_use]
    pub fn key_state(&self, letter: char) -> KeyState {
        let Ok(byte) = u8::try_from(letter) else {
            return KeyState::Default;
        };

        match self.best.get(&byte) {
            Some(LetterStatus::Correct) => KeyState::Correct,
            Some(LetterStatus::Present) => KeyState::Present,
            _ if self.burned.contains(&byte) => KeyState::Burned,
            _ => KeyState::Default,
        }
    }

    /// All burned letters, in alphabetical order
    #[must_use]
    pub fn burned_letters(&self) -> BTreeSet<char> {
        self.burned.iter().map(|&b| char::from(b)).collect()
    }
}
