//! Validated word list
//!
//! The selection pool for the word of the day. Guaranteed non-empty and
//! uniform in word length once constructed.

use super::Word;
use std::fmt;

/// Fatal configuration problems detected before a game starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyWordList,
    MismatchedWordLength {
        word: String,
        expected: usize,
        found: usize,
    },
    WordLengthMismatch {
        configured: usize,
        list: usize,
    },
    NoRows,
    TooManyRows {
        requested: usize,
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty"),
            Self::MismatchedWordLength {
                word,
                expected,
                found,
            } => write!(
                f,
                "Word '{word}' has {found} letters, expected {expected} like the rest of the list"
            ),
            Self::WordLengthMismatch { configured, list } => write!(
                f,
                "Game is configured for {configured}-letter words but the list has {list}-letter words"
            ),
            Self::NoRows => write!(f, "A game needs at least one row"),
            Self::TooManyRows { requested, max } => {
                write!(f, "A game can have at most {max} rows, got {requested}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Ordered, non-empty list of same-length words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list, checking it is non-empty and uniform in length
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyWordList` for an empty input and
    /// `ConfigError::MismatchedWordLength` for the first word whose length
    /// differs from the first entry.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Word, WordList};
    ///
    /// let list = WordList::new(vec![Word::new("apple").unwrap()]).unwrap();
    /// assert_eq!(list.word_length(), 5);
    ///
    /// assert!(WordList::new(Vec::new()).is_err());
    /// ```
    pub fn new(words: Vec<Word>) -> Result<Self, ConfigError> {
        let Some(first) = words.first() else {
            return Err(ConfigError::EmptyWordList);
        };
        let expected = first.len();

        if let Some(bad) = words.iter().find(|w| w.len() != expected) {
            return Err(ConfigError::MismatchedWordLength {
                word: bad.text().to_string(),
                expected,
                found: bad.len(),
            });
        }

        Ok(Self { words })
    }

    /// Length shared by every word in the list
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.words[0].len()
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false once constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, in selection order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn accepts_uniform_list() {
        let list = WordList::new(words(&["lenny", "quail", "order"])).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.word_length(), 5);
        assert_eq!(list.words()[1].text(), "QUAIL");
        assert!(!list.is_empty());
    }

    #[test]
    fn rejects_empty_list() {
        assert_eq!(WordList::new(Vec::new()), Err(ConfigError::EmptyWordList));
    }

    #[test]
    fn rejects_mixed_lengths() {
        let err = WordList::new(words(&["lenny", "cat", "order"])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MismatchedWordLength {
                word: "CAT".to_string(),
                expected: 5,
                found: 3,
            }
        );
        assert!(err.to_string().contains("CAT"));
    }

    #[test]
    fn other_uniform_lengths_are_fine() {
        let list = WordList::new(words(&["cat", "dog"])).unwrap();
        assert_eq!(list.word_length(), 3);
    }
}
