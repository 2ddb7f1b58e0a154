//! Game word representation
//!
//! A `Word` is a validated, uppercase run of ASCII letters. Length is not fixed
//! here; the word list decides the length every word in a game must have.

use rustc_hash::FxHashMap;
use std::fmt;

/// An uppercase word made only of the letters `A`-`Z`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalised to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The input is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    ///
    /// let word = Word::new("apple").unwrap();
    /// assert_eq!(word.text(), "APPLE");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("h3llo").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        // Checked before case folding, which can turn ligatures into ASCII
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        text.make_ascii_uppercase();

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word, provided for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count of each letter in the word
    ///
    /// Used by feedback calculation to handle duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("APPLE").unwrap();
        assert_eq!(word.text(), "APPLE");
        assert_eq!(word.chars(), b"APPLE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("quail").unwrap();
        assert_eq!(word.text(), "QUAIL");

        let word2 = Word::new("qUaIl").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_other_lengths() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("letters").unwrap().len(), 7);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("rad1o"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("rad o"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("radi!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cafés"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_creation_rejects_non_ascii_that_folds_to_ascii() {
        assert_eq!(Word::new("\u{FB02}ame"), Err(WordError::NonAscii));
        assert_eq!(Word::new("\u{0131}taly"), Err(WordError::NonAscii));
        assert_eq!(Word::new("stra\u{00DF}e"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'S'), Some(&1));
        assert_eq!(counts.get(&b'P'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'D'), Some(&1));
        assert_eq!(counts.get(&b'Z'), None);
    }

    #[test]
    fn word_char_counts_all_same() {
        let word = Word::new("aaaaa").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'A'), Some(&5));
    }

    #[test]
    fn word_display() {
        let word = Word::new("grain").unwrap();
        assert_eq!(format!("{word}"), "GRAIN");
    }
}
