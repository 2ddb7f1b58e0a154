//! Word lists for the word of the day
//!
//! The default rotation is compiled into the binary; custom lists can be
//! loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn rotation_starts_with_lenny() {
        assert_eq!(WORDS.first(), Some(&"LENNY"));
        assert_eq!(WORDS.last(), Some(&"GRAIN"));
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 28, "Expected 28 words in the rotation");
    }
}
