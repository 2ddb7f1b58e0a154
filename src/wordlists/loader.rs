//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded rotation.

use super::WORDS;
use crate::core::{ConfigError, Word, WordList};
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are skipped. Lines that are not valid words are skipped with a
/// warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_daily::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!("Skipping line {}: '{trimmed}' ({e})", i + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_daily::wordlists::loader::words_from_slice;
/// use wordle_daily::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

/// The embedded rotation as a validated list
///
/// # Errors
///
/// Returns a `ConfigError` if the embedded data is empty or mixes lengths.
pub fn embedded_list() -> Result<WordList, ConfigError> {
    WordList::new(words_from_slice(WORDS))
}

/// Load and validate a word list file
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if its valid words are
/// empty or mixed in length.
pub fn list_from_file<P: AsRef<Path>>(path: P) -> Result<WordList> {
    let path = path.as_ref();
    let words = load_from_file(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    let list = WordList::new(words)
        .with_context(|| format!("Invalid word list {}", path.display()))?;
    log::info!("Loaded {} words from {}", list.len(), path.display());
    Ok(list)
}
