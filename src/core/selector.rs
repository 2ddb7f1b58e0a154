//! Word-of-the-day selection
//!
//! Day zero is 2025-08-01T00:00:00Z. Each whole day after it advances one
//! position through the word list, wrapping around at the end.

use super::calendar::{MS_PER_DAY, Timestamp};
use super::{Word, WordList};

/// Day zero of the rotation
pub const START_EPOCH: Timestamp = Timestamp::from_millis(1_754_006_400_000);

/// Whole days elapsed since `START_EPOCH`, floored
///
/// Negative for instants before day zero.
#[must_use]
pub const fn days_since_start(date: Timestamp) -> i64 {
    (date.millis() - START_EPOCH.millis()).div_euclid(MS_PER_DAY)
}

/// Non-negative index into a list of `len` words for the given day
///
/// # Panics
/// Panics if `len` is zero.
#[must_use]
pub fn puzzle_index(days: i64, len: usize) -> usize {
    assert!(len > 0, "word list must not be empty");
    days.rem_euclid(len as i64) as usize
}

/// Select the word of the day
///
/// Pure: the same list and date always give the same word.
///
/// # Examples
/// ```
/// use wordle_daily::core::{select_word, Timestamp, Word, WordList};
///
/// let list = WordList::new(vec![Word::new("apple").unwrap()]).unwrap();
/// let word = select_word(&list, Timestamp::now());
/// assert_eq!(word.text(), "APPLE");
/// ```
#[must_use]
pub fn select_word(list: &WordList, date: Timestamp) -> &Word {
    let index = puzzle_index(days_since_start(date), list.len());
    &list.words()[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(words: &[&str]) -> WordList {
        WordList::new(words.iter().map(|w| Word::new(*w).unwrap()).collect()).unwrap()
    }

    fn date(s: &str) -> Timestamp {
        Timestamp::parse_date(s).unwrap()
    }

    #[test]
    fn day_zero_is_start_epoch() {
        assert_eq!(date("2025-08-01"), START_EPOCH);
        assert_eq!(days_since_start(START_EPOCH), 0);
    }

    #[test]
    fn days_are_floored() {
        let late_on_day_zero = Timestamp::from_millis(START_EPOCH.millis() + MS_PER_DAY - 1);
        assert_eq!(days_since_start(late_on_day_zero), 0);
        assert_eq!(days_since_start(date("2025-08-02")), 1);

        let just_before = Timestamp::from_millis(START_EPOCH.millis() - 1);
        assert_eq!(days_since_start(just_before), -1);
    }

    #[test]
    fn index_wraps_and_stays_non_negative() {
        assert_eq!(puzzle_index(0, 28), 0);
        assert_eq!(puzzle_index(27, 28), 27);
        assert_eq!(puzzle_index(28, 28), 0);
        assert_eq!(puzzle_index(-1, 28), 27);
        assert_eq!(puzzle_index(-29, 28), 27);
    }

    #[test]
    fn single_word_list_always_selects_it() {
        let words = list(&["apple"]);
        for d in ["1999-01-01", "2025-08-01", "2030-06-15"] {
            assert_eq!(select_word(&words, date(d)).text(), "APPLE");
        }
    }

    #[test]
    fn rotates_through_list_by_day() {
        let words = list(&["lenny", "quail", "order"]);
        assert_eq!(select_word(&words, date("2025-08-01")).text(), "LENNY");
        assert_eq!(select_word(&words, date("2025-08-02")).text(), "QUAIL");
        assert_eq!(select_word(&words, date("2025-08-03")).text(), "ORDER");
        assert_eq!(select_word(&words, date("2025-08-04")).text(), "LENNY");
        assert_eq!(select_word(&words, date("2025-07-31")).text(), "ORDER");
    }

    #[test]
    fn selection_is_pure() {
        let words = list(&["lenny", "quail", "order", "rigby"]);
        let when = date("2026-10-18");
        let first = select_word(&words, when).clone();
        for _ in 0..10 {
            assert_eq!(select_word(&words, when), &first);
        }
    }
}
