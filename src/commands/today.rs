//! Word-of-the-day lookup command
//!
//! Reports which puzzle a date maps to without starting a game.

use crate::core::{Timestamp, Word, WordList, days_since_start, puzzle_index, select_word};

/// Result of looking up a date
pub struct TodayResult {
    pub date: Timestamp,
    pub puzzle_number: i64,
    pub index: usize,
    pub list_len: usize,
    pub word: Word,
}

/// Look up the puzzle for `date`
#[must_use]
pub fn lookup_today(list: &WordList, date: Timestamp) -> TodayResult {
    let puzzle_number = days_since_start(date);

    TodayResult {
        date,
        puzzle_number,
        index: puzzle_index(puzzle_number, list.len()),
        list_len: list.len(),
        word: select_word(list, date).clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::embedded_list;

    #[test]
    fn day_zero_is_first_word() {
        let list = embedded_list().unwrap();
        let result = lookup_today(&list, Timestamp::parse_date("2025-08-01").unwrap());

        assert_eq!(result.puzzle_number, 0);
        assert_eq!(result.index, 0);
        assert_eq!(result.list_len, 28);
        assert_eq!(result.word.text(), "LENNY");
    }

    #[test]
    fn wraps_after_full_rotation() {
        let list = embedded_list().unwrap();
        let result = lookup_today(&list, Timestamp::parse_date("2025-08-30").unwrap());

        assert_eq!(result.puzzle_number, 29);
        assert_eq!(result.index, 1);
        assert_eq!(result.word.text(), "QUAIL");
    }

    #[test]
    fn before_day_zero_counts_backwards() {
        let list = embedded_list().unwrap();
        let result = lookup_today(&list, Timestamp::parse_date("2025-07-31").unwrap());

        assert_eq!(result.puzzle_number, -1);
        assert_eq!(result.index, 27);
        assert_eq!(result.word.text(), "GRAIN");
    }
}
