//! Guess evaluation and per-letter feedback
//!
//! Feedback is one `LetterStatus` per position of the guess:
//! - `Absent`  = letter not in the target (or all copies already used up)
//! - `Present` = letter in the target, wrong position
//! - `Correct` = letter in the correct position

use super::Word;
use rustc_hash::FxHashSet;

/// Status of a single guessed letter
///
/// Ordered so that a better finding compares greater:
/// `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Whether the letter was found in the target at all
    #[inline]
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Present | Self::Correct)
    }

    /// Emoji tile for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one evaluated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    guess: Word,
    statuses: Vec<LetterStatus>,
}

impl Feedback {
    /// Evaluate `guess` against `target`
    ///
    /// Implements the standard duplicate-letter rules:
    /// 1. Count the target's letters
    /// 2. First pass: exact matches are `Correct` and consume one copy
    /// 3. Second pass, left to right: remaining letters are `Present` while
    ///    copies remain, otherwise `Absent`
    ///
    /// A letter is therefore marked found at most as many times as it occurs
    /// in the target.
    ///
    /// # Panics
    /// Panics if `guess` and `target` differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("alley").unwrap();
    /// let target = Word::new("apple").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.statuses(), &[Correct, Present, Absent, Present, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        assert_eq!(
            guess.len(),
            target.len(),
            "guess and target must have the same length"
        );

        let mut statuses = vec![LetterStatus::Absent; guess.len()];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                statuses[i] = LetterStatus::Correct;
                if let Some(count) = target_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, while copies remain
        for (status, &letter) in statuses.iter_mut().zip(guess.chars()) {
            if *status == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&letter)
                && *count > 0
            {
                *status = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self {
            guess: guess.clone(),
            statuses,
        }
    }

    /// The evaluated guess
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Per-position statuses, same length as the guess
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.statuses
    }

    /// Letters paired with their status, in guess order
    pub fn letters(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        self.guess.chars().iter().copied().zip(self.statuses.iter().copied())
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.statuses.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.statuses
            .iter()
            .filter(|&&s| s == LetterStatus::Correct)
            .count()
    }

    /// Count the number of present-but-misplaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.statuses
            .iter()
            .filter(|&&s| s == LetterStatus::Present)
            .count()
    }

    /// Letters safe to burn after this guess
    ///
    /// A letter qualifies when it is `Absent` somewhere in the guess and is
    /// not `Correct` or `Present` anywhere in the same guess. Such a letter
    /// does not occur in the target at all.
    #[must_use]
    pub fn absent_letters(&self) -> FxHashSet<u8> {
        let found: FxHashSet<u8> = self
            .letters()
            .filter(|(_, status)| status.is_found())
            .map(|(letter, _)| letter)
            .collect();

        self.letters()
            .filter(|&(letter, status)| status == LetterStatus::Absent && !found.contains(&letter))
            .map(|(letter, _)| letter)
            .collect()
    }

    /// Convert to an emoji string like "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses.iter().map(|s| s.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn eval(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn correct_exactly_where_letters_match() {
        for (guess, target) in [
            ("crane", "slate"),
            ("sound", "order"),
            ("halls", "salts"),
            ("goose", "onion"),
        ] {
            let feedback = eval(guess, target);
            for (i, status) in feedback.statuses().iter().enumerate() {
                let same = guess.as_bytes()[i] == target.as_bytes()[i];
                assert_eq!(*status == Correct, same, "{guess} vs {target} at {i}");
            }
        }
    }

    #[test]
    fn all_absent() {
        let feedback = eval("abcde", "fghij");
        assert_eq!(feedback.statuses(), &[Absent; 5]);
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn all_correct() {
        let feedback = eval("tango", "tango");
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count_correct(), 5);
        assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn alley_against_apple() {
        // A correct, first L present (APPLE has one L), second L used up,
        // E present, Y absent
        let feedback = eval("alley", "apple");
        assert_eq!(
            feedback.statuses(),
            &[Correct, Present, Absent, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_capped_by_target_count() {
        // SPEED has two E's; ERASE has two E's, so both get marked
        let feedback = eval("erase", "speed");
        let found_e = feedback
            .letters()
            .filter(|&(l, s)| l == b'E' && s.is_found())
            .count();
        assert_eq!(found_e, 2);
        assert_eq!(
            feedback.statuses(),
            &[Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: the second O is in place, the first is misplaced
        let feedback = eval("robot", "floor");
        assert_eq!(
            feedback.statuses(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn duplicate_letters_left_to_right_tie_break() {
        // LENNY has one E; the leftmost misplaced E wins
        let feedback = eval("geese", "lenny");
        assert_eq!(
            feedback.statuses(),
            &[Absent, Correct, Absent, Absent, Absent]
        );

        let feedback = eval("eerie", "liver");
        assert_eq!(
            feedback.statuses(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn absent_letters_excludes_found_letters() {
        // Second L is absent but L was found, so it must not burn
        let burned = eval("alley", "apple").absent_letters();
        assert!(burned.contains(&b'Y'));
        assert!(!burned.contains(&b'L'));
        assert!(!burned.contains(&b'A'));
        assert!(!burned.contains(&b'E'));
        assert_eq!(burned.len(), 1);
    }

    #[test]
    fn absent_letters_all_absent_word() {
        let burned = eval("abcde", "fghij").absent_letters();
        assert_eq!(burned.len(), 5);
    }

    #[test]
    fn emoji_rendering() {
        let feedback = eval("alley", "apple");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟨⬜");
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn length_mismatch_panics() {
        let _ = eval("cat", "apple");
    }
}
