//! Guess check command
//!
//! Scores a single guess against a target without running a game.

use crate::core::{Feedback, Word};

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if the guess is not a valid word or its length differs
/// from the target's.
pub fn check_guess(guess: &str, target: &Word) -> Result<Feedback, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if guess.len() != target.len() {
        return Err(format!(
            "Guess must be exactly {} letters, got {}",
            target.len(),
            guess.len()
        ));
    }

    Ok(Feedback::calculate(&guess, target))
}
