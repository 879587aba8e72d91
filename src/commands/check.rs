//! Guess checking command
//!
//! Evaluates one guess against a chosen solution.

use crate::core::{Feedback, KupuError};
use crate::languages::LanguagePack;

/// Result of checking a guess
pub struct CheckResult {
    pub solution_units: Vec<String>,
    pub guess_units: Vec<String>,
    pub feedback: Feedback,
}

/// Evaluate `guess` (raw text, split with the pack) against `solution`
///
/// # Errors
///
/// Returns `KupuError::GuessLengthMismatch` if the two words split into a
/// different number of units.
pub fn check_guess(pack: &LanguagePack, solution: &str, guess: &str) -> Result<CheckResult, KupuError> {
    let puzzle = pack.puzzle(solution);
    let guess_units = pack.split(guess);
    let feedback = puzzle.evaluate(&guess_units)?;

    Ok(CheckResult {
        solution_units: puzzle.units().to_vec(),
        guess_units,
        feedback,
    })
}
