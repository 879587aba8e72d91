//! Guess evaluation
//!
//! A `Puzzle` pairs a matcher with a solution and evaluates guesses against
//! it. The matcher, the solution and the guess history belong together: when
//! the language or the puzzle changes, build a new `Puzzle` rather than
//! mixing a guess from one alphabet with a solution from another.

use super::alphabet::fold;
use super::error::{KupuError, Result};
use super::matcher::Matcher;
use super::status::{Feedback, Status};
use rustc_hash::FxHashMap;

/// A solution word tokenized against an alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    matcher: Matcher,
    solution: String,
    units: Vec<String>,
    folded: Vec<String>,
}

impl Puzzle {
    /// Tokenize `solution` with `matcher`
    ///
    /// # Examples
    /// ```
    /// use kimikupu::core::{Matcher, Puzzle, Status};
    ///
    /// let matcher = Matcher::build(["a", "h", "l", "o"]).unwrap();
    /// let puzzle = Puzzle::new(matcher, "aloha");
    ///
    /// let feedback = puzzle.evaluate(&["a", "a", "l", "o", "h"]).unwrap();
    /// assert_eq!(feedback.statuses()[0], Status::Correct);
    /// assert_eq!(feedback.count_present(), 4);
    /// ```
    #[must_use]
    pub fn new(matcher: Matcher, solution: impl Into<String>) -> Self {
        let solution = solution.into();
        let units = matcher.split(&solution);
        let folded = units.iter().map(|u| fold(u)).collect();

        Self {
            matcher,
            solution,
            units,
            folded,
        }
    }

    #[inline]
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Solution split into letter-units
    #[inline]
    #[must_use]
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Number of units in the solution
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Check whether a guess spells the solution, ignoring case
    #[must_use]
    pub fn is_solution<S: AsRef<str>>(&self, guess: &[S]) -> bool {
        guess.len() == self.folded.len()
            && guess
                .iter()
                .zip(&self.folded)
                .all(|(g, s)| fold(g.as_ref()) == *s)
    }

    /// Classify each unit of `guess` against the solution
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches correct and consume them
    /// 2. Second pass: for the rest, take the leftmost unconsumed equal unit
    ///    in the solution and mark present, otherwise absent
    ///
    /// # Errors
    /// Returns `KupuError::GuessLengthMismatch` if the guess does not have as
    /// many units as the solution.
    #[allow(clippy::needless_range_loop)] // i indexes guess, solution, result and consumed
    pub fn evaluate<S: AsRef<str>>(&self, guess: &[S]) -> Result<Feedback> {
        self.check_len(guess.len())?;

        let guess: Vec<String> = guess.iter().map(|u| fold(u.as_ref())).collect();
        let n = guess.len();
        let mut result: Vec<Option<Status>> = vec![None; n];
        let mut consumed = vec![false; n];

        // First pass: correct positions
        for i in 0..n {
            if guess[i] == self.folded[i] {
                result[i] = Some(Status::Correct);
                consumed[i] = true;
            }
        }

        // Second pass: present or absent
        for i in 0..n {
            if result[i].is_some() {
                continue;
            }

            let available = self
                .folded
                .iter()
                .enumerate()
                .position(|(j, unit)| !consumed[j] && *unit == guess[i]);

            result[i] = Some(match available {
                Some(j) => {
                    consumed[j] = true;
                    Status::Present
                }
                None => Status::Absent,
            });
        }

        Ok(result
            .into_iter()
            .map(|s| s.unwrap_or(Status::Absent))
            .collect::<Vec<_>>()
            .into())
    }

    /// Best-known status of every unit across `guesses`
    ///
    /// Each position is classified on its own (absent if the unit is nowhere
    /// in the solution, correct if it matches this position, present
    /// otherwise); the aggregate only ever moves up.
    ///
    /// # Errors
    /// Returns `KupuError::GuessLengthMismatch` for the first guess whose
    /// length differs from the solution's.
    pub fn keyboard<G, S>(&self, guesses: &[G]) -> Result<KeyboardStatuses>
    where
        G: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut keyboard = KeyboardStatuses::default();

        for guess in guesses {
            let guess = guess.as_ref();
            self.check_len(guess.len())?;

            for (unit, solution_unit) in guess.iter().zip(&self.folded) {
                let folded = fold(unit.as_ref());
                let status = if !self.folded.contains(&folded) {
                    Status::Absent
                } else if folded == *solution_unit {
                    Status::Correct
                } else {
                    Status::Present
                };
                keyboard.record(&folded, status);
            }
        }

        Ok(keyboard)
    }

    fn check_len(&self, guess: usize) -> Result<()> {
        if guess == self.units.len() {
            Ok(())
        } else {
            Err(KupuError::GuessLengthMismatch {
                guess,
                solution: self.units.len(),
            })
        }
    }
}

/// Evaluate one guess against `solution` tokenized with `matcher`
///
/// # Errors
/// Returns `KupuError::GuessLengthMismatch` on a unit-count mismatch.
pub fn evaluate_guess<S: AsRef<str>>(guess: &[S], solution: &str, matcher: &Matcher) -> Result<Feedback> {
    Puzzle::new(matcher.clone(), solution).evaluate(guess)
}

/// Aggregate keyboard statuses for a guess history
///
/// # Errors
/// Returns `KupuError::GuessLengthMismatch` on a unit-count mismatch.
pub fn keyboard_statuses<G, S>(guesses: &[G], solution: &str, matcher: &Matcher) -> Result<KeyboardStatuses>
where
    G: AsRef<[S]>,
    S: AsRef<str>,
{
    Puzzle::new(matcher.clone(), solution).keyboard(guesses)
}

/// Best-known status per letter-unit, keyed case-insensitively
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatuses {
    statuses: FxHashMap<String, Status>,
}

impl KeyboardStatuses {
    /// Status recorded for `unit`, or `None` if it has not been guessed
    #[must_use]
    pub fn get(&self, unit: &str) -> Option<Status> {
        self.statuses.get(&fold(unit)).copied()
    }

    /// Record `status` for `unit` unless a better one is already known
    ///
    /// Returns the status now held for the unit.
    pub fn record(&mut self, unit: &str, status: Status) -> Status {
        let entry = self.statuses.entry(fold(unit)).or_insert(status);
        *entry = (*entry).max(status);
        *entry
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Iterate over (folded unit, status) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Status)> {
        self.statuses.iter().map(|(unit, &status)| (unit.as_str(), status))
    }
}
