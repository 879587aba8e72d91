//! Core tokenizer and evaluator
//!
//! Pure, synchronous types with no I/O: an alphabet of letter-units, the
//! matcher that splits words into those units, and the puzzle that scores
//! guesses against a solution.

mod alphabet;
mod error;
mod evaluate;
mod matcher;
mod status;

pub use alphabet::{Alphabet, fold};
pub use error::{AlphabetError, KupuError, Result};
pub use evaluate::{KeyboardStatuses, Puzzle, evaluate_guess, keyboard_statuses};
pub use matcher::Matcher;
pub use status::{Feedback, Status};
