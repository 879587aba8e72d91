//! Error types for the tokenizer and evaluator

use thiserror::Error;

/// Result alias used throughout the core
pub type Result<T, E = KupuError> = std::result::Result<T, E>;

/// Errors raised by the core engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KupuError {
    /// The alphabet cannot be turned into a matcher
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(#[from] AlphabetError),

    /// A guess was evaluated against a solution with a different unit count
    #[error("guess has {guess} units but the solution has {solution}")]
    GuessLengthMismatch { guess: usize, solution: usize },
}

/// Why an alphabet was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet has no units")]
    Empty,

    #[error("unit at index {0} is an empty string")]
    EmptyUnit(usize),

    #[error("unit '{0}' appears more than once (ignoring case)")]
    DuplicateUnit(String),
}
