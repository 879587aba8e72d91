//! KimiKupu
//!
//! A Wordle-style puzzle engine for Polynesian orthographies, where a single
//! letter may be written with several characters (Māori "wh" and "ng").
//!
//! # Quick Start
//!
//! ```rust
//! use kimikupu::core::{Matcher, Status, evaluate_guess};
//!
//! // Build a matcher; multigraphs are matched before their parts
//! let matcher = Matcher::build(["a", "e", "h", "r", "w", "wh"]).unwrap();
//! assert_eq!(matcher.split("whare"), ["wh", "a", "r", "e"]);
//!
//! // Score a guess given as letter-units
//! let feedback = evaluate_guess(&["wh", "e", "r", "a"], "whare", &matcher).unwrap();
//! assert_eq!(feedback.statuses()[0], Status::Correct);
//! println!("{}", feedback.to_emoji());
//! ```

// Tokenizer and evaluator
pub mod core;

// Languages, configuration and word lists
pub mod languages;

// Game session and sharing
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
