//! Supported languages
//!
//! Each language carries its orthography, an embedded list of solution
//! words, a list of further words accepted as guesses and definitions. A
//! [`LanguagePack`] combines a language with its configuration into the
//! matcher and filtered word list a game needs.

mod config;
mod embedded;
pub mod loader;
mod pack;

pub use config::{ConfigError, LanguageConfig, Normalization, OKINA};
pub use embedded::{
    HAWAIIAN_GUESSES, HAWAIIAN_WORDS, MAORI_GUESSES, MAORI_WORDS, SAMOAN_GUESSES, SAMOAN_WORDS,
    TAHITIAN_GUESSES, TAHITIAN_WORDS,
};

use embedded::{HAWAIIAN_DEFINITIONS, MAORI_DEFINITIONS, SAMOAN_DEFINITIONS, TAHITIAN_DEFINITIONS};
pub use pack::{DailyWord, LanguagePack, word_of_day};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const HAWAIIAN_ORTHOGRAPHY: &[&str] = &[
    "a", "ā", "e", "ē", "i", "ī", "o", "ō", "u", "ū", "h", "k", "l", "m", "n", "p", "w", "ʻ",
];

const MAORI_ORTHOGRAPHY: &[&str] = &[
    "a", "ā", "e", "ē", "i", "ī", "o", "ō", "u", "ū", "h", "k", "m", "n", "ng", "p", "r", "t", "w",
    "wh",
];

const TAHITIAN_ORTHOGRAPHY: &[&str] = &[
    "a", "ā", "e", "ē", "i", "ī", "o", "ō", "u", "ū", "f", "h", "m", "n", "p", "r", "t", "v", "ʻ",
];

const SAMOAN_ORTHOGRAPHY: &[&str] = &[
    "a", "ā", "e", "ē", "i", "ī", "o", "ō", "u", "ū", "f", "g", "l", "m", "n", "p", "s", "t", "v",
    "ʻ",
];

/// A language the puzzle can be played in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Hawaiian,
    Maori,
    Tahitian,
    Samoan,
}

impl Language {
    pub const ALL: [Self; 4] = [Self::Hawaiian, Self::Maori, Self::Tahitian, Self::Samoan];

    /// Three-letter language code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Hawaiian => "haw",
            Self::Maori => "mao",
            Self::Tahitian => "tah",
            Self::Samoan => "sam",
        }
    }

    /// ASCII identifier, as accepted on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hawaiian => "hawaiian",
            Self::Maori => "maori",
            Self::Tahitian => "tahitian",
            Self::Samoan => "samoan",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hawaiian => "Hawaiian",
            Self::Maori => "Māori",
            Self::Tahitian => "Tahitian",
            Self::Samoan => "Sāmoan",
        }
    }

    /// Letter-units of the language, multigraphs included
    #[must_use]
    pub const fn orthography(self) -> &'static [&'static str] {
        match self {
            Self::Hawaiian => HAWAIIAN_ORTHOGRAPHY,
            Self::Maori => MAORI_ORTHOGRAPHY,
            Self::Tahitian => TAHITIAN_ORTHOGRAPHY,
            Self::Samoan => SAMOAN_ORTHOGRAPHY,
        }
    }

    /// Unfiltered embedded solution words
    #[must_use]
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            Self::Hawaiian => HAWAIIAN_WORDS,
            Self::Maori => MAORI_WORDS,
            Self::Tahitian => TAHITIAN_WORDS,
            Self::Samoan => SAMOAN_WORDS,
        }
    }

    /// Words accepted as guesses that are never picked as the solution
    #[must_use]
    pub const fn valid_guesses(self) -> &'static [&'static str] {
        match self {
            Self::Hawaiian => HAWAIIAN_GUESSES,
            Self::Maori => MAORI_GUESSES,
            Self::Tahitian => TAHITIAN_GUESSES,
            Self::Samoan => SAMOAN_GUESSES,
        }
    }

    /// `(word, definition)` pairs for the words that have one
    #[must_use]
    pub const fn definitions(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Hawaiian => HAWAIIAN_DEFINITIONS,
            Self::Maori => MAORI_DEFINITIONS,
            Self::Tahitian => TAHITIAN_DEFINITIONS,
            Self::Samoan => SAMOAN_DEFINITIONS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language '{0}' (expected one of: hawaiian, maori, tahitian, samoan)")]
pub struct ParseLanguageError(String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    /// Accepts the code or the name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "haw" | "hawaiian" => Ok(Self::Hawaiian),
            "mao" | "mi" | "maori" | "māori" => Ok(Self::Maori),
            "tah" | "ty" | "tahitian" => Ok(Self::Tahitian),
            "sam" | "sm" | "samoan" | "sāmoan" => Ok(Self::Samoan),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}
