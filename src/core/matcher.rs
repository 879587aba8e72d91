//! Longest-first orthographic tokenizer
//!
//! A `Matcher` splits a word into the letter-units of an alphabet. Units are
//! tried longest first so that a multigraph like "wh" always wins over the
//! "w" and "h" it contains. Characters that no unit matches are dropped.

use super::alphabet::{Alphabet, fold_char};
use super::error::Result;

/// A unit prepared for matching
#[derive(Debug, Clone, PartialEq, Eq)]
struct MatchUnit {
    folded: Vec<char>,
}

/// Reusable splitter built from an [`Alphabet`]
///
/// Immutable after construction; share it freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    alphabet: Alphabet,
    units: Vec<MatchUnit>,
}

impl Matcher {
    /// Build a matcher from a validated alphabet
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        let mut units: Vec<MatchUnit> = alphabet
            .units()
            .iter()
            .map(|u| MatchUnit {
                folded: u.chars().map(fold_char).collect(),
            })
            .collect();

        // Stable: equal lengths keep alphabet order
        units.sort_by(|a, b| b.folded.len().cmp(&a.folded.len()));

        tracing::debug!(
            units = units.len(),
            longest = units.first().map_or(0, |u| u.folded.len()),
            "built orthography matcher"
        );

        Self { alphabet, units }
    }

    /// Build a matcher straight from unit strings
    ///
    /// # Errors
    /// Returns `KupuError::InvalidAlphabet` if the units do not form a valid
    /// [`Alphabet`].
    ///
    /// # Examples
    /// ```
    /// use kimikupu::core::Matcher;
    ///
    /// let matcher = Matcher::build(["a", "e", "h", "r", "w", "wh"]).unwrap();
    /// assert_eq!(matcher.split("whare"), ["wh", "a", "r", "e"]);
    /// ```
    pub fn build<I, S>(units: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Alphabet::new(units).map(Self::new)
    }

    /// The alphabet this matcher was built from
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Split a word into letter-units
    ///
    /// Matching ignores case; each emitted unit keeps the casing it had in
    /// `word`. Unmatched characters are skipped.
    ///
    /// # Examples
    /// ```
    /// use kimikupu::core::Matcher;
    ///
    /// let matcher = Matcher::build(["a", "g", "n", "ng", "r", "i"]).unwrap();
    /// assert_eq!(matcher.split("Rangi!"), ["R", "a", "ng", "i"]);
    /// assert!(matcher.split("").is_empty());
    /// ```
    #[must_use]
    pub fn split(&self, word: &str) -> Vec<String> {
        self.scan(word).0
    }

    /// Number of units `word` splits into
    #[must_use]
    pub fn unit_count(&self, word: &str) -> usize {
        self.scan(word).0.len()
    }

    /// Check whether every character of `word` belongs to some unit
    #[must_use]
    pub fn is_fully_tokenized(&self, word: &str) -> bool {
        self.scan(word).1 == 0
    }

    /// Check whether `unit` is exactly one alphabet unit, ignoring case
    #[must_use]
    pub fn contains_unit(&self, unit: &str) -> bool {
        self.alphabet.contains(unit)
    }

    /// Split `word`, also counting the characters that were dropped
    fn scan(&self, word: &str) -> (Vec<String>, usize) {
        let chars: Vec<char> = word.chars().collect();
        let folded: Vec<char> = chars.iter().copied().map(fold_char).collect();

        let mut units = Vec::new();
        let mut dropped = 0;
        let mut pos = 0;

        while pos < chars.len() {
            if let Some(len) = self.longest_at(&folded[pos..]) {
                units.push(chars[pos..pos + len].iter().collect());
                pos += len;
            } else {
                dropped += 1;
                pos += 1;
            }
        }

        (units, dropped)
    }

    /// Length of the longest unit that prefixes `rest`
    fn longest_at(&self, rest: &[char]) -> Option<usize> {
        self.units
            .iter()
            .find(|u| rest.starts_with(&u.folded))
            .map(|u| u.folded.len())
    }
}
