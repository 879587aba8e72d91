//! Orthographic alphabet
//!
//! An alphabet is the ordered set of letter-units a language is written with.
//! Units may span several characters (Māori "wh" and "ng") and may overlap
//! as substrings of one another.

use super::error::{AlphabetError, Result};
use rustc_hash::FxHashSet;
use std::fmt;

/// Ordered set of distinct, non-empty orthographic units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    units: Vec<String>,
}

impl Alphabet {
    /// Create an alphabet from its units, keeping their order
    ///
    /// # Errors
    /// Returns `KupuError::InvalidAlphabet` if:
    /// - No units are given
    /// - A unit is the empty string
    /// - Two units are equal ignoring case
    ///
    /// # Examples
    /// ```
    /// use kimikupu::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new(["a", "wh", "w", "h"]).unwrap();
    /// assert_eq!(alphabet.len(), 4);
    ///
    /// assert!(Alphabet::new(Vec::<String>::new()).is_err());
    /// assert!(Alphabet::new(["a", "A"]).is_err());
    /// ```
    pub fn new<I, S>(units: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let units: Vec<String> = units.into_iter().map(Into::into).collect();

        if units.is_empty() {
            return Err(AlphabetError::Empty.into());
        }

        let mut seen = FxHashSet::default();
        for (index, unit) in units.iter().enumerate() {
            if unit.is_empty() {
                return Err(AlphabetError::EmptyUnit(index).into());
            }
            if !seen.insert(fold(unit)) {
                return Err(AlphabetError::DuplicateUnit(unit.clone()).into());
            }
        }

        Ok(Self { units })
    }

    /// Units in their original order
    #[inline]
    #[must_use]
    pub fn units(&self) -> &[String] {
        &self.units
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always false for a constructed alphabet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Check whether `unit` is one of the alphabet's units, ignoring case
    #[must_use]
    pub fn contains(&self, unit: &str) -> bool {
        let folded = fold(unit);
        self.units.iter().any(|u| fold(u) == folded)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.units.join(" "))
    }
}

/// Fold a single character to its lowercase form
///
/// Characters whose lowercase form is more than one character (e.g. 'İ')
/// are kept as-is so that folding never changes a string's character count.
#[inline]
pub(crate) fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Fold a string for case-insensitive comparison
#[must_use]
pub fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}
