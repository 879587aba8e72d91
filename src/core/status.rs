//! Per-unit feedback for a guess
//!
//! Each guessed unit is classified as:
//! - Absent (not in the solution, or every occurrence already taken)
//! - Present (in the solution at another, unconsumed position)
//! - Correct (same unit at the same position)
//!
//! Statuses are ordered `Absent < Present < Correct`, which is the order the
//! keyboard aggregate is allowed to move in.

use std::fmt;
use std::str::FromStr;

/// Classification of one guessed unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Absent,
    Present,
    Correct,
}

impl Status {
    /// Square used in the shareable emoji grid
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬜.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        })
    }
}

/// Statuses for every position of one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Feedback(Vec<Status>);

impl Feedback {
    #[must_use]
    pub const fn new(statuses: Vec<Status>) -> Self {
        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == Status::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&s| s == Status::Correct).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == Status::Present).count()
    }

    /// Render as a row of coloured squares
    ///
    /// # Examples
    /// ```
    /// use kimikupu::core::Feedback;
    ///
    /// let feedback: Feedback = "GY-".parse().unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl From<Vec<Status>> for Feedback {
    fn from(statuses: Vec<Status>) -> Self {
        Self(statuses)
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a Status;
    type IntoIter = std::slice::Iter<'a, Status>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse a pattern like "GY-GY" or "🟩🟨⬜🟩🟨" of any length
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let statuses = s
            .chars()
            .map(|ch| Status::from_symbol(ch).ok_or_else(|| format!("Invalid feedback symbol: {ch}")))
            .collect::<Result<Vec<_>, _>>()?;

        if statuses.is_empty() {
            return Err("Empty feedback string".to_string());
        }

        Ok(Self(statuses))
    }
}
