//! Word list loading utilities
//!
//! Provides functions to load word lists from files and to reduce a raw list
//! to the words a puzzle can use.

use super::LanguageConfig;
use crate::core::{Matcher, fold};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are skipped and surrounding whitespace trimmed. Anything after
/// a tab (a definition) is ignored. No filtering
/// by orthography happens here; see [`filter_words`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use kimikupu::languages::loader::load_from_file;
///
/// let words = load_from_file("data/mao.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(|line| line.split('\t').next().unwrap_or(line).trim())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect())
}

/// Normalize, lowercase and deduplicate `words`, keeping only those that
/// tokenize cleanly into exactly `config.word_length` units
///
/// Order of first appearance is preserved.
pub fn filter_words<I, S>(words: I, matcher: &Matcher, config: &LanguageConfig) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    let mut kept = Vec::new();
    let mut wrong_length = 0usize;

    for raw in words {
        let word = fold(&config.normalization.apply(raw.as_ref().trim()));

        if !matcher.is_fully_tokenized(&word) {
            tracing::warn!(word = %word, "word contains characters outside the orthography");
            continue;
        }
        if matcher.unit_count(&word) != config.word_length {
            wrong_length += 1;
            continue;
        }
        if seen.insert(word.clone()) {
            kept.push(word);
        }
    }

    tracing::debug!(
        kept = kept.len(),
        wrong_length,
        word_length = config.word_length,
        "filtered word list"
    );

    kept
}
