//! Word list audit
//!
//! Tokenizes every entry of a word list and reports how the list breaks down
//! by unit count, flagging entries the orthography cannot fully cover.

use crate::core::{Matcher, fold};
use crate::languages::Normalization;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of auditing a word list
#[derive(Debug)]
pub struct AuditResult {
    pub total_words: usize,
    /// Unit count → number of words
    pub distribution: BTreeMap<usize, usize>,
    /// Entries with characters outside the orthography
    pub untokenized: Vec<String>,
    /// Entries usable at `word_length`
    pub playable: usize,
    pub word_length: usize,
    pub duration: Duration,
}

struct Entry {
    units: usize,
    clean: bool,
}

/// Audit `words` against `matcher`
pub fn run_audit<S>(matcher: &Matcher, normalization: Normalization, words: &[S], word_length: usize) -> AuditResult
where
    S: AsRef<str> + Sync,
{
    let start = Instant::now();

    let entries: Vec<Entry> = words
        .par_iter()
        .map(|word| {
            let word = fold(&normalization.apply(word.as_ref().trim()));
            Entry {
                units: matcher.unit_count(&word),
                clean: matcher.is_fully_tokenized(&word),
            }
        })
        .collect();

    let mut distribution = BTreeMap::new();
    let mut untokenized = Vec::new();
    let mut playable = 0;

    for (word, entry) in words.iter().zip(&entries) {
        if !entry.clean {
            untokenized.push(word.as_ref().to_string());
            continue;
        }
        *distribution.entry(entry.units).or_insert(0) += 1;
        if entry.units == word_length {
            playable += 1;
        }
    }

    tracing::debug!(
        total = words.len(),
        playable,
        untokenized = untokenized.len(),
        "audited word list"
    );

    AuditResult {
        total_words: words.len(),
        distribution,
        untokenized,
        playable,
        word_length,
        duration: start.elapsed(),
    }
}
