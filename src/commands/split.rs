//! Word splitting command
//!
//! Shows how a word breaks down into letter-units.

use crate::languages::LanguagePack;

/// Result of splitting a word
pub struct SplitResult {
    pub word: String,
    pub normalized: String,
    pub units: Vec<String>,
    pub fully_tokenized: bool,
    pub playable: bool,
}

/// Split `word` with the pack's orthography
#[must_use]
pub fn split_word(pack: &LanguagePack, word: &str) -> SplitResult {
    let normalized = pack.normalize(word);

    SplitResult {
        word: word.to_string(),
        units: pack.matcher().split(&normalized),
        fully_tokenized: pack.matcher().is_fully_tokenized(&normalized),
        playable: pack.is_word_in_word_list(word),
        normalized,
    }
}
