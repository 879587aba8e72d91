//! Loaded language resources

use super::loader::filter_words;
use super::{Language, LanguageConfig};
use crate::core::{Alphabet, Matcher, Puzzle, Result, fold};
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// Everything a game needs for one language
///
/// Built once per language and swapped wholesale when the language changes.
/// Solutions are drawn from `words`; a guess is accepted when it is in
/// `words` or in the extra valid guesses.
#[derive(Debug, Clone)]
pub struct LanguagePack {
    language: Language,
    config: LanguageConfig,
    matcher: Matcher,
    words: Vec<String>,
    word_set: FxHashSet<String>,
    guess_set: FxHashSet<String>,
    definitions: FxHashMap<String, String>,
}

impl LanguagePack {
    /// Build a pack from the language's embedded word lists
    ///
    /// # Errors
    /// Returns `KupuError::InvalidAlphabet` if the normalized orthography is
    /// not a valid alphabet.
    ///
    /// # Examples
    /// ```
    /// use kimikupu::languages::{Language, LanguageConfig, LanguagePack};
    ///
    /// let pack = LanguagePack::new(Language::Maori, LanguageConfig::default()).unwrap();
    /// assert!(pack.is_word_in_word_list("aroha"));
    /// assert_eq!(pack.split("whetū"), ["wh", "e", "t", "ū"]);
    /// ```
    pub fn new(language: Language, config: LanguageConfig) -> Result<Self> {
        Self::with_lists(
            language,
            config,
            language.words().iter().copied(),
            language.valid_guesses().iter().copied(),
        )
    }

    /// Build a pack with custom solution words and no extra guesses
    ///
    /// # Errors
    /// Returns `KupuError::InvalidAlphabet` if the normalized orthography is
    /// not a valid alphabet.
    pub fn with_words<I, S>(language: Language, config: LanguageConfig, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_lists(language, config, words, std::iter::empty::<&str>())
    }

    /// Build a pack from solution words plus words only valid as guesses
    ///
    /// # Errors
    /// Returns `KupuError::InvalidAlphabet` if the normalized orthography is
    /// not a valid alphabet.
    pub fn with_lists<I, S, G, T>(language: Language, config: LanguageConfig, words: I, guesses: G) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        G: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let alphabet = Alphabet::new(
            language
                .orthography()
                .iter()
                .map(|unit| config.normalization.apply(unit)),
        )?;
        let matcher = Matcher::new(alphabet);
        let words = filter_words(words, &matcher, &config);
        let word_set: FxHashSet<String> = words.iter().cloned().collect();
        let guess_set: FxHashSet<String> = filter_words(guesses, &matcher, &config)
            .into_iter()
            .filter(|guess| !word_set.contains(guess))
            .collect();
        let definitions = language
            .definitions()
            .iter()
            .map(|&(word, definition)| (fold(&config.normalization.apply(word)), definition.to_string()))
            .collect();

        tracing::info!(
            language = language.name(),
            words = words.len(),
            guesses = guess_set.len(),
            word_length = config.word_length,
            "loaded language pack"
        );

        Ok(Self {
            language,
            config,
            matcher,
            words,
            word_set,
            guess_set,
            definitions,
        })
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &LanguageConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Playable words: normalized, lowercase, exactly `word_length` units
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Configured display name, falling back to the language's own
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.config
            .display_name
            .as_deref()
            .unwrap_or_else(|| self.language.display_name())
    }

    /// Apply the configured normalization to raw text
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        self.config.normalization.apply(text)
    }

    /// Normalize then split `word` into letter-units
    #[must_use]
    pub fn split(&self, word: &str) -> Vec<String> {
        self.matcher.split(&self.normalize(word))
    }

    /// Number of words accepted as guesses beyond the solution words
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guess_set.len()
    }

    /// Check whether `word` is an acceptable guess, ignoring case
    ///
    /// Solution words and the extra valid guesses both count.
    #[must_use]
    pub fn is_word_in_word_list(&self, word: &str) -> bool {
        let word = fold(&self.normalize(word));
        self.word_set.contains(&word) || self.guess_set.contains(&word)
    }

    /// Check whether `word` can be picked as a solution, ignoring case
    #[must_use]
    pub fn is_solution_word(&self, word: &str) -> bool {
        self.word_set.contains(&fold(&self.normalize(word)))
    }

    /// Definition of `word`, if one is known
    #[must_use]
    pub fn definition(&self, word: &str) -> Option<&str> {
        self.definitions
            .get(&fold(&self.normalize(word)))
            .map(String::as_str)
    }

    /// Check whether `unit` is a single letter-unit of this language
    #[must_use]
    pub fn is_valid_unit(&self, unit: &str) -> bool {
        self.matcher.contains_unit(&self.normalize(unit))
    }

    /// Puzzle for `solution`, normalized and tokenized with this pack
    #[must_use]
    pub fn puzzle(&self, solution: &str) -> Puzzle {
        Puzzle::new(self.matcher.clone(), fold(&self.normalize(solution)))
    }

    /// Today's word, or `None` if the word list is empty
    #[must_use]
    pub fn word_of_day(&self, today: NaiveDate) -> Option<DailyWord> {
        word_of_day(self.words.as_slice(), today)
    }

    /// Uniformly random playable word
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}

/// The puzzle selected for a given day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyWord {
    pub solution: String,
    /// Days since the game epoch, also the puzzle number
    pub index: i64,
    /// Date the next puzzle becomes available
    pub tomorrow: NaiveDate,
}

/// Pick the word for `today`, cycling through `words` from 2022-01-01
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use kimikupu::languages::word_of_day;
///
/// let words = ["aloha", "honua", "mauna"];
/// let day = word_of_day(&words, NaiveDate::from_ymd_opt(2022, 1, 4).unwrap()).unwrap();
/// assert_eq!(day.index, 3);
/// assert_eq!(day.solution, "aloha");
/// ```
#[must_use]
pub fn word_of_day<S: AsRef<str>>(words: &[S], today: NaiveDate) -> Option<DailyWord> {
    let epoch = NaiveDate::from_ymd_opt(2022, 1, 1)?;
    let len = i64::try_from(words.len()).ok().filter(|&len| len > 0)?;

    let index = (today - epoch).num_days();
    let slot = usize::try_from(index.rem_euclid(len)).ok()?;

    Some(DailyWord {
        solution: words[slot].as_ref().to_string(),
        index,
        tomorrow: today.succ_opt()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::Normalization;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn word_of_day_cycles() {
        let words = ["a", "b", "c"];
        assert_eq!(word_of_day(&words, date(2022, 1, 1)).unwrap().solution, "a");
        assert_eq!(word_of_day(&words, date(2022, 1, 2)).unwrap().solution, "b");
        assert_eq!(word_of_day(&words, date(2022, 1, 3)).unwrap().solution, "c");
        assert_eq!(word_of_day(&words, date(2022, 1, 4)).unwrap().solution, "a");
    }

    #[test]
    fn word_of_day_before_epoch_wraps() {
        let words = ["a", "b", "c"];
        let day = word_of_day(&words, date(2021, 12, 31)).unwrap();
        assert_eq!(day.index, -1);
        assert_eq!(day.solution, "c");
    }

    #[test]
    fn word_of_day_tomorrow() {
        let day = word_of_day(&["a"], date(2024, 2, 28)).unwrap();
        assert_eq!(day.tomorrow, date(2024, 2, 29));
    }

    #[test]
    fn word_of_day_empty_list() {
        let words: [&str; 0] = [];
        assert!(word_of_day(&words, date(2023, 5, 1)).is_none());
    }

    #[test]
    fn pack_filters_embedded_words() {
        let pack = LanguagePack::new(Language::Maori, LanguageConfig::default()).unwrap();
        assert!(pack.is_word_in_word_list("aroha"));
        assert!(pack.is_word_in_word_list("AROHA"));
        // four units
        assert!(!pack.is_word_in_word_list("whare"));
        assert!(pack.words().iter().all(|w| pack.matcher().unit_count(w) == 5));
    }

    #[test]
    fn pack_normalizes_okina() {
        let pack = LanguagePack::new(Language::Hawaiian, LanguageConfig::default()).unwrap();
        assert!(pack.is_word_in_word_list("'āina"));
        assert!(pack.is_word_in_word_list("\u{2018}āina"));
        assert_eq!(pack.split("'āina"), ["ʻ", "ā", "i", "n", "a"]);
    }

    #[test]
    fn valid_guesses_are_accepted_but_never_solutions() {
        let pack = LanguagePack::new(Language::Maori, LanguageConfig::default()).unwrap();
        assert!(pack.guess_count() > 0);
        assert!(pack.is_word_in_word_list("whānau"));
        assert!(pack.is_word_in_word_list("WHENUA"));
        assert!(!pack.is_solution_word("whānau"));
        assert!(pack.is_solution_word("aroha"));
        assert!(!pack.words().iter().any(|w| w == "whānau"));
    }

    #[test]
    fn custom_lists() {
        let pack = LanguagePack::with_lists(Language::Maori, LanguageConfig::default(), ["aroha"], ["marae", "aroha"]).unwrap();
        assert_eq!(pack.words(), ["aroha"]);
        // duplicates of solution words are not counted twice
        assert_eq!(pack.guess_count(), 1);
        assert!(pack.is_word_in_word_list("marae"));

        let solutions_only = LanguagePack::with_words(Language::Maori, LanguageConfig::default(), ["aroha"]).unwrap();
        assert!(!solutions_only.is_word_in_word_list("marae"));
    }

    #[test]
    fn definitions_follow_normalization() {
        let pack = LanguagePack::new(Language::Maori, LanguageConfig::default()).unwrap();
        assert_eq!(pack.definition("Aroha"), Some("love, compassion, empathy"));
        assert_eq!(pack.definition("ma\u{0304}ori"), Some("indigenous people of New Zealand"));
        assert_eq!(pack.definition("whānau"), None);

        let tahitian = LanguagePack::new(Language::Tahitian, LanguageConfig::default()).unwrap();
        assert_eq!(tahitian.definition("'aita"), Some("no, not"));
    }

    #[test]
    fn pack_valid_units() {
        let pack = LanguagePack::new(Language::Maori, LanguageConfig::default()).unwrap();
        assert!(pack.is_valid_unit("wh"));
        assert!(pack.is_valid_unit("Ā"));
        assert!(!pack.is_valid_unit("l"));
    }

    #[test]
    fn pack_with_nfd_still_matches() {
        let config = LanguageConfig {
            normalization: Normalization::Nfd,
            ..LanguageConfig::default()
        };
        let pack = LanguagePack::with_words(Language::Hawaiian, config, ["kōkua"]).unwrap();
        assert!(pack.is_word_in_word_list("kōkua"));
        assert_eq!(pack.split("kōkua").len(), 5);
    }

    #[test]
    fn pack_display_name_override() {
        let config = LanguageConfig {
            display_name: Some("ʻŌlelo Hawaiʻi".to_string()),
            ..LanguageConfig::default()
        };
        let pack = LanguagePack::with_words(Language::Hawaiian, config, ["aloha"]).unwrap();
        assert_eq!(pack.display_name(), "ʻŌlelo Hawaiʻi");
    }

    #[test]
    fn pack_puzzle_uses_pack_matcher() {
        let pack = LanguagePack::new(Language::Maori, LanguageConfig::default()).unwrap();
        let puzzle = pack.puzzle("Whetū");
        assert_eq!(puzzle.units(), &["wh", "e", "t", "ū"]);
    }

    #[test]
    fn random_word_comes_from_list() {
        let pack = LanguagePack::new(Language::Samoan, LanguageConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let word = pack.random_word(&mut rng).unwrap();
        assert!(pack.is_word_in_word_list(word));
    }
}
