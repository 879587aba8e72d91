//! Per-language game configuration and text normalization

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// The ʻokina, used by Hawaiian, Tahitian and Samoan
pub const OKINA: char = '\u{02BB}';

/// Characters commonly typed in place of the ʻokina
const OKINA_LOOKALIKES: &[char] = &['\u{2018}', '\''];

/// Unicode normalization applied to words and alphabet units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    #[default]
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
    /// Leave text as written
    #[serde(rename = "none")]
    Off,
}

impl Normalization {
    /// Normalize `text` and fold ʻokina look-alikes to U+02BB
    ///
    /// # Examples
    /// ```
    /// use kimikupu::languages::Normalization;
    ///
    /// // a + combining macron composes to ā
    /// assert_eq!(Normalization::Nfc.apply("a\u{0304}ina"), "āina");
    /// assert_eq!(Normalization::Nfc.apply("'āina"), "ʻāina");
    /// ```
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        let normalized: String = match self {
            Self::Nfc => text.nfc().collect(),
            Self::Nfd => text.nfd().collect(),
            Self::Nfkc => text.nfkc().collect(),
            Self::Nfkd => text.nfkd().collect(),
            Self::Off => text.to_string(),
        };

        normalized
            .chars()
            .map(|c| if OKINA_LOOKALIKES.contains(&c) { OKINA } else { c })
            .collect()
    }
}

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game rules for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Guesses allowed per puzzle
    pub tries: usize,
    /// Letter-units per word
    pub word_length: usize,
    pub normalization: Normalization,
    /// Overrides the language's built-in display name
    pub display_name: Option<String>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            tries: 6,
            word_length: 5,
            normalization: Normalization::Nfc,
            display_name: None,
        }
    }
}

impl LanguageConfig {
    /// Parse a TOML document; missing keys take their defaults
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Invalid` when `tries` or `word_length` is zero.
    ///
    /// # Examples
    /// ```
    /// use kimikupu::languages::{LanguageConfig, Normalization};
    ///
    /// let config = LanguageConfig::from_toml_str("tries = 8\nnormalization = \"none\"").unwrap();
    /// assert_eq!(config.tries, 8);
    /// assert_eq!(config.word_length, 5);
    /// assert_eq!(config.normalization, Normalization::Off);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`LanguageConfig::from_toml_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded language config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tries == 0 {
            return Err(ConfigError::Invalid("tries must be at least 1".to_string()));
        }
        if self.word_length == 0 {
            return Err(ConfigError::Invalid(
                "word_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
