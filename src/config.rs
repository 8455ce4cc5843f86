//! Generator configuration.
//!
//! Every value has a default; environment variables override them.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

pub const DEFAULT_MAX_WORD_LENGTH: usize = 7;
pub const DEFAULT_WORDS_PER_PASSPHRASE: usize = 5;
pub const DEFAULT_MIN_CHAR_ENTROPY_COUNT: usize = 20;
pub const DEFAULT_TARGET_ALPHABET_SIZE: usize = 20;
pub const DEFAULT_PASSPHRASE_COUNT: usize = 24;

pub const WORDLIST_PATH_VAR: &str = "PWD_WORDLIST_PATH";
pub const MAX_LENGTH_VAR: &str = "PWD_DICEWARE_MAX_LENGTH";
pub const WORDS_VAR: &str = "PWD_DICEWARE_WORDS";
pub const MIN_CHARS_VAR: &str = "PWD_DICEWARE_MIN_CHARS";
pub const ALPHABET_VAR: &str = "PWD_DICEWARE_ALPHABET";
pub const COUNT_VAR: &str = "PWD_DICEWARE_COUNT";

/// Settings for word list validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Words longer than this (in characters) are dropped.
    pub max_word_length: usize,
    /// Minimum number of characters used more often than the mean.
    pub min_char_entropy_count: usize,
    /// Fail on low character entropy instead of warning.
    pub strict_char_entropy: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            min_char_entropy_count: DEFAULT_MIN_CHAR_ENTROPY_COUNT,
            strict_char_entropy: true,
        }
    }
}

/// Settings for a whole generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub validation: ValidationConfig,
    pub words_per_passphrase: usize,
    /// Alphabet size assumed by the character-level brute-force estimate.
    pub target_alphabet_size: usize,
    pub passphrase_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            validation: ValidationConfig::default(),
            words_per_passphrase: DEFAULT_WORDS_PER_PASSPHRASE,
            target_alphabet_size: DEFAULT_TARGET_ALPHABET_SIZE,
            passphrase_count: DEFAULT_PASSPHRASE_COUNT,
        }
    }
}

impl GeneratorConfig {
    /// Builds a configuration from the defaults, overridden by any of the
    /// `PWD_DICEWARE_*` environment variables that are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but does not
    /// parse as an unsigned integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = env_override(MAX_LENGTH_VAR)? {
            config.validation.max_word_length = v;
        }
        if let Some(v) = env_override(MIN_CHARS_VAR)? {
            config.validation.min_char_entropy_count = v;
        }
        if let Some(v) = env_override(WORDS_VAR)? {
            config.words_per_passphrase = v;
        }
        if let Some(v) = env_override(ALPHABET_VAR)? {
            config.target_alphabet_size = v;
        }
        if let Some(v) = env_override(COUNT_VAR)? {
            config.passphrase_count = v;
        }
        Ok(config)
    }

    /// Rejects settings that could never produce a passphrase.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.words_per_passphrase == 0 {
            return Err(ConfigError::NoWords);
        }
        if self.target_alphabet_size < 2 {
            return Err(ConfigError::AlphabetTooSmall {
                size: self.target_alphabet_size,
            });
        }
        Ok(())
    }
}

/// Returns the word list file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `./assets/diceware.wordlist.asc`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var(WORDLIST_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/diceware.wordlist.asc"))
}

fn env_override<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                key: key.to_string(),
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}
