//! Word list validator - filters and audits candidate words.

use std::ops::Index;

use crate::checks::{
    character_spread_check, duplicate_check, filter_long_words, length_distribution_check,
    word_count_check, Check,
};
use crate::config::ValidationConfig;
use crate::error::QualityError;
use crate::report::EntropyReport;

/// An ordered list of words that passed validation.
///
/// Immutable once built; share it by reference (or `Arc`) between
/// passphrase builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl Index<usize> for WordList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.words[index]
    }
}

/// Validates candidate words and returns the cleaned list with its report.
///
/// Steps, in order: drop words longer than `max_word_length`, reject lists
/// with too many duplicates, compute per-word entropy, summarize lengths and
/// check the character spread. Pure and deterministic.
///
/// # Errors
/// Returns a [`QualityError`] on the first check that rejects the list.
pub fn validate(
    candidates: Vec<String>,
    config: &ValidationConfig,
) -> Result<(WordList, EntropyReport), QualityError> {
    let (words, dropped_long) = filter_long_words(candidates, config.max_word_length);
    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Dropped {} words longer than {} characters",
        dropped_long,
        config.max_word_length
    );
    #[cfg(not(feature = "tracing"))]
    let _ = dropped_long;
    let mut report = EntropyReport::default();

    // Orchestrator: execute checks in sequence
    let checks: [(&str, Check); 4] = [
        ("duplicates", duplicate_check),
        ("word_count", word_count_check),
        ("length", length_distribution_check),
        ("characters", character_spread_check),
    ];

    for (check_name, check_fn) in checks {
        match check_fn(&words, config, &mut report) {
            Ok(Some(warning)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("{}", warning);
                report.warnings.push(warning);
            }
            Ok(None) => {}
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Word list rejected by {} check: {}", check_name, e);
                #[cfg(not(feature = "tracing"))]
                let _ = check_name;
                return Err(e);
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Word list validated: {} words, {:.2} bits/word",
        report.word_count,
        report.bits_per_word
    );

    Ok((WordList { words }, report))
}
