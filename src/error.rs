//! Error types for word list parsing, validation and passphrase generation.

use std::path::PathBuf;
use thiserror::Error;

/// The input matches neither the structured (dice-indexed) nor the plain layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Word list is empty")]
    Empty,
    #[error("No line carries the first dice index 11111")]
    MissingStartMarker,
    #[error("Word list truncated: expected 7776 indexed lines, found {found}")]
    Truncated { found: usize },
    #[error("Word list malformed: first index is {found:?}, expected \"11111\"")]
    BadFirstIndex { found: String },
    #[error("Word list malformed: last index is {found:?}, expected \"66666\"")]
    BadLastIndex { found: String },
    #[error("Indexed line {line} has no word")]
    MissingWord { line: usize },
}

/// A parsed list failed one of the fatal quality thresholds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QualityError {
    #[error("No words left after filtering")]
    Empty,
    #[error("Found {duplicates} duplicate words (limit {limit})")]
    TooManyDuplicates { duplicates: usize, limit: usize },
    #[error(
        "Low character entropy: {well_used} of {distinct} characters above mean frequency (minimum {minimum})"
    )]
    LowCharacterEntropy {
        well_used: usize,
        distinct: usize,
        minimum: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Number of words per passphrase must be at least 1")]
    NoWords,
    #[error("Word list has {len} words, need at least 2")]
    WordListTooShort { len: usize },
    #[error("Target alphabet size must be at least 2, got {size}")]
    AlphabetTooSmall { size: usize },
    #[error("Cannot sample from an empty range")]
    ZeroRange,
    #[error("Invalid value {value:?} for {key}")]
    Invalid { key: String, value: String },
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Word list file is empty")]
    EmptyFile,
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Crate-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Quality(#[from] QualityError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Secure random source failed: {0}")]
    Entropy(#[from] rand_core::Error),
    #[error("Gave up after {attempts} attempts")]
    Exhausted { attempts: usize },
}
