//! Word list loading
//!
//! Reads a word list file from disk and hands its content to the parser.

use std::path::Path;

use crate::config::{get_wordlist_path, ValidationConfig};
use crate::error::{Error, LoadError};
use crate::report::EntropyReport;
use crate::source::{parse_word_list, ParsedWords};
use crate::validator::{validate, WordList};

/// Loads the word list named by `PWD_WORDLIST_PATH`.
///
/// # Environment Variable
///
/// Set `PWD_WORDLIST_PATH` to specify a custom word list location.
/// If not set, defaults to `./assets/diceware.wordlist.asc`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn load_word_list() -> Result<ParsedWords, LoadError> {
    let path = get_wordlist_path();
    load_word_list_from_path(&path)
}

/// Loads and parses a word list from a specific file path.
///
/// # Example
///
/// ```rust,ignore
/// let parsed = pwd_diceware::load_word_list_from_path("beale.wordlist.asc")?;
/// println!("{} candidate words", parsed.words.len());
/// ```
pub fn load_word_list_from_path<P: AsRef<Path>>(path: P) -> Result<ParsedWords, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list load FAILED: FileNotFound {:?}", path);
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list load FAILED: Empty file {:?}", path);
        return Err(LoadError::EmptyFile);
    }

    let parsed = parse_word_list(&content)?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Word list loaded: {} {:?} candidates from {:?}",
        parsed.words.len(),
        parsed.format,
        path
    );

    Ok(parsed)
}

/// Loads, parses and validates a word list file.
pub fn read_and_validate<P: AsRef<Path>>(
    path: P,
    config: &ValidationConfig,
) -> Result<(WordList, EntropyReport), Error> {
    let parsed = load_word_list_from_path(path)?;
    Ok(validate(parsed.words, config)?)
}
