//! Word source - turns raw word list text into candidate words.
//!
//! Two layouts are understood. The structured (Diceware) layout prefixes each
//! word with its five-dice roll, `11111` through `66666`. The plain layout has
//! one word per line. Structured parsing is tried first.

use crate::error::FormatError;

/// Number of entries in a five-dice list (6^5).
pub const DICEWARE_LEN: usize = 7776;

const FIRST_INDEX: &str = "11111";
const LAST_INDEX: &str = "66666";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListFormat {
    Structured,
    Plain,
}

/// Candidate words in file order, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWords {
    pub format: WordListFormat,
    pub words: Vec<String>,
    /// Why the structured parse was rejected, when the plain layout was used.
    pub fallback_reason: Option<FormatError>,
}

/// Parses the structured layout.
///
/// Locates the first line containing `11111` and takes the 7776 lines
/// starting there. The block must start with index `11111` and end with
/// `66666`; the word is the second whitespace-separated token of each line.
pub fn parse_structured(content: &str) -> Result<Vec<String>, FormatError> {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines
        .iter()
        .position(|l| l.trim().contains(FIRST_INDEX))
        .ok_or(FormatError::MissingStartMarker)?;

    let block = &lines[start..];
    if block.len() < DICEWARE_LEN {
        return Err(FormatError::Truncated { found: block.len() });
    }
    let block = &block[..DICEWARE_LEN];

    let first = index_prefix(block[0]);
    if first != FIRST_INDEX {
        return Err(FormatError::BadFirstIndex {
            found: first.to_string(),
        });
    }
    let last = index_prefix(block[DICEWARE_LEN - 1]);
    if last != LAST_INDEX {
        return Err(FormatError::BadLastIndex {
            found: last.to_string(),
        });
    }

    block
        .iter()
        .enumerate()
        .map(|(i, line)| {
            line.split_whitespace()
                .nth(1)
                .map(str::to_string)
                .ok_or(FormatError::MissingWord {
                    line: start + i + 1,
                })
        })
        .collect()
}

/// Parses the plain layout: every non-empty trimmed line is a word.
pub fn parse_plain(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tries the structured layout, falling back to the plain layout.
///
/// # Errors
///
/// Returns [`FormatError::Empty`] when neither layout yields a single word.
pub fn parse_word_list(content: &str) -> Result<ParsedWords, FormatError> {
    match parse_structured(content) {
        Ok(words) => Ok(ParsedWords {
            format: WordListFormat::Structured,
            words,
            fallback_reason: None,
        }),
        Err(reason) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Not a structured word list ({}), reading as plain", reason);

            let words = parse_plain(content);
            if words.is_empty() {
                return Err(FormatError::Empty);
            }
            Ok(ParsedWords {
                format: WordListFormat::Plain,
                words,
                fallback_reason: Some(reason),
            })
        }
    }
}

fn index_prefix(line: &str) -> &str {
    line.get(..FIRST_INDEX.len()).unwrap_or(line)
}

/// Dice roll for a zero-based position, `0 -> "11111"`, `7775 -> "66666"`.
pub fn dice_index(position: usize) -> String {
    let mut digits = [b'1'; 5];
    let mut rest = position;
    for d in digits.iter_mut().rev() {
        *d = b'1' + (rest % 6) as u8;
        rest /= 6;
    }
    digits.iter().map(|&b| b as char).collect()
}
