//! Length section - drops long words and summarizes word lengths.

use std::collections::BTreeMap;

use super::CheckResult;
use crate::config::ValidationConfig;
use crate::report::{EntropyReport, LengthStats};

/// Maximum word length from which a memorability warning is raised.
pub const LONG_WORD_WARNING: usize = 10;

/// Keeps only words of at most `max_length` characters, preserving order.
/// Returns the kept words and how many were dropped.
pub fn filter_long_words(words: Vec<String>, max_length: usize) -> (Vec<String>, usize) {
    let before = words.len();
    let kept: Vec<String> = words
        .into_iter()
        .filter(|w| w.chars().count() <= max_length)
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

/// Records min/max/avg length and the length histogram.
///
/// # Returns
/// - `Ok(Some(warning))` if the longest word has 10 or more characters
/// - `Ok(None)` otherwise
pub fn length_distribution_check(
    words: &[String],
    _config: &ValidationConfig,
    report: &mut EntropyReport,
) -> CheckResult {
    let mut histogram = BTreeMap::new();
    let mut total = 0;
    for word in words {
        let len = word.chars().count();
        *histogram.entry(len).or_insert(0) += 1;
        total += len;
    }

    let min = histogram.keys().next().copied().unwrap_or(0);
    let max = histogram.keys().next_back().copied().unwrap_or(0);
    let avg = if words.is_empty() {
        0.0
    } else {
        total as f64 / words.len() as f64
    };
    report.lengths = LengthStats {
        min,
        max,
        avg,
        histogram,
    };

    if max >= LONG_WORD_WARNING {
        return Ok(Some(format!(
            "Maximum word length {max} >= {LONG_WORD_WARNING}, difficult to remember"
        )));
    }
    Ok(None)
}
