//! Duplicate section - counts repeated words.

use std::collections::HashSet;

use super::CheckResult;
use crate::config::ValidationConfig;
use crate::error::QualityError;
use crate::report::EntropyReport;

/// A list with this many duplicates or more is considered corrupted.
pub const MAX_DUPLICATES: usize = 10;

/// Counts duplicate entries (`len - unique len`).
///
/// # Returns
/// - `Err(TooManyDuplicates)` if there are [`MAX_DUPLICATES`] or more
/// - `Ok(Some(warning))` if a few duplicates are tolerated
/// - `Ok(None)` if every word is unique
pub fn duplicate_check(
    words: &[String],
    _config: &ValidationConfig,
    report: &mut EntropyReport,
) -> CheckResult {
    let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
    let duplicates = words.len() - unique.len();
    report.duplicates = duplicates;

    if duplicates >= MAX_DUPLICATES {
        return Err(QualityError::TooManyDuplicates {
            duplicates,
            limit: MAX_DUPLICATES,
        });
    }
    if duplicates > 0 {
        return Ok(Some(format!("Found {duplicates} duplicate words")));
    }
    Ok(None)
}
