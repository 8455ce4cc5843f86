//! Word list quality checks
//!
//! Each check inspects one aspect of a length-filtered word list and records
//! its findings in the [`EntropyReport`].

mod characters;
mod duplicates;
mod length;
mod word_count;

pub use characters::character_spread_check;
pub use duplicates::{duplicate_check, MAX_DUPLICATES};
pub use length::{filter_long_words, length_distribution_check, LONG_WORD_WARNING};
pub use word_count::word_count_check;

use crate::config::ValidationConfig;
use crate::error::QualityError;
use crate::report::EntropyReport;

/// Result type for quality checks.
/// - `Ok(Some(warning))` - Check passed with an advisory warning
/// - `Ok(None)` - Check passed
/// - `Err(_)` - List rejected
pub type CheckResult = Result<Option<String>, QualityError>;

pub type Check = fn(&[String], &ValidationConfig, &mut EntropyReport) -> CheckResult;
