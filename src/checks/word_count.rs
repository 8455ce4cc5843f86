//! Word count section - bits of entropy per word.

use super::CheckResult;
use crate::config::ValidationConfig;
use crate::error::QualityError;
use crate::report::EntropyReport;

/// Records `log2(count)` per word and the entropy of 1 to 7 word passphrases.
/// Purely diagnostic; only an empty list is rejected.
pub fn word_count_check(
    words: &[String],
    _config: &ValidationConfig,
    report: &mut EntropyReport,
) -> CheckResult {
    if words.is_empty() {
        return Err(QualityError::Empty);
    }
    let bits = (words.len() as f64).log2();
    report.word_count = words.len();
    report.bits_per_word = bits;
    for (i, slot) in report.passphrase_bits.iter_mut().enumerate() {
        *slot = bits * (i + 1) as f64;
    }
    Ok(None)
}
