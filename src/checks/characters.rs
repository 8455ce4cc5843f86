//! Character spread section - checks how many characters are well used.
//!
//! A character counts as well used when it occurs more often than the mean
//! occurrence count over all distinct characters. This is a coarse stand-in
//! for the alphabet size a character-level brute-force attack must cover.

use std::collections::HashMap;

use super::CheckResult;
use crate::config::ValidationConfig;
use crate::error::QualityError;
use crate::report::{CharacterStats, EntropyReport};

/// Counts the well-used characters across all words.
///
/// # Returns
/// - `Err(LowCharacterEntropy)` if fewer than `min_char_entropy_count` are
///   well used and the config is strict
/// - `Ok(Some(warning))` for the same condition in lenient mode
/// - `Ok(None)` otherwise
pub fn character_spread_check(
    words: &[String],
    config: &ValidationConfig,
    report: &mut EntropyReport,
) -> CheckResult {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in words.iter().flat_map(|w| w.chars()) {
        *counts.entry(c).or_insert(0) += 1;
    }

    let total: usize = counts.values().sum();
    let distinct = counts.len();
    let well_used = if distinct == 0 {
        0
    } else {
        let mean = total as f64 / distinct as f64;
        counts.values().filter(|&&n| n as f64 > mean).count()
    };
    let bits_per_char = if well_used > 0 {
        (well_used as f64).log2()
    } else {
        0.0
    };
    report.characters = CharacterStats {
        total,
        distinct,
        well_used,
        bits_per_char,
    };

    let minimum = config.min_char_entropy_count;
    if well_used < minimum {
        if config.strict_char_entropy {
            return Err(QualityError::LowCharacterEntropy {
                well_used,
                distinct,
                minimum,
            });
        }
        return Ok(Some(format!(
            "Low character entropy: {well_used} characters above mean frequency (minimum {minimum})"
        )));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn config(minimum: usize, strict: bool) -> ValidationConfig {
        ValidationConfig {
            min_char_entropy_count: minimum,
            strict_char_entropy: strict,
            ..ValidationConfig::default()
        }
    }

    #[test]
    fn test_character_spread_counts_above_mean() {
        // a:4 b:2 c:1 d:1 -> mean 2, only 'a' exceeds it
        let mut report = EntropyReport::default();
        let result = character_spread_check(&words(&["aaab", "abcd"]), &config(1, true), &mut report);
        assert_eq!(result, Ok(None));
        assert_eq!(report.characters.total, 8);
        assert_eq!(report.characters.distinct, 4);
        assert_eq!(report.characters.well_used, 1);
        assert_eq!(report.characters.bits_per_char, 0.0);
    }

    #[test]
    fn test_character_spread_uniform_counts_nothing_well_used() {
        let mut report = EntropyReport::default();
        let result = character_spread_check(&words(&["abc", "cab"]), &config(0, true), &mut report);
        assert_eq!(result, Ok(None));
        assert_eq!(report.characters.well_used, 0);
    }

    #[test]
    fn test_character_spread_small_alphabet_rejected() {
        let fruit = words(&["apple", "banana", "cherry", "date", "egg", "fig"]);
        let mut report = EntropyReport::default();
        let result = character_spread_check(&fruit, &config(20, true), &mut report);
        match result {
            Err(QualityError::LowCharacterEntropy {
                well_used,
                distinct,
                minimum,
            }) => {
                assert!(well_used < 20);
                assert_eq!(distinct, 15);
                assert_eq!(minimum, 20);
            }
            other => panic!("Expected LowCharacterEntropy, got {other:?}"),
        }
    }

    #[test]
    fn test_character_spread_lenient_warns() {
        let fruit = words(&["apple", "banana", "cherry"]);
        let mut report = EntropyReport::default();
        let result = character_spread_check(&fruit, &config(20, false), &mut report);
        assert!(matches!(result, Ok(Some(ref w)) if w.contains("Low character entropy")));
    }

    #[test]
    fn test_character_spread_wide_alphabet_passes() {
        // 22 letters used twice, 'z' once: mean is just under 2
        let mut list: Vec<String> = ('a'..='v').map(|c| format!("{c}{c}")).collect();
        list.push("z".to_string());
        let mut report = EntropyReport::default();
        let result = character_spread_check(&list, &config(20, true), &mut report);
        assert_eq!(result, Ok(None));
        assert_eq!(report.characters.well_used, 22);
        assert!((report.characters.bits_per_char - 22f64.log2()).abs() < 1e-9);
    }
}
