//! Diagnostic summary of a validated word list.

use std::collections::BTreeMap;
use std::fmt;

/// Longest passphrase (in words) reported in [`EntropyReport::passphrase_bits`].
pub const REPORTED_WORD_COUNTS: usize = 7;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LengthStats {
    pub min: usize,
    pub max: usize,
    pub avg: f64,
    /// Word length -> number of words with that length.
    pub histogram: BTreeMap<usize, usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterStats {
    /// Total character occurrences across all words.
    pub total: usize,
    /// Number of distinct characters.
    pub distinct: usize,
    /// Distinct characters occurring more often than the mean frequency.
    pub well_used: usize,
    /// `log2(well_used)`, 0 when no character is well used.
    pub bits_per_char: f64,
}

/// Read-only summary of a validated list. Describes only the words kept, so
/// validating the same list again yields the same report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntropyReport {
    pub word_count: usize,
    pub duplicates: usize,
    pub bits_per_word: f64,
    /// Entropy of passphrases of 1 to 7 words.
    pub passphrase_bits: [f64; REPORTED_WORD_COUNTS],
    pub lengths: LengthStats,
    pub characters: CharacterStats,
    /// Advisory warnings raised during validation.
    pub warnings: Vec<String>,
}

impl fmt::Display for EntropyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: Vec<String> = self
            .passphrase_bits
            .iter()
            .map(|b| format!("{b:.1}"))
            .collect();
        writeln!(
            f,
            "Got {} words ({} b/word for 1..{} words)",
            self.word_count,
            bits.join(" "),
            REPORTED_WORD_COUNTS
        )?;
        if self.duplicates > 0 {
            writeln!(f, "Duplicates: {}", self.duplicates)?;
        }
        writeln!(
            f,
            "Word length min: {}, max: {}, avg: {:.3}",
            self.lengths.min, self.lengths.max, self.lengths.avg
        )?;
        for (len, count) in &self.lengths.histogram {
            writeln!(f, " Length {len}, occurrence: {count}")?;
        }
        write!(
            f,
            "Character entropy: {} unique, {} ok (== {:.2} bit/char)",
            self.characters.distinct, self.characters.well_used, self.characters.bits_per_char
        )?;
        for warning in &self.warnings {
            write!(f, "\nWarning: {warning}")?;
        }
        Ok(())
    }
}
