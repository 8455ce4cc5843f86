#![allow(dead_code)]

use std::io::Write;

use pwd_diceware::{dice_index, DICEWARE_LEN};
use tempfile::NamedTempFile;

/// 7776 distinct short words over a-x.
///
/// Each letter is used about equally often, and the first word carries a
/// rare trailing 'z', so all 24 letters sit above the mean frequency.
pub fn diceware_words() -> Vec<String> {
    let letters: Vec<char> = ('a'..='x').collect();
    let mut words: Vec<String> = (0..DICEWARE_LEN)
        .map(|i| {
            let low = letters[i % 24];
            let mid = letters[(i / 24) % 24];
            let high = letters[(i / 576 + i) % 24];
            format!("{high}{mid}{low}")
        })
        .collect();
    words[0].push('z');
    words
}

/// A signed-file style structured list wrapping `words`.
pub fn structured_content(words: &[String]) -> String {
    let mut out = String::from("-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA1\n\n");
    for (i, word) in words.iter().enumerate() {
        out.push_str(&format!("{}\t{}\n", dice_index(i), word));
    }
    out.push_str("\n-----BEGIN PGP SIGNATURE-----\n");
    out
}

pub fn fruit() -> Vec<String> {
    ["apple", "banana", "cherry", "date", "egg", "fig"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn write_list(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    write!(temp_file, "{}", content).expect("Failed to write");
    temp_file
}
