//! Diceware word list validation and passphrase generation library
//!
//! This library checks a word list for passphrase use (length, duplicates,
//! character spread) and draws passphrases from it with unbiased rejection
//! sampling over the operating system's secure random source.
//!
//! # Features
//!
//! - `async` (default): Enables streaming generation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the `pwd-diceware` binary
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to the word list file
//!   (default: `./assets/diceware.wordlist.asc`)
//! - `PWD_DICEWARE_MAX_LENGTH`, `PWD_DICEWARE_WORDS`, `PWD_DICEWARE_MIN_CHARS`,
//!   `PWD_DICEWARE_ALPHABET`, `PWD_DICEWARE_COUNT`: override the
//!   [`GeneratorConfig`] defaults
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_diceware::{build_passphrase, read_and_validate, ValidationConfig};
//! use secrecy::ExposeSecret;
//!
//! let (words, report) = read_and_validate("diceware.wordlist.asc", &ValidationConfig::default())
//!     .expect("Unusable word list");
//! println!("{report}");
//!
//! let passphrase = build_passphrase(&words, 5, 20).expect("Failed to build passphrase");
//! println!("{}", passphrase.join(" ").expose_secret());
//! ```

// Internal modules
mod checks;
mod config;
mod error;
mod loader;
mod passphrase;
mod report;
mod sampler;
mod source;
mod validator;

// Public API
pub use checks::{LONG_WORD_WARNING, MAX_DUPLICATES};
pub use config::{get_wordlist_path, GeneratorConfig, ValidationConfig};
pub use error::{ConfigError, Error, FormatError, LoadError, QualityError};
pub use loader::{load_word_list, load_word_list_from_path, read_and_validate};
pub use passphrase::{
    build_passphrase, generate_passphrases, Passphrase, PassphraseBuilder, MAX_ATTEMPTS,
};
pub use report::{CharacterStats, EntropyReport, LengthStats};
pub use sampler::{bytes_per_draw, SecureIndexSampler, MAX_DRAWS};
pub use source::{
    dice_index, parse_plain, parse_structured, parse_word_list, ParsedWords, WordListFormat,
    DICEWARE_LEN,
};
pub use validator::{validate, WordList};

#[cfg(feature = "async")]
pub use passphrase::generate_passphrases_tx;
