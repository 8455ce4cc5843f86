//! Passphrase builder - draws words and checks the result's entropy.

use rand_core::{CryptoRng, OsRng, RngCore};
use secrecy::{ExposeSecret, ExposeSecretMut, SecretBox, SecretString};

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::GeneratorConfig;
use crate::error::{ConfigError, Error};
use crate::sampler::SecureIndexSampler;
use crate::validator::WordList;

/// Upper bound on whole-passphrase redraws before giving up.
pub const MAX_ATTEMPTS: usize = 10_000;

/// A generated passphrase. The words are zeroized on drop and redacted from
/// `Debug` output.
#[derive(Debug)]
pub struct Passphrase {
    words: SecretBox<Vec<String>>,
    word_space_bits: f64,
    char_space_bits: f64,
    attempts: usize,
}

impl Passphrase {
    pub fn len(&self) -> usize {
        self.words.expose_secret().len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.expose_secret().is_empty()
    }

    /// Entropy against an attacker who knows the word list and length.
    pub fn word_space_bits(&self) -> f64 {
        self.word_space_bits
    }

    /// Estimated entropy against a character-level brute-force attacker.
    pub fn char_space_bits(&self) -> f64 {
        self.char_space_bits
    }

    /// Number of draws it took to reach an accepted passphrase.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// The words joined by `separator`, in selection order.
    pub fn join(&self, separator: &str) -> SecretString {
        SecretString::new(self.words.expose_secret().join(separator).into())
    }
}

impl ExposeSecret<Vec<String>> for Passphrase {
    fn expose_secret(&self) -> &Vec<String> {
        self.words.expose_secret()
    }
}

/// Builds passphrases from a validated word list.
///
/// Every build draws `nwords` independent indices (with replacement). A draw
/// whose character-space estimate falls below its word-space entropy is
/// discarded whole and redrawn.
pub struct PassphraseBuilder<'a, R = OsRng> {
    words: &'a WordList,
    sampler: SecureIndexSampler<R>,
    target_alphabet_size: usize,
}

impl<'a> PassphraseBuilder<'a, OsRng> {
    pub fn new(words: &'a WordList, target_alphabet_size: usize) -> Self {
        Self::with_rng(words, target_alphabet_size, OsRng)
    }
}

impl<'a, R: RngCore + CryptoRng> PassphraseBuilder<'a, R> {
    pub fn with_rng(words: &'a WordList, target_alphabet_size: usize, rng: R) -> Self {
        Self {
            words,
            sampler: SecureIndexSampler::with_rng(rng),
            target_alphabet_size,
        }
    }

    /// Draws a passphrase of `nwords` words.
    ///
    /// # Errors
    /// - [`ConfigError`] if `nwords` is 0, the list has fewer than 2 words or
    ///   the target alphabet has fewer than 2 symbols
    /// - [`Error::Exhausted`] if no draw is accepted within [`MAX_ATTEMPTS`]
    pub fn build(&mut self, nwords: usize) -> Result<Passphrase, Error> {
        if nwords == 0 {
            return Err(ConfigError::NoWords.into());
        }
        if self.words.len() < 2 {
            return Err(ConfigError::WordListTooShort {
                len: self.words.len(),
            }
            .into());
        }
        if self.target_alphabet_size < 2 {
            return Err(ConfigError::AlphabetTooSmall {
                size: self.target_alphabet_size,
            }
            .into());
        }

        let list_len = self.words.len();
        let word_space_bits = nwords as f64 * (list_len as f64).log2();
        let bits_per_char = (self.target_alphabet_size as f64).log2();

        for attempt in 1..=MAX_ATTEMPTS {
            // Rejected drafts are zeroized when dropped
            let chosen = self.draw(nwords)?;

            let chars: usize = chosen
                .expose_secret()
                .iter()
                .map(|w| w.chars().count())
                .sum();
            let char_space_bits = chars as f64 * bits_per_char;

            if char_space_bits < word_space_bits {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "Low brute-force entropy ({:.1} < {:.1} bits), re-generating",
                    char_space_bits,
                    word_space_bits
                );
                continue;
            }

            return Ok(Passphrase {
                words: chosen,
                word_space_bits,
                char_space_bits,
                attempts: attempt,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::error!(
            "No passphrase reached {:.1} bits of character entropy in {} attempts",
            word_space_bits,
            MAX_ATTEMPTS
        );
        Err(Error::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Draws `nwords` words straight into secret storage.
    fn draw(&mut self, nwords: usize) -> Result<SecretBox<Vec<String>>, Error> {
        let list_len = self.words.len();
        let mut draft = SecretBox::new(Box::new(Vec::with_capacity(nwords)));
        for _ in 0..nwords {
            let index = self.sampler.sample(list_len)?;
            draft.expose_secret_mut().push(self.words[index].to_string());
        }
        Ok(draft)
    }
}

/// Builds one passphrase of `nwords` words using the operating system generator.
pub fn build_passphrase(
    words: &WordList,
    nwords: usize,
    target_alphabet_size: usize,
) -> Result<Passphrase, Error> {
    PassphraseBuilder::new(words, target_alphabet_size).build(nwords)
}

/// Builds `config.passphrase_count` independent passphrases, one after another.
pub fn generate_passphrases(
    words: &WordList,
    config: &GeneratorConfig,
) -> Result<Vec<Passphrase>, Error> {
    config.check()?;
    let mut builder = PassphraseBuilder::new(words, config.target_alphabet_size);
    (0..config.passphrase_count)
        .map(|_| builder.build(config.words_per_passphrase))
        .collect()
}

/// Async version that sends each passphrase via channel.
///
/// The token is checked before every passphrase; a cancelled run stops
/// without sending further results.
#[cfg(feature = "async")]
pub async fn generate_passphrases_tx(
    words: Arc<WordList>,
    config: GeneratorConfig,
    token: CancellationToken,
    tx: mpsc::Sender<Result<Passphrase, Error>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("generating {} passphrases...", config.passphrase_count);

    if let Err(e) = config.check() {
        if let Err(e) = tx.send(Err(e.into())).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send config error: {}", e);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
        }
        return;
    }

    let mut builder = PassphraseBuilder::new(&words, config.target_alphabet_size);
    for _ in 0..config.passphrase_count {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::info!("passphrase generation cancelled");
            break;
        }

        let result = builder.build(config.words_per_passphrase);
        let failed = result.is_err();
        if let Err(e) = tx.send(result).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send passphrase: {}", e);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
            break;
        }
        if failed {
            break;
        }
        tokio::task::yield_now().await;
    }
}
