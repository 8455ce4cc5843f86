//! Unbiased index sampling from a cryptographically secure byte source.

use rand_core::{CryptoRng, OsRng, RngCore};

use crate::error::{ConfigError, Error};

/// Upper bound on redraws for a single sample. Each draw is accepted with
/// probability above 1/256, so this is never reached by a working source.
pub const MAX_DRAWS: usize = 100_000;

/// Number of random bytes per draw for a range of `max_exclusive` values:
/// `floor(log2(max_exclusive) / 8) + 1`.
pub fn bytes_per_draw(max_exclusive: usize) -> usize {
    (max_exclusive.max(1).ilog2() / 8 + 1) as usize
}

/// Draws uniform indices in `[0, max_exclusive)` by rejection sampling.
///
/// Only accepts [`CryptoRng`] sources; the default is the operating system
/// generator.
#[derive(Debug, Clone, Default)]
pub struct SecureIndexSampler<R = OsRng> {
    rng: R,
}

impl SecureIndexSampler<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> SecureIndexSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a uniformly distributed integer in `[0, max_exclusive)`.
    ///
    /// Draws `bytes_per_draw(max_exclusive)` bytes, reads them as a
    /// little-endian integer and redraws while the value is out of range.
    ///
    /// # Errors
    /// - [`ConfigError::ZeroRange`] if `max_exclusive` is 0
    /// - [`Error::Entropy`] if the byte source fails
    /// - [`Error::Exhausted`] after [`MAX_DRAWS`] rejected draws
    pub fn sample(&mut self, max_exclusive: usize) -> Result<usize, Error> {
        if max_exclusive == 0 {
            return Err(ConfigError::ZeroRange.into());
        }
        let nbytes = bytes_per_draw(max_exclusive);
        let bound = max_exclusive as u64;
        let mut buf = [0u8; 8];

        for _ in 0..MAX_DRAWS {
            self.rng.try_fill_bytes(&mut buf[..nbytes])?;
            let r = u64::from_le_bytes(buf);
            if r < bound {
                return Ok(r as usize);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::error!("Rejection sampling did not converge for range {}", max_exclusive);
        Err(Error::Exhausted {
            attempts: MAX_DRAWS,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Replays a fixed byte sequence, cycling when exhausted.
    pub(crate) struct ScriptedRng {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl ScriptedRng {
        pub(crate) fn new(bytes: &[u8]) -> Self {
            Self {
                bytes: bytes.to_vec(),
                pos: 0,
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            rand_core::impls::next_u32_via_fill(self)
        }

        fn next_u64(&mut self) -> u64 {
            rand_core::impls::next_u64_via_fill(self)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for b in dest {
                *b = self.bytes[self.pos % self.bytes.len()];
                self.pos += 1;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    // Marker only; scripted bytes never leave the test build.
    impl CryptoRng for ScriptedRng {}

    #[test]
    fn test_bytes_per_draw() {
        assert_eq!(bytes_per_draw(1), 1);
        assert_eq!(bytes_per_draw(6), 1);
        assert_eq!(bytes_per_draw(255), 1);
        assert_eq!(bytes_per_draw(256), 2);
        assert_eq!(bytes_per_draw(7776), 2);
        assert_eq!(bytes_per_draw(65536), 3);
        assert_eq!(bytes_per_draw(usize::MAX), usize::BITS as usize / 8);
    }

    #[test]
    fn test_sample_reads_little_endian() {
        let mut sampler = SecureIndexSampler::with_rng(ScriptedRng::new(&[0x10, 0x02]));
        assert_eq!(sampler.sample(7776).unwrap(), 0x0210);
    }

    #[test]
    fn test_sample_rejects_out_of_range() {
        // 0xffff and 7776 (0x1e60) are rejected, 7775 (0x1e5f) accepted
        let bytes = [0xff, 0xff, 0x60, 0x1e, 0x5f, 0x1e];
        let mut sampler = SecureIndexSampler::with_rng(ScriptedRng::new(&bytes));
        assert_eq!(sampler.sample(7776).unwrap(), 7775);
    }

    #[test]
    fn test_sample_single_value_range() {
        let mut sampler = SecureIndexSampler::with_rng(ScriptedRng::new(&[9, 3, 0]));
        assert_eq!(sampler.sample(1).unwrap(), 0);
    }

    #[test]
    fn test_sample_zero_range() {
        let mut sampler = SecureIndexSampler::new();
        assert!(matches!(
            sampler.sample(0),
            Err(Error::Config(ConfigError::ZeroRange))
        ));
    }

    #[test]
    fn test_sample_gives_up_on_stuck_source() {
        let mut sampler = SecureIndexSampler::with_rng(ScriptedRng::new(&[0xff]));
        assert!(matches!(
            sampler.sample(100),
            Err(Error::Exhausted { attempts: MAX_DRAWS })
        ));
    }

    #[test]
    fn test_sample_os_rng_in_range() {
        let mut sampler = SecureIndexSampler::new();
        for max in [1, 2, 6, 255, 256, 7776, 1 << 20] {
            for _ in 0..200 {
                assert!(sampler.sample(max).unwrap() < max);
            }
        }
    }

    #[test]
    fn test_sample_chi_square_uniform() {
        const BINS: usize = 7776;
        const DRAWS: usize = 100_000;

        let mut sampler = SecureIndexSampler::new();
        let mut counts = vec![0usize; BINS];
        for _ in 0..DRAWS {
            counts[sampler.sample(BINS).unwrap()] += 1;
        }

        let expected = DRAWS as f64 / BINS as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();

        // chi-square with k-1 degrees of freedom: mean k-1, sd sqrt(2(k-1))
        let dof = (BINS - 1) as f64;
        let sd = (2.0 * dof).sqrt();
        assert!(
            (chi2 - dof).abs() < 6.0 * sd,
            "chi-square {chi2:.1} too far from {dof} (sd {sd:.1})"
        );
    }
}
