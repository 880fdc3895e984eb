use crate::error::GeneratorError;
use crate::Generator;
use jiff::Timestamp;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::{Digest, Sha256};
use snip_core::ShortPath;
use std::sync::atomic::{AtomicU64, Ordering};
use typed_builder::TypedBuilder;

const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Default identifier length.
pub const DEFAULT_LENGTH: usize = 7;

/// SHA-256 yields 32 digest bytes, one base62 character each.
const MAX_LENGTH: usize = 32;

const SALT_BYTES: usize = 16;

/// Configures a [`HashGenerator`] instance.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct GeneratorSettings {
    /// Identifier length in characters, fixed per generator instance.
    #[builder(default = DEFAULT_LENGTH)]
    pub length: usize,
}

/// One-way-hash identifier generator.
///
/// Each call combines a monotonically advancing counter (seeded from the
/// wall clock so restarts don't replay the same sequence), a nanosecond
/// clock reading, a fresh OS-entropy value, and a per-instance salt into a
/// single input, hashes it with SHA-256, and maps the digest bytes through
/// a modulo-62 transform into the alphanumeric alphabet. The hash makes
/// identifiers non-sequential and keeps the counter unrecoverable from
/// the output.
#[derive(Debug)]
pub struct HashGenerator {
    length: usize,
    counter: AtomicU64,
    salt: String,
}

impl HashGenerator {
    /// Creates a generator, drawing the per-instance salt from OS entropy.
    pub fn new(settings: GeneratorSettings) -> Result<Self, GeneratorError> {
        if settings.length == 0 || settings.length > MAX_LENGTH {
            return Err(GeneratorError::InvalidLength {
                length: settings.length,
                max_length: MAX_LENGTH,
            });
        }

        let mut salt_bytes = [0u8; SALT_BYTES];
        OsRng
            .try_fill_bytes(&mut salt_bytes)
            .map_err(|e| GeneratorError::Entropy(e.to_string()))?;

        Ok(Self {
            length: settings.length,
            counter: AtomicU64::new(Timestamp::now().as_millisecond() as u64),
            salt: base62_map(&salt_bytes),
        })
    }

    /// The fixed identifier length this instance produces.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Generator for HashGenerator {
    fn generate(&self) -> Result<ShortPath, GeneratorError> {
        let id = self.counter.fetch_add(1, Ordering::Relaxed);
        let timestamp = Timestamp::now().as_nanosecond();

        let mut random_bytes = [0u8; 4];
        OsRng
            .try_fill_bytes(&mut random_bytes)
            .map_err(|e| GeneratorError::Entropy(e.to_string()))?;
        let random = i32::from_be_bytes(random_bytes);

        let input = format!("{}-{}-{}-{}", id, timestamp, random, self.salt);
        let digest = Sha256::digest(input.as_bytes());

        let encoded = base62_map(digest.as_slice());
        // Every mapped character is single-byte ASCII, so byte slicing is
        // character slicing here.
        Ok(ShortPath::new(&encoded[..self.length]))
    }

    fn is_valid_format(&self, candidate: &str) -> bool {
        candidate.len() == self.length
            && candidate.bytes().all(|b| b.is_ascii_alphanumeric())
    }
}

/// Maps each byte through modulo 62 into the alphanumeric alphabet.
fn base62_map(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| BASE62_ALPHABET[(b % 62) as usize] as char)
        .collect()
}
