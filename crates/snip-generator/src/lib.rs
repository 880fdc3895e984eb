//! Short-path identifier generation for the Snip URL shortener.
//!
//! The reference generator hashes a counter, a clock reading, fresh OS
//! entropy, and a per-instance salt into a fixed-length base62 identifier.
//! Generators are best-effort collision avoiders; the orchestrator layer
//! upgrades that into a hard uniqueness guarantee by probing the store.

pub mod error;
pub mod hash;

pub use error::GeneratorError;
pub use hash::{GeneratorSettings, HashGenerator, DEFAULT_LENGTH};

use snip_core::ShortPath;

/// Trait for producing short-path identifiers.
///
/// Implementations are pure generators that never consult storage, so two
/// calls may collide at birthday-bound probability; callers that need hard
/// uniqueness must check candidates against the store and retry.
pub trait Generator: Send + Sync + 'static {
    /// Produces the next candidate identifier.
    ///
    /// Only fails when the underlying entropy source does, which is fatal
    /// for the request and must not be masked.
    fn generate(&self) -> Result<ShortPath, GeneratorError>;

    /// Pure syntactic check: correct length, every character from the
    /// 62-character alphanumeric alphabet. Never consults the store.
    fn is_valid_format(&self, candidate: &str) -> bool;
}
