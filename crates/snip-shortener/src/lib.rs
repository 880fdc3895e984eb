//! Orchestration layer for the Snip URL shortener.
//!
//! [`ShortenerService`] coordinates the identifier generator and the
//! mapping store to implement the user-facing operations: idempotent
//! shortening, metadata lookup, counted redirects, and deletion. This is
//! the layer that upgrades the generator's best-effort uniqueness into a
//! hard guarantee via a bounded collision-retry loop.

pub mod error;
pub mod service;
pub mod shortener;

pub use error::ShortenError;
pub use service::{ShortenerService, DEFAULT_RETENTION_DAYS, MAX_GENERATION_ATTEMPTS};
pub use shortener::Shortener;
