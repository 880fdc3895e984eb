//! Core types and traits for the Snip URL shortener.
//!
//! This crate provides the mapping entity, the short-path identifier type,
//! and the store contract shared by the shortener service and any HTTP or
//! RPC front end.

pub mod error;
pub mod mapping;
pub mod short_path;
pub mod store;

pub use error::{Result, StoreError};
pub use mapping::UrlMapping;
pub use short_path::ShortPath;
pub use store::MappingStore;
