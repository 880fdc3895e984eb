//! Store implementations for the Snip URL shortener.
//!
//! The reference backend is volatile and in-memory; persistent backends
//! plug in behind the same [`snip_core::MappingStore`] contract.

pub mod memory;

pub use memory::InMemoryMappingStore;
