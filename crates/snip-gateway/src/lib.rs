//! HTTP adapter for the Snip URL shortener.
//!
//! A thin axum layer over the transport-independent [`snip_shortener`]
//! surface: request validation, status-code mapping, and DTO shaping live
//! here; the core never formats or logs errors itself.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
