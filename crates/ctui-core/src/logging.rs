#![forbid(unsafe_code)]

//! Structured logging hooks.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros so downstream crates can log through `ctui_core::debug!` and
//! friends. Without the feature nothing is compiled in.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, trace, warn};
