#![forbid(unsafe_code)]

//! Core: geometry and canonical input events.
//!
//! # Role in ctui
//! `ctui-core` is the input layer. It owns the normalized event types that
//! widgets consume and the integer geometry every other crate shares.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (keys, mouse, resize).
//! - **Geometry**: `Rect` for cell regions and `Point` for signed offsets.
//!
//! # How it fits in the system
//! `ctui-render` and `ctui-widgets` build on these types. The render kernel
//! never looks at input, so this crate is the clean seam between the
//! platform's event dispatch and widget logic.

pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, warn};
