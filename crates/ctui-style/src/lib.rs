#![forbid(unsafe_code)]

//! Style types and widget themes for ctui.
//!
//! # Role in ctui
//! `ctui-style` is the shared vocabulary for colors and appearance. Widgets
//! resolve their current look from a theme and an interaction state, then
//! store the resulting colors in render cells.
//!
//! # This crate provides
//! - [`Style`] for partial appearance overrides with patch semantics.
//! - [`ItemTheme`] and [`InteractionState`] for per-state row appearance.
//! - [`ListBoxTheme`] and [`ScrollBarTheme`] for the list control.
//! - [`ThemeLibrary`] for named theme lookup with a default fallback.

/// Interaction-state appearance for list rows.
pub mod interactive;
/// Style type with patch semantics.
pub mod style;
/// Widget themes and the theme library.
pub mod theme;

pub use ctui_render::cell::{CellAttrs, PackedRgba};
pub use interactive::{InteractionState, ItemTheme};
pub use style::Style;
pub use theme::{BorderTheme, ListBoxTheme, ScrollBarTheme, ThemeLibrary};
