//! Interaction-state appearance for list rows.
//!
//! [`ItemTheme`] holds the base row style plus overrides for the hovered and
//! selected states. Resolving merges the state's override on top of the base
//! with [`Style::patch`], so an override only needs the fields it changes.
//!
//! # Example
//!
//! ```
//! use ctui_style::{InteractionState, ItemTheme, PackedRgba, Style};
//!
//! let theme = ItemTheme::new(Style::new().fg(PackedRgba::WHITE).bg(PackedRgba::BLACK))
//!     .hover(Style::new().bg(PackedRgba::rgb(64, 64, 64)))
//!     .selected(Style::new().bg(PackedRgba::BLUE));
//!
//! let state = InteractionState::from_flags(true, true);
//! assert_eq!(state, InteractionState::Selected);
//! assert_eq!(theme.resolve(state).bg, Some(PackedRgba::BLUE));
//! ```

#![forbid(unsafe_code)]

use crate::style::Style;

/// The interaction state of a list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// No pointer over the row and not selected.
    #[default]
    Normal,
    /// Pointer is over the row.
    Hovered,
    /// The row holds the list's selection.
    Selected,
}

impl InteractionState {
    /// Collapse row flags into a state. Selection outranks hover.
    #[must_use]
    pub const fn from_flags(selected: bool, hovered: bool) -> Self {
        if selected {
            Self::Selected
        } else if hovered {
            Self::Hovered
        } else {
            Self::Normal
        }
    }
}

/// Row styles for each interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTheme {
    /// Base style applied in all states.
    pub normal: Style,
    /// Override applied when hovered.
    pub hover: Option<Style>,
    /// Override applied when selected.
    pub selected: Option<Style>,
}

impl ItemTheme {
    #[must_use]
    pub const fn new(normal: Style) -> Self {
        Self {
            normal,
            hover: None,
            selected: None,
        }
    }

    /// Set the hover style override.
    #[must_use]
    pub const fn hover(mut self, style: Style) -> Self {
        self.hover = Some(style);
        self
    }

    /// Set the selected style override.
    #[must_use]
    pub const fn selected(mut self, style: Style) -> Self {
        self.selected = Some(style);
        self
    }

    /// Resolve the style for the given interaction state.
    #[must_use]
    pub fn resolve(&self, state: InteractionState) -> Style {
        let overlay = match state {
            InteractionState::Normal => None,
            InteractionState::Hovered => self.hover.as_ref(),
            InteractionState::Selected => self.selected.as_ref(),
        };
        match overlay {
            Some(style) => self.normal.patch(style),
            None => self.normal,
        }
    }
}

impl From<Style> for ItemTheme {
    fn from(style: Style) -> Self {
        Self::new(style)
    }
}
