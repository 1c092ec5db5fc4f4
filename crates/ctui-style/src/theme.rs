#![forbid(unsafe_code)]

use std::collections::HashMap;

use crate::interactive::ItemTheme;
use crate::style::Style;
use ctui_render::cell::{CellAttrs, PackedRgba};

const DARK_GRAY: PackedRgba = PackedRgba::rgb(64, 64, 64);
const LIGHT_GRAY: PackedRgba = PackedRgba::rgb(192, 192, 192);
const NAVY: PackedRgba = PackedRgba::rgb(0, 0, 128);

/// Border outline and interior fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderTheme {
    /// Outline colors. The background doubles as the interior fill color.
    pub style: Style,
    /// Glyph used for blank interior cells.
    pub fill: char,
}

impl Default for BorderTheme {
    fn default() -> Self {
        Self {
            style: Style::new().fg(LIGHT_GRAY).bg(PackedRgba::BLACK),
            fill: ' ',
        }
    }
}

/// Appearance of the scroll indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollBarTheme {
    pub track: Style,
    pub thumb: Style,
    /// Style of the step buttons at either end.
    pub ends: Style,
    pub track_glyph: char,
    pub thumb_glyph: char,
    pub begin_glyph: char,
    pub end_glyph: char,
}

impl Default for ScrollBarTheme {
    fn default() -> Self {
        Self {
            track: Style::new().fg(DARK_GRAY).bg(PackedRgba::BLACK),
            thumb: Style::new().fg(LIGHT_GRAY).bg(PackedRgba::BLACK),
            ends: Style::new().fg(PackedRgba::WHITE).bg(PackedRgba::BLACK),
            track_glyph: '░',
            thumb_glyph: '█',
            begin_glyph: '▲',
            end_glyph: '▼',
        }
    }
}

/// Complete theme for a list box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListBoxTheme {
    pub border: BorderTheme,
    /// Row appearance handed to every container that does not keep its own.
    pub item: ItemTheme,
    pub scrollbar: ScrollBarTheme,
}

impl Default for ListBoxTheme {
    fn default() -> Self {
        Self {
            border: BorderTheme::default(),
            item: ItemTheme::new(Style::new().fg(PackedRgba::WHITE).bg(PackedRgba::BLACK))
                .hover(Style::new().bg(DARK_GRAY))
                .selected(
                    Style::new()
                        .fg(PackedRgba::WHITE)
                        .bg(NAVY)
                        .attrs(CellAttrs::BOLD),
                ),
            scrollbar: ScrollBarTheme::default(),
        }
    }
}

impl ListBoxTheme {
    /// High-contrast variant: selection is drawn reversed.
    #[must_use]
    pub fn contrast() -> Self {
        let base = Style::new().fg(PackedRgba::WHITE).bg(PackedRgba::BLACK);
        Self {
            border: BorderTheme {
                style: base,
                fill: ' ',
            },
            item: ItemTheme::new(base)
                .hover(Style::new().attrs(CellAttrs::UNDERLINE))
                .selected(base.inverted()),
            scrollbar: ScrollBarTheme {
                track: base,
                thumb: base.inverted(),
                ends: base,
                ..ScrollBarTheme::default()
            },
        }
    }
}

/// Named themes with a fallback default.
#[derive(Debug, Clone)]
pub struct ThemeLibrary {
    default: ListBoxTheme,
    named: HashMap<String, ListBoxTheme>,
}

impl Default for ThemeLibrary {
    fn default() -> Self {
        let mut library = Self {
            default: ListBoxTheme::default(),
            named: HashMap::new(),
        };
        library.register("contrast", ListBoxTheme::contrast());
        library
    }
}

impl ThemeLibrary {
    /// The theme used when a widget has no explicit theme.
    #[must_use]
    pub fn default_theme(&self) -> &ListBoxTheme {
        &self.default
    }

    pub fn set_default_theme(&mut self, theme: ListBoxTheme) {
        self.default = theme;
    }

    /// Register (or replace) a named theme.
    pub fn register(&mut self, name: impl Into<String>, theme: ListBoxTheme) {
        self.named.insert(name.into(), theme);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ListBoxTheme> {
        self.named.get(name)
    }

    /// Look up `name`, falling back to the default theme.
    #[must_use]
    pub fn resolve(&self, name: &str) -> ListBoxTheme {
        match self.named.get(name) {
            Some(theme) => *theme,
            None => {
                tracing::debug!(message = "theme.fallback", name);
                self.default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::InteractionState;
    use tracing_test::traced_test;

    #[test]
    fn default_theme_distinguishes_states() {
        let theme = ListBoxTheme::default();
        let normal = theme.item.resolve(InteractionState::Normal);
        let hovered = theme.item.resolve(InteractionState::Hovered);
        let selected = theme.item.resolve(InteractionState::Selected);
        assert_ne!(normal, hovered);
        assert_ne!(normal, selected);
        assert_ne!(hovered, selected);
    }

    #[test]
    fn library_has_contrast_preset() {
        let library = ThemeLibrary::default();
        assert_eq!(library.get("contrast"), Some(&ListBoxTheme::contrast()));
        assert!(library.get("missing").is_none());
    }

    #[traced_test]
    #[test]
    fn unknown_name_falls_back_and_logs() {
        let library = ThemeLibrary::default();
        assert_eq!(library.resolve("nope"), ListBoxTheme::default());
        assert!(logs_contain("theme.fallback"));
    }

    #[test]
    fn default_theme_can_be_replaced() {
        let mut library = ThemeLibrary::default();
        library.set_default_theme(ListBoxTheme::contrast());
        assert_eq!(library.default_theme(), &ListBoxTheme::contrast());
        assert_eq!(library.resolve("nope"), ListBoxTheme::contrast());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn theme_serializes_round_trip() {
        let theme = ListBoxTheme::contrast();
        let json = serde_json::to_string(&theme).expect("serialize theme");
        let back: ListBoxTheme = serde_json::from_str(&json).expect("deserialize theme");
        assert_eq!(back, theme);
    }
}
