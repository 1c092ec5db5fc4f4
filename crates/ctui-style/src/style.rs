#![forbid(unsafe_code)]

use ctui_render::cell::{Cell, CellAttrs, PackedRgba};

/// A partial cell appearance.
///
/// Unset fields leave the underlying cell untouched when applied, and are
/// inherited from the base when patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub fg: Option<PackedRgba>,
    pub bg: Option<PackedRgba>,
    pub attrs: Option<CellAttrs>,
}

impl Style {
    /// An empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    #[must_use]
    pub const fn fg(mut self, fg: PackedRgba) -> Self {
        self.fg = Some(fg);
        self
    }

    #[must_use]
    pub const fn bg(mut self, bg: PackedRgba) -> Self {
        self.bg = Some(bg);
        self
    }

    #[must_use]
    pub const fn attrs(mut self, attrs: CellAttrs) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Layer `other` on top of `self`: every field `other` sets wins.
    #[must_use]
    pub fn patch(&self, other: &Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: other.attrs.or(self.attrs),
        }
    }

    /// Swap foreground and background.
    #[must_use]
    pub const fn inverted(self) -> Style {
        Style {
            fg: self.bg,
            bg: self.fg,
            attrs: self.attrs,
        }
    }

    /// Write the set fields of this style into `cell`.
    pub fn apply_to(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = self.attrs {
            cell.attrs = attrs;
        }
    }

    /// A cell holding `ch` in this style, unset fields taken from
    /// [`Cell::default`].
    #[must_use]
    pub fn cell(&self, ch: char) -> Cell {
        let mut cell = Cell::from_char(ch);
        self.apply_to(&mut cell);
        cell
    }
}
