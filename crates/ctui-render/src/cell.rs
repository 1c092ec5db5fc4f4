#![forbid(unsafe_code)]

//! Cells: the unit of the character grid.

use bitflags::bitflags;

/// An RGBA color packed into a `u32` (`0xRRGGBBAA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    pub const TRANSPARENT: Self = Self(0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Opaque color from RGB channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }
}

bitflags! {
    /// Text attributes stored per cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CellAttrs: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const BLINK     = 0b0001_0000;
        const REVERSE   = 0b0010_0000;
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Glyph shown in the cell.
    pub ch: char,
    pub fg: PackedRgba,
    pub bg: PackedRgba,
    pub attrs: CellAttrs,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: PackedRgba::WHITE,
            bg: PackedRgba::BLACK,
            attrs: CellAttrs::empty(),
        }
    }
}

impl Cell {
    /// A default-colored cell holding `ch`.
    #[inline]
    #[must_use]
    pub fn from_char(ch: char) -> Self {
        Self {
            ch,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: PackedRgba) -> Self {
        self.fg = fg;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: PackedRgba) -> Self {
        self.bg = bg;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_attrs(mut self, attrs: CellAttrs) -> Self {
        self.attrs = attrs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_rgba_round_trip_channels() {
        let packed = PackedRgba::rgba(12, 34, 56, 78);
        assert_eq!(packed.r(), 12);
        assert_eq!(packed.g(), 34);
        assert_eq!(packed.b(), 56);
        assert_eq!(packed.a(), 78);
    }

    #[test]
    fn packed_rgba_rgb_defaults_to_opaque() {
        assert_eq!(PackedRgba::rgb(1, 2, 3).a(), 255);
    }

    #[test]
    fn cell_builders_replace_fields() {
        let cell = Cell::from_char('x')
            .with_fg(PackedRgba::RED)
            .with_bg(PackedRgba::BLUE)
            .with_attrs(CellAttrs::BOLD | CellAttrs::REVERSE);
        assert_eq!(cell.ch, 'x');
        assert_eq!(cell.fg, PackedRgba::RED);
        assert_eq!(cell.bg, PackedRgba::BLUE);
        assert!(cell.attrs.contains(CellAttrs::REVERSE));
        assert_eq!(cell.with_char('y').ch, 'y');
    }

    #[test]
    fn default_cell_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.ch, ' ');
        assert!(cell.attrs.is_empty());
    }
}
