#![forbid(unsafe_code)]

//! Character buffer.
//!
//! A [`Buffer`] is a row-major grid of [`Cell`]s. All writes are clipped to
//! the buffer bounds: drawing code may address cells outside the grid and the
//! write is silently dropped, which keeps widget composition free of
//! per-call bounds bookkeeping.

use crate::cell::{Cell, CellAttrs, PackedRgba};
use ctui_core::geometry::Rect;

/// A fixed-size 2D grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer filled with default cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area anchored at the origin.
    #[inline]
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Borrow the cell at `(x, y)`, if in bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Mutably borrow the cell at `(x, y)`, if in bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index_of(x, y).map(|i| &mut self.cells[i])
    }

    /// Replace the cell at `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Replace only the glyph at `(x, y)`, keeping colors and attributes.
    #[inline]
    pub fn set_char(&mut self, x: u16, y: u16, ch: char) {
        if let Some(slot) = self.get_mut(x, y) {
            slot.ch = ch;
        }
    }

    /// Replace colors and attributes at `(x, y)`, keeping the glyph.
    #[inline]
    pub fn set_appearance(&mut self, x: u16, y: u16, fg: PackedRgba, bg: PackedRgba, attrs: CellAttrs) {
        if let Some(slot) = self.get_mut(x, y) {
            slot.fg = fg;
            slot.bg = bg;
            slot.attrs = attrs;
        }
    }

    /// Reset every cell to [`Cell::default`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Fill `area` (clipped to the buffer) with copies of `cell`.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let clipped = area.intersection(&self.area());
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Resize the grid, discarding its contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        #[cfg(feature = "tracing")]
        ctui_core::trace!(
            message = "buffer.resize",
            from_w = self.width,
            from_h = self.height,
            to_w = width,
            to_h = height
        );
        *self = Self::new(width, height);
    }

    /// Copy the `src_area` region of `src` so its top-left lands at
    /// `(dst_x, dst_y)`. Cells falling outside either buffer are skipped.
    pub fn copy_from(&mut self, src: &Buffer, src_area: Rect, dst_x: u16, dst_y: u16) {
        let clipped = src_area.intersection(&src.area());
        for dy in 0..clipped.height {
            for dx in 0..clipped.width {
                if let Some(cell) = src.get(clipped.x + dx, clipped.y + dy) {
                    self.set(dst_x.saturating_add(dx), dst_y.saturating_add(dy), *cell);
                }
            }
        }
    }

    /// Glyphs of row `y` as a string (empty when out of bounds).
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|cell| cell.ch))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut buf = Buffer::new(3, 2);
        buf.set(5, 5, Cell::from_char('x'));
        buf.set_char(3, 0, 'y');
        assert!(buf.get(5, 5).is_none());
        assert_eq!(buf.row_text(0), "   ");
    }

    #[test]
    fn fill_is_clipped_to_buffer() {
        let mut buf = Buffer::new(4, 2);
        buf.fill(Rect::new(2, 1, 10, 10), Cell::from_char('#'));
        assert_eq!(buf.row_text(0), "    ");
        assert_eq!(buf.row_text(1), "  ##");
    }

    #[test]
    fn set_char_keeps_colors() {
        let mut buf = Buffer::new(2, 1);
        buf.set(0, 0, Cell::from_char('a').with_fg(PackedRgba::RED));
        buf.set_char(0, 0, 'b');
        let cell = buf.get(0, 0).unwrap();
        assert_eq!(cell.ch, 'b');
        assert_eq!(cell.fg, PackedRgba::RED);
    }

    #[test]
    fn set_appearance_keeps_glyph() {
        let mut buf = Buffer::new(1, 1);
        buf.set_char(0, 0, 'q');
        buf.set_appearance(0, 0, PackedRgba::GREEN, PackedRgba::BLUE, CellAttrs::BOLD);
        let cell = buf.get(0, 0).unwrap();
        assert_eq!(cell.ch, 'q');
        assert_eq!(cell.bg, PackedRgba::BLUE);
        assert!(cell.attrs.contains(CellAttrs::BOLD));
    }

    #[test]
    fn clear_resets_all_cells() {
        let mut buf = Buffer::new(2, 2);
        buf.fill(buf.area(), Cell::from_char('z'));
        buf.clear();
        assert_eq!(buf, Buffer::new(2, 2));
    }

    #[test]
    fn copy_from_places_column() {
        let mut column = Buffer::new(1, 3);
        column.set_char(0, 0, '▲');
        column.set_char(0, 1, '█');
        column.set_char(0, 2, '▼');

        let mut buf = Buffer::new(4, 4);
        buf.copy_from(&column, column.area(), 3, 2);
        assert_eq!(buf.get(3, 2).unwrap().ch, '▲');
        assert_eq!(buf.get(3, 3).unwrap().ch, '█');
        // Third cell falls off the bottom edge.
        assert_eq!(buf.row_text(1), "    ");
    }

    #[test]
    fn resize_discards_contents() {
        let mut buf = Buffer::new(2, 2);
        buf.set_char(0, 0, 'k');
        buf.resize(3, 1);
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.height(), 1);
        assert_eq!(buf.row_text(0), "   ");
    }
}
