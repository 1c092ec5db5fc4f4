#![forbid(unsafe_code)]

//! Box outline with optional interior fill.

use crate::Widget;
use crate::borders::BorderType;
use crate::set_style_area;
use ctui_core::geometry::Rect;
use ctui_render::buffer::Buffer;
use ctui_style::Style;

/// Draws a rectangle outline and, optionally, fills its interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Block {
    border_type: BorderType,
    border_style: Style,
    fill: Option<char>,
}

impl Block {
    /// Create a block with a plain outline and no fill.
    #[must_use]
    pub fn bordered() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Colors for the outline. The background also colors the interior.
    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Fill the interior with `glyph` in the border style.
    #[must_use]
    pub fn fill(mut self, glyph: char) -> Self {
        self.fill = Some(glyph);
        self
    }

    /// The area inside the outline.
    #[must_use]
    pub fn inner(&self, area: Rect) -> Rect {
        area.inset(1)
    }
}

impl Widget for Block {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(&buf.area());
        if area.is_empty() {
            return;
        }

        if let Some(glyph) = self.fill {
            buf.fill(self.inner(area), self.border_style.cell(glyph));
        }

        let set = self.border_type.to_border_set();
        let (right, bottom) = (area.right() - 1, area.bottom() - 1);
        let cell = |ch| self.border_style.cell(ch);

        for x in area.x..area.right() {
            buf.set(x, area.y, cell(set.horizontal));
            buf.set(x, bottom, cell(set.horizontal));
        }
        for y in area.y..area.bottom() {
            buf.set(area.x, y, cell(set.vertical));
            buf.set(right, y, cell(set.vertical));
        }

        // Corners last so they overwrite edge glyphs.
        buf.set(area.x, area.y, cell(set.top_left));
        buf.set(right, area.y, cell(set.top_right));
        buf.set(area.x, bottom, cell(set.bottom_left));
        buf.set(right, bottom, cell(set.bottom_right));

        if self.fill.is_none() {
            // Unfilled interiors still pick up the background color.
            if let Some(bg) = self.border_style.bg {
                set_style_area(buf, self.inner(area), Style::new().bg(bg));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctui_style::PackedRgba;

    #[test]
    fn renders_plain_outline() {
        let mut buf = Buffer::new(4, 3);
        Block::bordered().render(buf.area(), &mut buf);
        assert_eq!(buf.row_text(0), "┌──┐");
        assert_eq!(buf.row_text(1), "│  │");
        assert_eq!(buf.row_text(2), "└──┘");
    }

    #[test]
    fn fill_paints_interior_in_border_colors() {
        let style = Style::new().fg(PackedRgba::WHITE).bg(PackedRgba::BLUE);
        let mut buf = Buffer::new(4, 3);
        Block::bordered()
            .border_type(BorderType::Ascii)
            .border_style(style)
            .fill('.')
            .render(buf.area(), &mut buf);
        assert_eq!(buf.row_text(0), "+--+");
        assert_eq!(buf.row_text(1), "|..|");
        assert_eq!(buf.get(1, 1).unwrap().bg, PackedRgba::BLUE);
    }

    #[test]
    fn unfilled_interior_keeps_glyphs_but_takes_background() {
        let mut buf = Buffer::new(3, 3);
        buf.set_char(1, 1, 'x');
        Block::bordered()
            .border_style(Style::new().bg(PackedRgba::GREEN))
            .render(buf.area(), &mut buf);
        let cell = buf.get(1, 1).unwrap();
        assert_eq!(cell.ch, 'x');
        assert_eq!(cell.bg, PackedRgba::GREEN);
    }

    #[test]
    fn inner_shrinks_by_one_on_each_side() {
        assert_eq!(Block::bordered().inner(Rect::new(0, 0, 10, 5)), Rect::new(1, 1, 8, 3));
    }

    #[test]
    fn zero_area_is_noop() {
        let mut buf = Buffer::new(2, 2);
        Block::bordered().render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(buf, Buffer::new(2, 2));
    }
}
