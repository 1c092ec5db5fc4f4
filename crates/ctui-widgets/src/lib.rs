#![forbid(unsafe_code)]

//! Core widgets for ctui.
//!
//! The centerpiece is [`list_box::ListBox`], a virtualized, selectable list
//! that keeps one visual container per backing item and recomposes its
//! character buffer only when something visible changed. [`block::Block`]
//! and [`scrollbar::ScrollBar`] are the decoration and scroll-indicator
//! collaborators it composes with.

pub mod block;
pub mod borders;
pub mod list_box;
pub mod mouse;
pub mod scrollbar;

use ctui_core::geometry::Rect;
use ctui_render::buffer::Buffer;
use ctui_style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Buffer` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Apply `style` to every cell of `area`, keeping glyphs.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                style.apply_to(cell);
            }
        }
    }
}

/// Draw `text` starting at `(x, y)`, stopping before `max_x`.
///
/// Wide graphemes occupy two cells; the trailing cell is blanked in the
/// same style. A grapheme that would cross `max_x` is not drawn.
/// Returns the column after the last drawn cell.
pub(crate) fn draw_text_span(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    text: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in text.graphemes(true) {
        let width = grapheme.width() as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > max_x {
            break;
        }
        let ch = grapheme.chars().next().unwrap_or(' ');
        buf.set(x, y, style.cell(ch));
        for pad in 1..width {
            buf.set(x + pad, y, style.cell(' '));
        }
        x += width;
    }
    x
}

/// Truncate or right-pad `text` to exactly `width` display columns.
pub(crate) fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0usize;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > width {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}
