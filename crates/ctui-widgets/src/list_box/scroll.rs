//! Scrollbar visibility, range and placement.

use ctui_core::geometry::Point;

use super::{ItemRenderer, ListBox};

impl<T, R> ListBox<T, R>
where
    T: PartialEq,
    R: ItemRenderer<T>,
{
    /// Rows available to items once the border is accounted for.
    #[must_use]
    pub fn usable_rows(&self) -> usize {
        let chrome = if self.config.hide_border { 0 } else { 2 };
        usize::from(self.height.saturating_sub(chrome))
    }

    /// Index of the first visible item.
    #[inline]
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scrollbar.value()
    }

    /// Scroll so `offset` is the first visible item, clamped to the range.
    /// Returns whether the offset changed.
    pub fn set_scroll_offset(&mut self, offset: usize) -> bool {
        let changed = self.scrollbar.set_value(offset);
        self.dirty |= changed;
        changed
    }

    #[inline]
    #[must_use]
    pub fn is_scrollbar_visible(&self) -> bool {
        self.scrollbar.is_visible()
    }

    /// Largest valid scroll offset.
    #[inline]
    #[must_use]
    pub fn scrollbar_maximum(&self) -> usize {
        self.scrollbar.maximum()
    }

    /// Column and row, in widget space, where the scrollbar is drawn.
    #[must_use]
    pub fn scrollbar_location(&self) -> Point {
        let offset = self.config.scrollbar_offset;
        Point::new(i32::from(self.width) - 1 + offset.x, offset.y)
    }

    /// Recompute the scrollbar's length and console position, then its
    /// visibility.
    pub(super) fn layout_scrollbar(&mut self) {
        let length = self
            .height
            .saturating_sub(self.config.scrollbar_size_adjust)
            .max(3);
        self.scrollbar.resize(length);
        self.scrollbar
            .set_position(self.position.offset(self.scrollbar_location()));
        self.show_hide_scrollbar();
    }

    /// Show the scrollbar exactly when items overflow the usable rows.
    pub(super) fn show_hide_scrollbar(&mut self) {
        let excess = self.containers.len().saturating_sub(self.usable_rows());
        let visible = excess > 0;
        let was_visible = self.scrollbar.is_visible();
        let old_maximum = self.scrollbar.maximum();

        self.scrollbar.set_visible(visible);
        let value_changed = self.scrollbar.set_maximum(excess);

        if value_changed || was_visible != visible || old_maximum != excess {
            self.dirty = true;
        }
    }
}
