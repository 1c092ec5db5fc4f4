//! Hit testing, pointer and keyboard handling.

use std::rc::Rc;

use ctui_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ctui_core::geometry::Point;
use web_time::Instant;

use super::{ItemRenderer, ListBox};
use crate::mouse::MouseResult;

impl<T, R> ListBox<T, R>
where
    T: PartialEq,
    R: ItemRenderer<T>,
{
    /// Item index under `local`, a position relative to the widget origin.
    ///
    /// Positions on the border, on the scrollbar column or below the last
    /// item resolve to `None`.
    #[must_use]
    pub fn row_at(&self, local: Point) -> Option<usize> {
        let border = !self.config.hide_border;
        let bar = self.scrollbar.is_visible();
        let row_offset = i32::from(border);
        let column_end = i32::from(bar || border);
        let (width, height) = (i32::from(self.width), i32::from(self.height));

        if local.y < row_offset
            || local.y >= height - row_offset
            || local.x < row_offset
            || local.x >= width - column_end
        {
            return None;
        }

        let scroll = if bar { self.scroll_offset() } else { 0 };
        let row = (local.y - row_offset) as usize + scroll;
        (row < self.containers.len()).then_some(row)
    }

    /// Dispatch a key or mouse event. Returns whether it was consumed.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now).is_handled(),
            Event::Resize { .. } => false,
        }
    }

    /// Handle a mouse event in console coordinates.
    ///
    /// `now` timestamps primary clicks for double-click detection.
    pub fn handle_mouse(&mut self, event: &MouseEvent, now: Instant) -> MouseResult {
        let local = Point::local_to(event.x, event.y, self.position);
        let inside = local.x >= 0
            && local.y >= 0
            && local.x < i32::from(self.width)
            && local.y < i32::from(self.height);

        if !inside {
            if self.mouse_inside && self.mouse_exit() {
                return MouseResult::HoverChanged;
            }
            return MouseResult::Ignored;
        }
        self.mouse_inside = true;

        let on_bar_column = self.scrollbar.is_visible() && local.x == i32::from(self.width) - 1;
        match event.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            MouseEventKind::ScrollDown => self.scroll_by(1),
            MouseEventKind::Moved => self.hover_at(local),
            _ if on_bar_column => {
                let result = self.scrollbar.handle_mouse(event);
                if result.is_handled() {
                    self.dirty = true;
                }
                result
            }
            MouseEventKind::Down(MouseButton::Left) => self.click_at(local, now),
            _ => MouseResult::Ignored,
        }
    }

    /// The pointer left the widget: clear every hover flag.
    /// Returns whether any row changed appearance.
    pub fn mouse_exit(&mut self) -> bool {
        self.mouse_inside = false;
        self.set_hover(None)
    }

    /// Whether the pointer is currently over the widget.
    #[inline]
    #[must_use]
    pub const fn is_mouse_inside(&self) -> bool {
        self.mouse_inside
    }

    fn set_hover(&mut self, row: Option<usize>) -> bool {
        let mut changed = false;
        for (i, container) in self.containers.iter_mut().enumerate() {
            changed |= container.set_hovered(row == Some(i));
        }
        self.dirty |= changed;
        changed
    }

    fn hover_at(&mut self, local: Point) -> MouseResult {
        let row = self.row_at(local);
        if self.set_hover(row) {
            MouseResult::HoverChanged
        } else {
            MouseResult::Ignored
        }
    }

    fn scroll_by(&mut self, delta: isize) -> MouseResult {
        let target = self.scroll_offset().saturating_add_signed(delta);
        if self.set_scroll_offset(target) {
            MouseResult::Scrolled
        } else {
            MouseResult::Ignored
        }
    }

    fn click_at(&mut self, local: Point, now: Instant) -> MouseResult {
        let window = self.config.double_click_window;
        let quick = self
            .last_click
            .is_some_and(|prev| now.saturating_duration_since(prev) <= window);
        self.last_click = Some(now);

        let Some(row) = self.row_at(local) else {
            return MouseResult::Ignored;
        };
        let Some(item) = self.items.get(row).map(Rc::clone) else {
            return MouseResult::Ignored;
        };

        let previous = self.selected.clone();
        self.assign_selection(Some(Rc::clone(&item)), "click");

        let same = previous.is_some_and(|prev| self.same_item(&prev, &item));
        if quick && same {
            self.last_click = None;
            self.activate();
            return MouseResult::Activated(row);
        }
        MouseResult::Selected(row)
    }

    /// Handle Up, Down and Enter. Those keys are always consumed, even at
    /// the ends of the list; anything else is not. Releases are ignored.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                true
            }
            KeyCode::Down => {
                self.select_next();
                true
            }
            KeyCode::Enter => {
                self.activate();
                true
            }
            _ => false,
        }
    }

    fn select_previous(&mut self) {
        let Some(index) = self.selected_index() else {
            return;
        };
        let Some(previous) = index.checked_sub(1).and_then(|i| self.items.get(i)) else {
            return;
        };
        let previous = Rc::clone(previous);
        self.assign_selection(Some(previous), "key_up");
        if index <= self.scroll_offset() {
            self.set_scroll_offset(self.scroll_offset().saturating_sub(1));
        }
    }

    fn select_next(&mut self) {
        let Some(index) = self.selected_index() else {
            if let Some(first) = self.items.get(0).map(Rc::clone) {
                self.assign_selection(Some(first), "key_down");
            }
            return;
        };
        let next = index + 1;
        let Some(item) = self.items.get(next).map(Rc::clone) else {
            return;
        };
        self.assign_selection(Some(item), "key_down");
        // usable_rows, not height - 2, so borderless lists follow too.
        if next >= self.scroll_offset() + self.usable_rows() {
            self.set_scroll_offset(self.scroll_offset() + 1);
        }
    }
}
