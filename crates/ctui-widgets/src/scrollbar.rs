#![forbid(unsafe_code)]

//! Scroll indicator control.
//!
//! [`ScrollBar`] owns a `value`/`maximum` pair and composes itself into a
//! one-cell-thick buffer: a step button at each end and a track with a
//! thumb placed proportionally to `value / maximum`. Hosts copy those cells
//! into their own surface and forward pointer events that land on it.

use crate::mouse::MouseResult;
use ctui_core::event::{MouseButton, MouseEvent, MouseEventKind};
use ctui_core::geometry::Point;
use ctui_render::buffer::Buffer;
use ctui_style::ScrollBarTheme;

/// Scrollbar orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// A scroll indicator with step buttons, track, and thumb.
#[derive(Debug, Clone)]
pub struct ScrollBar {
    orientation: Orientation,
    length: u16,
    value: usize,
    maximum: usize,
    visible: bool,
    /// Absolute console position of the first cell.
    position: Point,
    theme: ScrollBarTheme,
    buffer: Buffer,
}

impl ScrollBar {
    /// Create a visible scrollbar `length` cells long with range `0..=0`.
    #[must_use]
    pub fn new(orientation: Orientation, length: u16) -> Self {
        let length = length.max(1);
        Self {
            orientation,
            length,
            value: 0,
            maximum: 0,
            visible: true,
            position: Point::ZERO,
            theme: ScrollBarTheme::default(),
            buffer: Self::surface(orientation, length),
        }
    }

    fn surface(orientation: Orientation, length: u16) -> Buffer {
        match orientation {
            Orientation::Vertical => Buffer::new(1, length),
            Orientation::Horizontal => Buffer::new(length, 1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> u16 {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> usize {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn maximum(&self) -> usize {
        self.maximum
    }

    #[inline]
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    #[must_use]
    pub fn theme(&self) -> &ScrollBarTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: ScrollBarTheme) {
        self.theme = theme;
    }

    /// Change the length in cells (at least one).
    pub fn resize(&mut self, length: u16) {
        let length = length.max(1);
        if length != self.length {
            self.length = length;
            self.buffer = Self::surface(self.orientation, length);
        }
    }

    /// Set the value, clamped to `0..=maximum`. Returns whether it changed.
    pub fn set_value(&mut self, value: usize) -> bool {
        let value = value.min(self.maximum);
        let changed = value != self.value;
        self.value = value;
        changed
    }

    /// Set the maximum, pulling the value back into range.
    /// Returns whether the value changed.
    pub fn set_maximum(&mut self, maximum: usize) -> bool {
        self.maximum = maximum;
        self.set_value(self.value)
    }

    /// Step buttons exist only when there is room for a track between them.
    fn has_buttons(&self) -> bool {
        self.length >= 3
    }

    /// First track slot and number of track slots.
    fn track(&self) -> (u16, u16) {
        if self.has_buttons() {
            (1, self.length - 2)
        } else {
            (0, self.length)
        }
    }

    fn thumb_slot(&self) -> Option<u16> {
        let (start, count) = self.track();
        if self.maximum == 0 || count == 0 {
            return None;
        }
        let span = usize::from(count - 1);
        let rel = (self.value * span + self.maximum / 2) / self.maximum;
        Some(start + rel as u16)
    }

    fn slot_value(&self, slot: u16) -> usize {
        let (start, count) = self.track();
        if count <= 1 {
            return 0;
        }
        let span = usize::from(count - 1);
        let rel = usize::from(slot.saturating_sub(start)).min(span);
        (rel * self.maximum + span / 2) / span
    }

    /// Render every cell into the internal surface and return it.
    pub fn compose(&mut self) -> &Buffer {
        let theme = self.theme;
        let thumb = self.thumb_slot();
        let last = self.length - 1;
        let buttons = self.has_buttons();
        for slot in 0..self.length {
            let cell = if buttons && slot == 0 {
                theme.ends.cell(theme.begin_glyph)
            } else if buttons && slot == last {
                theme.ends.cell(theme.end_glyph)
            } else if thumb == Some(slot) {
                theme.thumb.cell(theme.thumb_glyph)
            } else {
                theme.track.cell(theme.track_glyph)
            };
            let (x, y) = match self.orientation {
                Orientation::Vertical => (0, slot),
                Orientation::Horizontal => (slot, 0),
            };
            self.buffer.set(x, y, cell);
        }
        &self.buffer
    }

    /// The cells produced by the last [`compose`](Self::compose).
    #[must_use]
    pub fn cells(&self) -> &Buffer {
        &self.buffer
    }

    /// Handle a mouse event in absolute console coordinates.
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> MouseResult {
        let local = Point::local_to(event.x, event.y, self.position);
        let (along, across) = match self.orientation {
            Orientation::Vertical => (local.y, local.x),
            Orientation::Horizontal => (local.x, local.y),
        };
        let on_bar = across == 0 && along >= 0 && along < i32::from(self.length);

        let changed = match event.kind {
            MouseEventKind::ScrollUp => self.set_value(self.value.saturating_sub(1)),
            MouseEventKind::ScrollDown => self.set_value(self.value.saturating_add(1)),
            MouseEventKind::Down(MouseButton::Left) if on_bar => {
                let slot = along as u16;
                if self.has_buttons() && slot == 0 {
                    self.set_value(self.value.saturating_sub(1))
                } else if self.has_buttons() && slot == self.length - 1 {
                    self.set_value(self.value.saturating_add(1))
                } else {
                    self.set_value(self.slot_value(slot))
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if on_bar => {
                let (start, count) = self.track();
                let slot = (along as u16).clamp(start, start + count.saturating_sub(1));
                self.set_value(self.slot_value(slot))
            }
            _ => false,
        };

        if changed {
            MouseResult::Scrolled
        } else {
            MouseResult::Ignored
        }
    }
}
