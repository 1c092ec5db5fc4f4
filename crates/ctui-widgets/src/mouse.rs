//! Outcome of feeding a mouse event to a widget.

/// What a widget did with a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseResult {
    /// The event had no effect.
    Ignored,
    /// Hover moved to a different row, or was cleared.
    HoverChanged,
    /// The row at this item index became the selection.
    Selected(usize),
    /// The row at this item index was activated (double-click).
    Activated(usize),
    /// The scroll position changed.
    Scrolled,
}

impl MouseResult {
    /// Whether the event changed widget state.
    #[must_use]
    pub const fn is_handled(self) -> bool {
        !matches!(self, MouseResult::Ignored)
    }
}
