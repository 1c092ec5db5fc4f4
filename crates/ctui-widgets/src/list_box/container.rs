//! Per-row containers and the renderers that draw them.
//!
//! A [`Container`] wraps one backing item with the row's interaction flags
//! and its resolved appearance. Flag and theme setters report whether the
//! container became dirty so the owning list can propagate it; containers
//! never hold a reference back to their list.

use std::fmt::Display;
use std::rc::Rc;

use crate::{draw_text_span, fit_to_width};
use ctui_core::geometry::Rect;
use ctui_render::buffer::Buffer;
use ctui_style::{InteractionState, ItemTheme, PackedRgba, Style};

/// Visual and interaction state for one list row.
#[derive(Debug, Clone)]
pub struct Container<T> {
    item: Rc<T>,
    theme: ItemTheme,
    appearance: Style,
    selected: bool,
    hovered: bool,
    dirty: bool,
    keeps_own_theme: bool,
}

impl<T> Container<T> {
    /// Bind a fresh, dirty container to `item`.
    #[must_use]
    pub fn new(item: Rc<T>, theme: ItemTheme) -> Self {
        Self {
            item,
            appearance: theme.resolve(InteractionState::Normal),
            theme,
            selected: false,
            hovered: false,
            dirty: true,
            keeps_own_theme: false,
        }
    }

    /// A container that ignores the list's item theme.
    #[must_use]
    pub fn with_own_theme(item: Rc<T>, theme: ItemTheme) -> Self {
        Self {
            keeps_own_theme: true,
            ..Self::new(item, theme)
        }
    }

    #[inline]
    #[must_use]
    pub fn item(&self) -> &Rc<T> {
        &self.item
    }

    pub(crate) fn bind(&mut self, item: Rc<T>) {
        self.item = item;
        self.dirty = true;
    }

    #[inline]
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    #[inline]
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    #[must_use]
    pub const fn keeps_own_theme(&self) -> bool {
        self.keeps_own_theme
    }

    /// The style this row is drawn with right now.
    #[inline]
    #[must_use]
    pub const fn appearance(&self) -> Style {
        self.appearance
    }

    #[must_use]
    pub fn theme(&self) -> &ItemTheme {
        &self.theme
    }

    #[must_use]
    pub const fn interaction_state(&self) -> InteractionState {
        InteractionState::from_flags(self.selected, self.hovered)
    }

    /// Returns `true` when the row's appearance changed.
    #[must_use = "propagate the dirty change to the owning list"]
    pub fn set_selected(&mut self, selected: bool) -> bool {
        self.selected = selected;
        self.determine_appearance()
    }

    /// Returns `true` when the row's appearance changed.
    #[must_use = "propagate the dirty change to the owning list"]
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        self.hovered = hovered;
        self.determine_appearance()
    }

    /// Returns `true` when the row's appearance changed.
    #[must_use = "propagate the dirty change to the owning list"]
    pub fn set_theme(&mut self, theme: ItemTheme) -> bool {
        self.theme = theme;
        self.determine_appearance()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn determine_appearance(&mut self) -> bool {
        let next = self.theme.resolve(self.interaction_state());
        if next == self.appearance {
            return false;
        }
        self.appearance = next;
        self.dirty = true;
        true
    }

    /// Draw this row with `renderer` and clear the dirty flag.
    pub fn draw<R: ItemRenderer<T> + ?Sized>(&mut self, renderer: &R, buf: &mut Buffer, area: Rect) {
        renderer.draw(self, buf, area);
        self.dirty = false;
    }
}

/// Draws one container into a single-row area.
pub trait ItemRenderer<T> {
    fn draw(&self, row: &Container<T>, buf: &mut Buffer, area: Rect);

    /// A theme every new container keeps instead of the list's item theme.
    fn own_theme(&self) -> Option<ItemTheme> {
        None
    }
}

/// Draws the item's `Display` text, truncated or padded to the row.
///
/// Selected rows get a marker glyph in their first and last cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    markers: Option<(char, char)>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            markers: Some(('►', '◄')),
        }
    }

    #[must_use]
    pub const fn selection_markers(mut self, left: char, right: char) -> Self {
        self.markers = Some((left, right));
        self
    }

    /// Draw selected rows with the selected appearance only.
    #[must_use]
    pub const fn without_markers(mut self) -> Self {
        self.markers = None;
        self
    }
}

impl<T: Display> ItemRenderer<T> for TextRenderer {
    fn draw(&self, row: &Container<T>, buf: &mut Buffer, area: Rect) {
        if area.is_empty() {
            return;
        }
        let text = fit_to_width(&row.item().to_string(), usize::from(area.width));
        draw_text_span(buf, area.x, area.y, &text, row.appearance(), area.right());
        if let Some((left, right)) = self.markers
            && row.is_selected()
        {
            let style = row.appearance();
            buf.set(area.x, area.y, style.cell(left));
            buf.set(area.right() - 1, area.y, style.cell(right));
        }
    }
}

/// A color chip as shown by [`SwatchRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchChip<'a> {
    pub color: PackedRgba,
    /// Label color; the row's foreground when unset.
    pub label_color: Option<PackedRgba>,
    pub label: &'a str,
}

/// Items that can be shown as a color chip.
pub trait Swatch {
    fn chip(&self) -> SwatchChip<'_>;
}

impl Swatch for PackedRgba {
    fn chip(&self) -> SwatchChip<'_> {
        SwatchChip {
            color: *self,
            label_color: None,
            label: "",
        }
    }
}

/// `(chip color, label color, label)`.
impl Swatch for (PackedRgba, PackedRgba, String) {
    fn chip(&self) -> SwatchChip<'_> {
        SwatchChip {
            color: self.0,
            label_color: Some(self.1),
            label: &self.2,
        }
    }
}

/// Draws a color chip between two edge cells; selected rows get `►`/`◄`
/// in the edge cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwatchRenderer;

impl SwatchRenderer {
    pub const SELECTED_LEFT: char = '►';
    pub const SELECTED_RIGHT: char = '◄';
}

impl<T: Swatch> ItemRenderer<T> for SwatchRenderer {
    fn draw(&self, row: &Container<T>, buf: &mut Buffer, area: Rect) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        let appearance = row.appearance();
        let chip = row.item().chip();
        let mut chip_style = appearance.bg(chip.color);
        if let Some(fg) = chip.label_color {
            chip_style = chip_style.fg(fg);
        }

        let inner = usize::from(area.width - 2);
        let label = fit_to_width(chip.label, inner);
        let right = area.right() - 1;
        draw_text_span(buf, area.x + 1, area.y, &label, chip_style, right);

        let (left_glyph, right_glyph) = if row.is_selected() {
            (Self::SELECTED_LEFT, Self::SELECTED_RIGHT)
        } else {
            (' ', ' ')
        };
        buf.set(area.x, area.y, appearance.cell(left_glyph));
        buf.set(right, area.y, appearance.cell(right_glyph));
    }
}
