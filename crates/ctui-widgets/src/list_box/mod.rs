#![forbid(unsafe_code)]

//! Virtualized, selectable list box.
//!
//! [`ListBox`] owns an observable [`ItemCollection`] and a parallel sequence
//! of [`Container`]s, one per item. Mutating the items through
//! [`ListBox::items_mut`] records structural changes; when the returned
//! guard is dropped the list reconciles its containers, recomputes the
//! scrollbar and marks itself dirty. [`ListBox::compose`] redraws the
//! internal buffer only while dirty.
//!
//! # Example
//!
//! ```
//! use ctui_widgets::list_box::ListBox;
//!
//! let mut list: ListBox<String> = ListBox::new(20, 5);
//! list.items_mut().extend(["one", "two", "three", "four"].map(String::from));
//! assert_eq!(list.containers().len(), 4);
//! assert!(list.is_scrollbar_visible());
//! assert!(list.compose());
//! assert!(!list.compose());
//! ```

mod collection;
mod compose;
mod container;
mod error;
mod input;
mod persist;
mod scroll;
mod sync;

pub use collection::{CollectionChange, CompareMode, ItemCollection};
pub use container::{Container, ItemRenderer, Swatch, SwatchChip, SwatchRenderer, TextRenderer};
pub use error::ListBoxError;
pub use persist::ListBoxSnapshot;

use std::ops::Deref;
use std::rc::Rc;
use std::time::Duration;

use crate::Widget;
use crate::borders::BorderType;
use crate::scrollbar::{Orientation, ScrollBar};
use ctui_core::geometry::{Point, Rect};
use ctui_render::buffer::Buffer;
use ctui_style::{ListBoxTheme, ThemeLibrary};
use web_time::Instant;

/// Configuration knobs for a [`ListBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ListBoxConfig {
    /// How selections and lookups match items.
    pub compare_mode: CompareMode,
    /// Draw rows edge to edge instead of inside an outline.
    pub hide_border: bool,
    /// Shift applied to the scrollbar's render location.
    pub scrollbar_offset: Point,
    /// Cells trimmed from the scrollbar's length.
    pub scrollbar_size_adjust: u16,
    /// Two clicks on the same selection within this window activate it.
    pub double_click_window: Duration,
    /// Glyph set for the outline.
    pub border_type: BorderType,
}

impl Default for ListBoxConfig {
    fn default() -> Self {
        Self {
            compare_mode: CompareMode::default(),
            hide_border: false,
            scrollbar_offset: Point::ZERO,
            scrollbar_size_adjust: 0,
            double_click_window: Duration::from_millis(500),
            border_type: BorderType::default(),
        }
    }
}

impl ListBoxConfig {
    #[must_use]
    pub fn compare_mode(mut self, mode: CompareMode) -> Self {
        self.compare_mode = mode;
        self
    }

    #[must_use]
    pub fn hide_border(mut self, hide: bool) -> Self {
        self.hide_border = hide;
        self
    }

    #[must_use]
    pub fn scrollbar_offset(mut self, offset: Point) -> Self {
        self.scrollbar_offset = offset;
        self
    }

    #[must_use]
    pub fn scrollbar_size_adjust(mut self, adjust: u16) -> Self {
        self.scrollbar_size_adjust = adjust;
        self
    }

    #[must_use]
    pub fn double_click_window(mut self, window: Duration) -> Self {
        self.double_click_window = window;
        self
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }
}

/// Signals raised by a [`ListBox`], drained with [`ListBox::take_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum ListBoxEvent<T> {
    /// The selection was assigned. Raised on every assignment, including
    /// re-selecting the current item.
    SelectionChanged(Option<Rc<T>>),
    /// The selected item was activated by Enter or a double-click.
    ItemActivated(Rc<T>),
}

/// A scrollable, selectable list of items.
#[derive(Debug)]
pub struct ListBox<T, R = TextRenderer> {
    items: ItemCollection<T>,
    containers: Vec<Container<T>>,
    renderer: R,
    config: ListBoxConfig,
    theme: Option<ListBoxTheme>,
    position: Point,
    width: u16,
    height: u16,
    buffer: Buffer,
    scrollbar: ScrollBar,
    selected: Option<Rc<T>>,
    mouse_inside: bool,
    last_click: Option<Instant>,
    dirty: bool,
    events: Vec<ListBoxEvent<T>>,
}

impl<T> ListBox<T, TextRenderer>
where
    T: PartialEq + std::fmt::Display,
{
    /// An empty list drawing items with their `Display` text.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_renderer(TextRenderer::new(), width, height)
    }
}

impl<T, R> ListBox<T, R>
where
    T: PartialEq,
    R: ItemRenderer<T>,
{
    /// An empty list drawing items with `renderer`.
    #[must_use]
    pub fn with_renderer(renderer: R, width: u16, height: u16) -> Self {
        let mut list = Self {
            items: ItemCollection::new(),
            containers: Vec::new(),
            renderer,
            config: ListBoxConfig::default(),
            theme: None,
            position: Point::ZERO,
            width,
            height,
            buffer: Buffer::new(width, height),
            scrollbar: ScrollBar::new(Orientation::Vertical, height),
            selected: None,
            mouse_inside: false,
            last_click: None,
            dirty: true,
            events: Vec::new(),
        };
        list.scrollbar.set_theme(list.theme().scrollbar);
        list.layout_scrollbar();
        list
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ListBoxConfig) -> Self {
        self.config = config;
        self.refresh_selection_flags();
        self.layout_scrollbar();
        self.dirty = true;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ListBoxTheme) -> Self {
        self.set_theme(Some(theme));
        self
    }

    /// Read-only view of the backing items.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &ItemCollection<T> {
        &self.items
    }

    /// Mutable access to the backing items.
    ///
    /// Containers are reconciled when the guard is dropped.
    pub fn items_mut(&mut self) -> ItemsMut<'_, T, R> {
        ItemsMut { list: self }
    }

    /// One container per item, in item order.
    #[inline]
    #[must_use]
    pub fn containers(&self) -> &[Container<T>] {
        &self.containers
    }

    #[inline]
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ListBoxConfig {
        &self.config
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

    /// Top-left corner in console coordinates.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        self.layout_scrollbar();
    }

    #[inline]
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// The surface produced by the last composition pass.
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    #[must_use]
    pub fn scrollbar(&self) -> &ScrollBar {
        &self.scrollbar
    }

    /// Drain raised signals, oldest first.
    pub fn take_events(&mut self) -> Vec<ListBoxEvent<T>> {
        std::mem::take(&mut self.events)
    }

    /// The explicit theme, or the library default.
    #[must_use]
    pub fn theme(&self) -> ListBoxTheme {
        self.theme.unwrap_or_default()
    }

    /// Set or clear the explicit theme and re-theme every container that
    /// does not keep its own.
    pub fn set_theme(&mut self, theme: Option<ListBoxTheme>) {
        self.theme = theme;
        let resolved = self.theme();
        self.scrollbar.set_theme(resolved.scrollbar);
        for container in &mut self.containers {
            if !container.keeps_own_theme() {
                let _ = container.set_theme(resolved.item);
                container.mark_dirty();
            }
        }
        self.dirty = true;
    }

    /// Look `name` up in `library` and apply it.
    pub fn apply_library_theme(&mut self, library: &ThemeLibrary, name: &str) {
        self.set_theme(Some(library.resolve(name)));
    }

    pub fn set_hide_border(&mut self, hide: bool) {
        self.config.hide_border = hide;
        self.show_hide_scrollbar();
        self.dirty = true;
    }

    pub fn set_scrollbar_offset(&mut self, offset: Point) {
        self.config.scrollbar_offset = offset;
        self.layout_scrollbar();
        self.dirty = true;
    }

    pub fn set_scrollbar_size_adjust(&mut self, adjust: u16) {
        self.config.scrollbar_size_adjust = adjust;
        self.layout_scrollbar();
        self.dirty = true;
    }

    pub fn set_compare_mode(&mut self, mode: CompareMode) {
        self.config.compare_mode = mode;
        self.refresh_selection_flags();
    }

    /// Change the widget size. The next [`compose`](Self::compose) redraws.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.buffer.resize(width, height);
        self.layout_scrollbar();
        self.dirty = true;
    }

    /// Index of `item` under the configured compare mode.
    #[must_use]
    pub fn position_of(&self, item: &Rc<T>) -> Option<usize> {
        self.items.position(item, self.config.compare_mode)
    }

    /// The container bound to `item`, if `item` is present.
    #[must_use]
    pub fn get_container(&self, item: &Rc<T>) -> Option<&Container<T>> {
        self.position_of(item).and_then(|i| self.containers.get(i))
    }

    /// Replace the container bound to `item` (matched by reference).
    pub fn set_container(
        &mut self,
        item: &Rc<T>,
        mut container: Container<T>,
    ) -> Result<(), ListBoxError> {
        let index = self
            .items
            .position(item, CompareMode::Reference)
            .ok_or(ListBoxError::ItemNotFound)?;
        container.bind(Rc::clone(item));
        if !container.keeps_own_theme() {
            let _ = container.set_theme(self.theme().item);
        }
        self.containers[index] = container;
        self.refresh_selection_flags();
        self.dirty = true;
        Ok(())
    }

    pub(crate) fn raise(&mut self, event: ListBoxEvent<T>) {
        self.events.push(event);
    }
}

/// Mutable access to a list's items; reconciles containers on drop.
pub struct ItemsMut<'a, T, R>
where
    T: PartialEq,
    R: ItemRenderer<T>,
{
    list: &'a mut ListBox<T, R>,
}

impl<T, R> Deref for ItemsMut<'_, T, R>
where
    T: PartialEq,
    R: ItemRenderer<T>,
{
    type Target = ItemCollection<T>;

    fn deref(&self) -> &Self::Target {
        &self.list.items
    }
}

impl<T, R> ItemsMut<'_, T, R>
where
    T: PartialEq,
    R: ItemRenderer<T>,
{
    pub fn push(&mut self, item: T) -> Rc<T> {
        self.list.items.push(item)
    }

    pub fn push_shared(&mut self, item: Rc<T>) -> Rc<T> {
        self.list.items.push_shared(item)
    }

    pub fn insert(&mut self, index: usize, item: T) -> Result<Rc<T>, ListBoxError> {
        self.list.items.insert(index, item)
    }

    pub fn insert_shared(&mut self, index: usize, item: Rc<T>) -> Result<Rc<T>, ListBoxError> {
        self.list.items.insert_shared(index, item)
    }

    pub fn insert_many<I>(&mut self, index: usize, items: I) -> Result<(), ListBoxError>
    where
        I: IntoIterator<Item = T>,
    {
        self.list.items.insert_many(index, items)
    }

    pub fn remove(&mut self, index: usize) -> Result<Rc<T>, ListBoxError> {
        self.list.items.remove(index)
    }

    pub fn remove_item(&mut self, item: &Rc<T>) -> Option<Rc<T>> {
        self.list.items.remove_item(item)
    }

    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), ListBoxError> {
        self.list.items.move_item(from, to)
    }

    pub fn clear(&mut self) {
        self.list.items.clear();
    }
}

impl<T, R> Extend<T> for ItemsMut<'_, T, R>
where
    T: PartialEq,
    R: ItemRenderer<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.items.extend(iter);
    }
}

impl<T, R> Drop for ItemsMut<'_, T, R>
where
    T: PartialEq,
    R: ItemRenderer<T>,
{
    fn drop(&mut self) {
        self.list.reconcile();
    }
}

impl<T, R> Widget for ListBox<T, R> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(&buf.area());
        let src = Rect::new(0, 0, area.width, area.height);
        buf.copy_from(&self.buffer, src, area.x, area.y);
    }
}
