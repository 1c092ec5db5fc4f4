//! Save and restore.
//!
//! A [`ListBoxSnapshot`] is a plain value: taking one never touches the live
//! list, and [`ListBox::restore`] builds a fresh list from one without any
//! lifecycle hooks.

use std::rc::Rc;

use ctui_core::geometry::Point;
use ctui_style::ListBoxTheme;

use super::{ItemCollection, ItemRenderer, ListBox, ListBoxConfig, ListBoxError};

/// Persistable state of a [`ListBox`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ListBoxSnapshot<T> {
    pub items: Vec<T>,
    /// Index of the selected item, or `-1` when nothing resolvable is
    /// selected.
    pub selected_index: i64,
    pub config: ListBoxConfig,
    /// Explicit theme; `None` means the default theme.
    pub theme: Option<ListBoxTheme>,
    pub width: u16,
    pub height: u16,
    pub position: Point,
}

impl<T, R> ListBox<T, R>
where
    T: PartialEq,
    R: ItemRenderer<T>,
{
    /// Capture the persistable state.
    #[must_use]
    pub fn snapshot(&self) -> ListBoxSnapshot<T>
    where
        T: Clone,
    {
        ListBoxSnapshot {
            items: self.items.iter().map(|item| T::clone(item)).collect(),
            selected_index: self.selected_index().map_or(-1, |i| i as i64),
            config: self.config,
            theme: self.theme,
            width: self.width,
            height: self.height,
            position: self.position,
        }
    }

    /// Build a list from `snapshot`, drawing rows with `renderer`.
    ///
    /// Containers are created from scratch and the selection is resolved by
    /// index. The returned list is already composed and has no pending
    /// events.
    pub fn restore(snapshot: ListBoxSnapshot<T>, renderer: R) -> Result<Self, ListBoxError> {
        let ListBoxSnapshot {
            items,
            selected_index,
            config,
            theme,
            width,
            height,
            position,
        } = snapshot;

        let len = items.len();
        let selected = match selected_index {
            -1 => None,
            index => match usize::try_from(index) {
                Ok(i) if i < len => Some(i),
                _ => return Err(ListBoxError::SelectedIndexOutOfRange { index, len }),
            },
        };

        let mut list = Self::with_renderer(renderer, width, height);
        list.config = config;
        list.theme = theme;
        list.position = position;
        list.scrollbar.set_theme(list.theme().scrollbar);

        list.items = ItemCollection::from_items(items.into_iter().map(Rc::new).collect());
        list.containers = list
            .items
            .iter()
            .map(|item| list.new_container(Rc::clone(item)))
            .collect();
        list.selected = selected.and_then(|i| list.items.get(i).map(Rc::clone));

        list.refresh_selection_flags();
        list.layout_scrollbar();
        list.events.clear();
        list.compose_forced();
        Ok(list)
    }
}
