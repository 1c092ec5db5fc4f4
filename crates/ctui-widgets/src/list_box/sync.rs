//! Container reconciliation and the selection state machine.

use std::rc::Rc;

use super::{CollectionChange, Container, ItemRenderer, ListBox, ListBoxError, ListBoxEvent};

impl<T, R> ListBox<T, R>
where
    T: PartialEq,
    R: ItemRenderer<T>,
{
    /// Apply every pending collection change to the container sequence.
    pub(super) fn reconcile(&mut self) {
        let changes = self.items.take_changes();
        if changes.is_empty() {
            self.check_alignment();
            return;
        }

        for change in changes {
            #[cfg(feature = "tracing")]
            let action = change.action();
            #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
            let (index, count) = match change {
                CollectionChange::Insert { index, items } => {
                    if index > self.containers.len() {
                        self.consistency_fault(format_args!(
                            "insert at {index} past {} containers",
                            self.containers.len()
                        ));
                    }
                    let count = items.len();
                    let fresh: Vec<Container<T>> =
                        items.into_iter().map(|item| self.new_container(item)).collect();
                    let tail = self.containers.split_off(index);
                    self.containers.extend(fresh);
                    self.containers.extend(tail);
                    (index, count)
                }
                CollectionChange::Remove { index, item } => {
                    let at = match self.containers.get(index) {
                        Some(c) if Rc::ptr_eq(c.item(), &item) => index,
                        _ => self
                            .containers
                            .iter()
                            .position(|c| Rc::ptr_eq(c.item(), &item))
                            .unwrap_or_else(|| {
                                self.consistency_fault(format_args!(
                                    "no container bound to the item removed from {index}"
                                ))
                            }),
                    };
                    self.containers.remove(at);
                    (index, 1)
                }
                CollectionChange::Move { from, to } => {
                    let len = self.containers.len();
                    if from >= len || to >= len {
                        self.consistency_fault(format_args!(
                            "move {from} -> {to} outside {len} containers"
                        ));
                    }
                    let container = self.containers.remove(from);
                    self.containers.insert(to, container);
                    self.containers[to].mark_dirty();
                    (to, 1)
                }
                CollectionChange::Reset => {
                    let count = self.containers.len();
                    self.containers.clear();
                    self.scrollbar.set_value(0);
                    (0, count)
                }
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "list_box.reconcile",
                action,
                index,
                count,
                containers = self.containers.len()
            );
        }

        self.check_alignment();
        self.refresh_selection_flags();
        self.show_hide_scrollbar();
        self.dirty = true;
    }

    fn check_alignment(&self) {
        if self.containers.len() != self.items.len() {
            self.consistency_fault(format_args!(
                "{} containers for {} items after reconciling",
                self.containers.len(),
                self.items.len()
            ));
        }
    }

    pub(super) fn new_container(&self, item: Rc<T>) -> Container<T> {
        match self.renderer.own_theme() {
            Some(theme) => Container::with_own_theme(item, theme),
            None => Container::new(item, self.theme().item),
        }
    }

    #[cold]
    fn consistency_fault(&self, detail: std::fmt::Arguments<'_>) -> ! {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            message = "list_box.consistency",
            detail = %detail,
            items = self.items.len(),
            containers = self.containers.len()
        );
        panic!("list box containers out of sync with items: {detail}");
    }

    /// Set the selected flag on exactly the container bound to the current
    /// selection, and clear it everywhere else.
    pub(super) fn refresh_selection_flags(&mut self) {
        let target = self.selected_index();
        let mut changed = false;
        for (i, container) in self.containers.iter_mut().enumerate() {
            changed |= container.set_selected(target == Some(i));
        }
        self.dirty |= changed;
    }

    /// The selected item, which may no longer be in the list.
    #[inline]
    #[must_use]
    pub fn selected_item(&self) -> Option<&Rc<T>> {
        self.selected.as_ref()
    }

    /// Index of the selected item, if it is still in the list.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
            .as_ref()
            .and_then(|item| self.items.position(item, self.config.compare_mode))
    }

    /// The container of the selected item, if it is still in the list.
    #[must_use]
    pub fn selected_container(&self) -> Option<&Container<T>> {
        self.selected_index().and_then(|i| self.containers.get(i))
    }

    /// Assign the selection and raise [`ListBoxEvent::SelectionChanged`].
    ///
    /// The item does not need to be in the list; when it is not, no
    /// container is flagged.
    pub fn set_selection(&mut self, item: Option<Rc<T>>) {
        self.assign_selection(item, "set");
    }

    /// Select the item at `index`.
    pub fn select_index(&mut self, index: usize) -> Result<(), ListBoxError> {
        let item = self
            .items
            .get(index)
            .map(Rc::clone)
            .ok_or(ListBoxError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })?;
        self.set_selection(Some(item));
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.set_selection(None);
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub(super) fn assign_selection(&mut self, item: Option<Rc<T>>, action: &'static str) {
        self.selected = item;
        self.refresh_selection_flags();
        self.dirty = true;
        #[cfg(feature = "tracing")]
        self.log_selection(action);
        self.raise(ListBoxEvent::SelectionChanged(self.selected.clone()));
    }

    /// Raise [`ListBoxEvent::ItemActivated`] for the current selection.
    /// Returns `false` when nothing is selected.
    pub fn activate(&mut self) -> bool {
        let Some(item) = self.selected.clone() else {
            return false;
        };
        #[cfg(feature = "tracing")]
        self.log_selection("activate");
        self.raise(ListBoxEvent::ItemActivated(item));
        true
    }

    #[cfg(feature = "tracing")]
    fn log_selection(&self, action: &str) {
        tracing::debug!(
            message = "list_box.selection",
            action,
            selected = ?self.selected_index(),
            items = self.items.len()
        );
    }

    /// Whether `a` and `b` are the same item under the configured mode.
    pub(super) fn same_item(&self, a: &Rc<T>, b: &Rc<T>) -> bool {
        self.config.compare_mode.matches(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{CompareMode, ListBoxConfig, TextRenderer};
    use super::*;

    type List = ListBox<String, TextRenderer>;

    fn list(values: &[&str]) -> List {
        let mut list = ListBox::new(10, 6);
        list.items_mut()
            .extend(values.iter().map(|v| (*v).to_string()));
        list
    }

    fn bound(list: &List) -> Vec<String> {
        list.containers().iter().map(|c| c.item().to_string()).collect()
    }

    fn assert_aligned(list: &List) {
        assert_eq!(list.containers().len(), list.items().len());
        for (c, item) in list.containers().iter().zip(list.items()) {
            assert!(Rc::ptr_eq(c.item(), item));
        }
    }

    #[test]
    fn batch_insert_lands_in_order() {
        let mut list = list(&["a", "d"]);
        list.items_mut()
            .insert_many(1, ["b".to_string(), "c".to_string()])
            .unwrap();
        assert_eq!(bound(&list), ["a", "b", "c", "d"]);
        assert_aligned(&list);
        assert!(list.containers()[1].is_dirty());
    }

    #[test]
    fn remove_finds_the_exact_instance_among_equal_values() {
        let mut list = list(&["x", "x", "x"]);
        let middle = Rc::clone(list.items().get(1).unwrap());
        let removed = list.items_mut().remove_item(&middle);
        assert!(removed.is_some());
        assert_aligned(&list);
        assert!(list.containers().iter().all(|c| !Rc::ptr_eq(c.item(), &middle)));
    }

    #[test]
    fn move_keeps_container_and_marks_it_dirty() {
        let mut list = list(&["a", "b", "c"]);
        list.compose();
        let moved = list.containers()[0].item().clone();
        list.items_mut().move_item(0, 2).unwrap();
        assert_eq!(bound(&list), ["b", "c", "a"]);
        assert!(Rc::ptr_eq(list.containers()[2].item(), &moved));
        assert!(list.containers()[2].is_dirty());
        assert!(list.is_dirty());
    }

    #[test]
    fn reset_clears_containers_and_scroll() {
        let mut list = list(&["a", "b", "c", "d", "e", "f", "g"]);
        list.set_scroll_offset(2);
        list.items_mut().clear();
        assert!(list.containers().is_empty());
        assert_eq!(list.scroll_offset(), 0);
        assert!(!list.is_scrollbar_visible());
    }

    #[test]
    fn clear_then_refill_in_one_guard() {
        let mut list = list(&["a", "b"]);
        {
            let mut items = list.items_mut();
            items.clear();
            items.push("z".into());
        }
        assert_eq!(bound(&list), ["z"]);
    }

    #[test]
    fn selection_follows_item_across_index_shifts() {
        let mut list = list(&["a", "b", "c"]);
        list.select_index(1).unwrap();
        list.items_mut().insert(0, "new".into()).unwrap();
        assert_eq!(list.selected_index(), Some(2));
        let flagged: Vec<bool> = list.containers().iter().map(|c| c.is_selected()).collect();
        assert_eq!(flagged, [false, false, true, false]);
    }

    #[test]
    fn removing_selected_item_leaves_selection_unresolved() {
        let mut list = list(&["a", "b"]);
        list.select_index(0).unwrap();
        list.items_mut().remove(0).unwrap();
        assert!(list.selected_item().is_some());
        assert_eq!(list.selected_index(), None);
        assert!(list.selected_container().is_none());
        assert!(list.containers().iter().all(|c| !c.is_selected()));
    }

    #[test]
    fn reselecting_raises_again() {
        let mut list = list(&["a"]);
        list.select_index(0).unwrap();
        list.select_index(0).unwrap();
        let events = list.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], ListBoxEvent::SelectionChanged(Some(_))));
    }

    #[test]
    fn selecting_a_missing_item_flags_nothing() {
        let mut list = list(&["a"]);
        list.set_selection(Some(Rc::new("ghost".into())));
        assert!(list.containers().iter().all(|c| !c.is_selected()));
        assert_eq!(list.take_events().len(), 1);
    }

    #[test]
    fn value_mode_matches_equal_copies() {
        let mut list = list(&["a", "b"]);
        list.set_selection(Some(Rc::new("b".into())));
        assert_eq!(list.selected_index(), Some(1));
        assert!(list.containers()[1].is_selected());
    }

    #[test]
    fn reference_mode_ignores_equal_copies() {
        let mut list = list(&["a", "b"]).with_config(
            ListBoxConfig::default().compare_mode(CompareMode::Reference),
        );
        assert_eq!(list.config().compare_mode, CompareMode::Reference);
        list.set_selection(Some(Rc::new("b".into())));
        assert_eq!(list.selected_index(), None);
        let b = Rc::clone(list.items().get(1).unwrap());
        list.set_selection(Some(b));
        assert_eq!(list.selected_index(), Some(1));
    }

    #[test]
    fn select_index_out_of_range_is_an_error() {
        let mut list = list(&["a"]);
        assert_eq!(
            list.select_index(3),
            Err(ListBoxError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert!(list.take_events().is_empty());
    }

    #[test]
    fn activate_requires_selection() {
        let mut list = list(&["a"]);
        assert!(!list.activate());
        list.select_index(0).unwrap();
        list.take_events();
        assert!(list.activate());
        assert!(matches!(
            list.take_events().as_slice(),
            [ListBoxEvent::ItemActivated(item)] if item.as_str() == "a"
        ));
    }

    #[test]
    #[should_panic(expected = "out of sync")]
    fn missing_container_on_remove_panics() {
        let mut list = list(&["a", "b"]);
        list.containers.pop();
        let _ = list.items_mut().remove(1);
    }

    #[test]
    #[should_panic(expected = "out of sync")]
    fn unlogged_change_is_caught_on_reconcile() {
        let mut list = list(&["a", "b", "c"]);
        list.items.push("d".into());
        let _ = list.items.take_changes();
        list.reconcile();
    }

    #[test]
    fn renderer_own_theme_is_kept() {
        use ctui_core::geometry::Rect;
        use ctui_render::buffer::Buffer;
        use ctui_style::{ItemTheme, ListBoxTheme, PackedRgba, Style};

        struct Branded;
        impl ItemRenderer<u8> for Branded {
            fn draw(&self, _row: &Container<u8>, _buf: &mut Buffer, _area: Rect) {}
            fn own_theme(&self) -> Option<ItemTheme> {
                Some(ItemTheme::new(Style::new().fg(PackedRgba::GREEN)))
            }
        }

        let mut list = ListBox::with_renderer(Branded, 10, 5);
        list.items_mut().push(1);
        assert!(list.containers()[0].keeps_own_theme());
        list.set_theme(Some(ListBoxTheme::contrast()));
        assert_eq!(list.containers()[0].appearance().fg, Some(PackedRgba::GREEN));
    }
}
