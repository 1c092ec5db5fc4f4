//! Observable backing collection.
//!
//! [`ItemCollection`] is an ordered list of shared items that records every
//! structural mutation as a [`CollectionChange`]. The list box drains those
//! records to keep its containers aligned.

use std::rc::Rc;

use super::error::ListBoxError;

/// How two items are judged to be "the same item".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum CompareMode {
    /// Same allocation (`Rc::ptr_eq`).
    Reference,
    /// Equal values (`PartialEq`).
    #[default]
    Value,
}

impl CompareMode {
    /// Whether `a` and `b` denote the same item under this mode.
    #[inline]
    pub fn matches<T: PartialEq>(self, a: &Rc<T>, b: &Rc<T>) -> bool {
        match self {
            CompareMode::Reference => Rc::ptr_eq(a, b),
            CompareMode::Value => **a == **b,
        }
    }
}

/// One structural mutation of an [`ItemCollection`].
///
/// Indices are relative to the collection as it was right before the change.
#[derive(Debug, Clone)]
pub enum CollectionChange<T> {
    /// `items` were inserted starting at `index`, in order.
    Insert { index: usize, items: Vec<Rc<T>> },
    /// `item` was removed from `index`.
    Remove { index: usize, item: Rc<T> },
    /// The item at `from` now sits at `to`.
    Move { from: usize, to: usize },
    /// Everything was removed.
    Reset,
}

impl<T> CollectionChange<T> {
    /// Short name of the action, for logs.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            CollectionChange::Insert { .. } => "insert",
            CollectionChange::Remove { .. } => "remove",
            CollectionChange::Move { .. } => "move",
            CollectionChange::Reset => "reset",
        }
    }
}

/// Ordered items with a log of pending changes.
#[derive(Debug, Clone)]
pub struct ItemCollection<T> {
    items: Vec<Rc<T>>,
    pending: Vec<CollectionChange<T>>,
}

impl<T> Default for ItemCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pending: Vec::new(),
        }
    }
}

impl<T> ItemCollection<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Rc<T>> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rc<T>> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Rc<T>] {
        &self.items
    }

    fn check(&self, index: usize, len: usize) -> Result<(), ListBoxError> {
        if index < len {
            Ok(())
        } else {
            Err(ListBoxError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Append `item`, returning the shared handle stored in the list.
    pub fn push(&mut self, item: T) -> Rc<T> {
        self.push_shared(Rc::new(item))
    }

    /// Append an already-shared item.
    pub fn push_shared(&mut self, item: Rc<T>) -> Rc<T> {
        let index = self.items.len();
        self.items.push(Rc::clone(&item));
        self.pending.push(CollectionChange::Insert {
            index,
            items: vec![Rc::clone(&item)],
        });
        item
    }

    /// Insert `item` at `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, item: T) -> Result<Rc<T>, ListBoxError> {
        self.insert_shared(index, Rc::new(item))
    }

    pub fn insert_shared(&mut self, index: usize, item: Rc<T>) -> Result<Rc<T>, ListBoxError> {
        self.check(index, self.items.len() + 1)?;
        self.items.insert(index, Rc::clone(&item));
        self.pending.push(CollectionChange::Insert {
            index,
            items: vec![Rc::clone(&item)],
        });
        Ok(item)
    }

    /// Insert a batch at `index`, preserving order, as a single change.
    pub fn insert_many<I>(&mut self, index: usize, items: I) -> Result<(), ListBoxError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check(index, self.items.len() + 1)?;
        let batch: Vec<Rc<T>> = items.into_iter().map(Rc::new).collect();
        if batch.is_empty() {
            return Ok(());
        }
        let tail = self.items.split_off(index);
        self.items.extend(batch.iter().map(Rc::clone));
        self.items.extend(tail);
        self.pending.push(CollectionChange::Insert { index, items: batch });
        Ok(())
    }

    /// Remove and return the item at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Rc<T>, ListBoxError> {
        self.check(index, self.items.len())?;
        let item = self.items.remove(index);
        self.pending.push(CollectionChange::Remove {
            index,
            item: Rc::clone(&item),
        });
        Ok(item)
    }

    /// Remove the first entry that is the very same allocation as `item`.
    pub fn remove_item(&mut self, item: &Rc<T>) -> Option<Rc<T>> {
        let index = self.items.iter().position(|it| Rc::ptr_eq(it, item))?;
        self.remove(index).ok()
    }

    /// Move the item at `from` so that it ends up at `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), ListBoxError> {
        self.check(from, self.items.len())?;
        self.check(to, self.items.len())?;
        if from == to {
            return Ok(());
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.pending.push(CollectionChange::Move { from, to });
        Ok(())
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.pending.push(CollectionChange::Reset);
    }

    /// Linear scan for `item` under `mode`.
    #[must_use]
    pub fn position(&self, item: &Rc<T>, mode: CompareMode) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|it| mode.matches(it, item))
    }

    /// Whether changes are waiting to be reconciled.
    #[must_use]
    pub(crate) fn has_pending_changes(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drain the change log, oldest first.
    pub(crate) fn take_changes(&mut self) -> Vec<CollectionChange<T>> {
        std::mem::take(&mut self.pending)
    }

    /// Replace the contents wholesale without logging; used when building a
    /// list from scratch.
    pub(crate) fn from_items(items: Vec<Rc<T>>) -> Self {
        Self {
            items,
            pending: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ItemCollection<T> {
    type Item = &'a Rc<T>;
    type IntoIter = std::slice::Iter<'a, Rc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Extend<T> for ItemCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let end = self.items.len();
        // Appending at `len` is always in range.
        let _ = self.insert_many(end, iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(values: &[&'static str]) -> ItemCollection<&'static str> {
        let mut c = ItemCollection::new();
        c.extend(values.iter().copied());
        c.take_changes();
        c
    }

    #[test]
    fn compare_modes_differ_on_equal_values() {
        let a = Rc::new(String::from("x"));
        let b = Rc::new(String::from("x"));
        assert!(CompareMode::Value.matches(&a, &b));
        assert!(!CompareMode::Reference.matches(&a, &b));
        assert!(CompareMode::Reference.matches(&a, &Rc::clone(&a)));
    }

    #[test]
    fn push_logs_insert_at_end() {
        let mut c = collection(&["a"]);
        c.push("b");
        let changes = c.take_changes();
        assert!(matches!(
            changes.as_slice(),
            [CollectionChange::Insert { index: 1, items }] if items.len() == 1
        ));
        assert!(!c.has_pending_changes());
    }

    #[test]
    fn insert_many_is_one_change_in_order() {
        let mut c = collection(&["a", "d"]);
        c.insert_many(1, ["b", "c"]).unwrap();
        let values: Vec<_> = c.iter().map(|it| **it).collect();
        assert_eq!(values, ["a", "b", "c", "d"]);
        assert_eq!(c.take_changes().len(), 1);
    }

    #[test]
    fn empty_batch_logs_nothing() {
        let mut c = collection(&["a"]);
        c.insert_many(0, std::iter::empty()).unwrap();
        assert!(!c.has_pending_changes());
    }

    #[test]
    fn out_of_range_is_an_error_not_a_panic() {
        let mut c = collection(&["a"]);
        assert_eq!(
            c.insert(3, "z").unwrap_err(),
            ListBoxError::IndexOutOfRange { index: 3, len: 1 }
        );
        assert!(c.remove(1).is_err());
        assert!(c.move_item(0, 1).is_err());
        assert!(!c.has_pending_changes());
    }

    #[test]
    fn move_to_same_index_is_silent() {
        let mut c = collection(&["a", "b"]);
        c.move_item(1, 1).unwrap();
        assert!(!c.has_pending_changes());
        c.move_item(0, 1).unwrap();
        let values: Vec<_> = c.iter().map(|it| **it).collect();
        assert_eq!(values, ["b", "a"]);
    }

    #[test]
    fn remove_item_matches_by_reference() {
        let mut c = ItemCollection::new();
        let first = c.push(String::from("same"));
        let second = c.push(String::from("same"));
        c.take_changes();

        let removed = c.remove_item(&second).unwrap();
        assert!(Rc::ptr_eq(&removed, &second));
        assert!(Rc::ptr_eq(c.get(0).unwrap(), &first));
        assert!(c.remove_item(&Rc::new(String::from("same"))).is_none());
    }

    #[test]
    fn position_respects_mode() {
        let mut c = ItemCollection::new();
        c.push(1);
        let two = c.push(2);
        let lookalike = Rc::new(2);
        assert_eq!(c.position(&lookalike, CompareMode::Value), Some(1));
        assert_eq!(c.position(&lookalike, CompareMode::Reference), None);
        assert_eq!(c.position(&two, CompareMode::Reference), Some(1));
    }
}
