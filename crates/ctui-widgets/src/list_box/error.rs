//! Recoverable list box errors.

/// Errors returned by the list box's public surface.
///
/// Broken internal invariants are not reported here; they panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListBoxError {
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("persisted selected index {index} does not address any of {len} items")]
    SelectedIndexOutOfRange { index: i64, len: usize },

    #[error("item is not present in the list")]
    ItemNotFound,
}
