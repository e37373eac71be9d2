//! Errors raised when reading or writing through a cursor that has nowhere to point.

use thiserror::Error;

/// Failures of the value accessors on [`Cursor`][crate::Cursor] and
/// [`CursorMut`][crate::CursorMut]. Navigation never fails with an error, it
/// reports `false` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The tree has no nodes, so the cursor is unset.
    #[error("the tree is empty, so the cursor does not point at a node")]
    EmptyTree,
}

/// Shorthand for results carrying a [`TreeError`].
pub type TreeResult<T> = Result<T, TreeError>;
