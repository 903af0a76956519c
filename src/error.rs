//! Errors surfaced by [`Tree`][crate::Tree] queries.

use thiserror::Error;

/// Returned by queries that need at least one node to produce an answer, such as
/// [`find_min`][crate::Tree::find_min] on a tree nothing has been inserted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation requires a non-empty tree")]
pub struct EmptyTreeError;
