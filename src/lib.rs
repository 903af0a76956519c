//! This crate exposes an ordered, unbalanced Binary Search Tree (BST)
//! mostly for educational purposes, and as a small ordered container.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value
//! that was inserted and will sometimes have child `Node`s. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! The [`Tree`] here does no rebalancing, so inserting already sorted values
//! degrades it into a chain with a height of `N - 1`. Nothing in it recurses on
//! the tree's height, so such a chain is slow but never overflows the stack.
//!
//! Deleting values is not supported.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod display;
pub mod error;
pub mod ordered;


pub use display::{Layout, Rendered};
pub use error::EmptyTreeError;
pub use ordered::{Inorder, Postorder, Preorder, Tree};
