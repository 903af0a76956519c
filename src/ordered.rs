//! An ordered, unbalanced BST that owns its nodes through `Box`ed child links. Values are
//! stored once: inserting a value that is already present leaves the tree untouched.
//!
//! Every walk over the tree (insertion, search, traversals, statistics, rendering and even
//! `Drop`) is loop based, so a degenerate tree built from sorted input is as safe to use as a
//! balanced one, just slower.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&"F"));
//! assert_eq!(tree.height(), -1);
//!
//! for letter in ["M", "A", "F", "X", "U", "E", "N"] {
//!     tree.insert(letter);
//! }
//!
//! assert!(tree.search(&"F"));
//! assert_eq!(tree.inorder_traversal(), [&"A", &"E", &"F", &"M", &"N", &"U", &"X"]);
//! assert_eq!(tree.find_min(), Ok(&"A"));
//! assert_eq!(tree.find_max(), Ok(&"X"));
//!
//! // Inserting a value twice doesn't add a second node.
//! assert!(!tree.insert("F"));
//! assert_eq!(tree.count_nodes(), Ok(7));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::error::EmptyTreeError;

/// An owned, possibly missing, child.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding distinct values of `T`.
///
/// Every method that compares values requires `T: Ord`, and that ordering must be a strict total
/// order. A comparison that is inconsistent (e.g. one that says `a < b` and `b < a`) doesn't cause
/// undefined behavior but leaves the tree's contents and shape unspecified.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

/// A single stored value and the subtrees hanging off of it. A `Node` exclusively owns both of
/// its children and has no pointer back to its parent.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // The default drop glue for `Box<Node>` recurses once per level which overflows the stack on
    // long chains. Detaching children before each node is dropped keeps it flat.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Cloning reinserts the values in preorder. Every node arrives after all of its ancestors so it
/// settles into the same position and the copy has exactly the same shape.
impl<T> Clone for Tree<T>
where
    T: Clone + Ord,
{
    fn clone(&self) -> Self {
        self.preorder().cloned().collect()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored in the tree. Unlike [`count_nodes`][Self::count_nodes] this is
    /// tracked on insertion and is `0` for an empty tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` unless an equal value is already stored. Returns whether a new node was
    /// created.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(0));
    /// assert!(!tree.insert(0));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    trace!(depth, "value already present, ignoring insert");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        *link = Some(Node::new_boxed(value));
        self.len += 1;
        trace!(depth, len = self.len, "inserted new node");
        true
    }

    /// Whether a value equal to `value` is stored in the tree. Always `false` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = vec![50, 30, 70].into_iter().collect();
    ///
    /// assert!(tree.search(&30));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// The smallest stored value, found by following left children from the root.
    ///
    /// # Errors
    ///
    /// [`EmptyTreeError`] when nothing has been inserted.
    pub fn find_min(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root_or_err("find_min")?;
        while let Some(left) = node.left() {
            node = left;
        }

        Ok(&node.value)
    }

    /// The largest stored value, found by following right children from the root.
    ///
    /// # Errors
    ///
    /// [`EmptyTreeError`] when nothing has been inserted.
    pub fn find_max(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root_or_err("find_max")?;
        while let Some(right) = node.right() {
            node = right;
        }

        Ok(&node.value)
    }

    /// The number of edges on the longest path from the root to a leaf. A lone root has a height
    /// of `0` and an empty tree has a height of `-1`.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack: Vec<(&Node<T>, isize)> = self.root().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Counts every node reachable from the root by walking the tree.
    ///
    /// # Errors
    ///
    /// [`EmptyTreeError`] when there is no root to start counting from. Use [`len`][Self::len]
    /// for a count that is `0` on an empty tree.
    pub fn count_nodes(&self) -> Result<usize, EmptyTreeError> {
        let root = self.root_or_err("count_nodes")?;
        Ok(Preorder::new(Some(root), self.len).count())
    }

    /// Values in ascending order (left subtree, node, right subtree).
    pub fn inorder_traversal(&self) -> Vec<&T> {
        self.inorder().collect()
    }

    /// Values with every node before its subtrees (node, left subtree, right subtree).
    pub fn preorder_traversal(&self) -> Vec<&T> {
        self.preorder().collect()
    }

    /// Values with every node after its subtrees (left subtree, right subtree, node).
    pub fn postorder_traversal(&self) -> Vec<&T> {
        self.postorder().collect()
    }

    /// Lazily visits the values in ascending order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root(), self.len)
    }

    /// Lazily visits the values in preorder.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root(), self.len)
    }

    /// Lazily visits the values in postorder.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root(), self.len)
    }

    /// Same as [`inorder`][Self::inorder].
    pub fn iter(&self) -> Inorder<'_, T> {
        self.inorder()
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    fn root_or_err(&self, operation: &'static str) -> Result<&Node<T>, EmptyTreeError> {
        self.root().ok_or_else(|| {
            debug!(operation, "query needs a non-empty tree");
            EmptyTreeError
        })
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// Ascending iterator returned by [`Tree::inorder`]. Holds at most one node per level.
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Inorder<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Inorder<'_, T> {}

/// Root-first iterator returned by [`Tree::preorder`].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Preorder<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes first so that left comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Preorder<'_, T> {}

/// Children-first iterator returned by [`Tree::postorder`].
pub struct Postorder<'a, T> {
    /// Each node is paired with whether its children have already been scheduled.
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> Postorder<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                self.remaining -= 1;
                return Some(&node.value);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Postorder<'_, T> {}
