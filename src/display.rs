//! Indented, human readable rendering of a [`Tree`]. Each node sits on its own line, indented by
//! its depth and prefixed by which side of its parent it hangs from. A node with only one child
//! gets a placeholder line for the missing one so the shape of the tree stays visible:
//!
//! ```text
//! Root: M
//!     L--- A
//!         L--- None
//!         R--- F
//! ```
//!
//! This is meant for people, not for parsing back into a tree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Layout, Tree};
//!
//! let tree: Tree<_> = vec![2, 1].into_iter().collect();
//!
//! assert_eq!(tree.render(), "Root: 2\n    L--- 1\n    R--- None\n");
//! assert_eq!(
//!     tree.render_with(&Layout::default().indent(1).absent("-")),
//!     "Root: 2\n L--- 1\n R--- -\n"
//! );
//! ```

use std::borrow::Cow;
use std::fmt;
use std::io;

use crate::ordered::{Node, Tree};

/// How [`Tree::render_with`] lays out its lines. The default matches [`Tree::render`]: four spaces
/// per level with `Root: `, `L--- ` and `R--- ` prefixes and `None` for a missing child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    indent: usize,
    root_prefix: Cow<'static, str>,
    left_prefix: Cow<'static, str>,
    right_prefix: Cow<'static, str>,
    absent: Cow<'static, str>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            indent: 4,
            root_prefix: Cow::Borrowed("Root: "),
            left_prefix: Cow::Borrowed("L--- "),
            right_prefix: Cow::Borrowed("R--- "),
            absent: Cow::Borrowed("None"),
        }
    }
}

impl Layout {
    /// Number of spaces added per level of depth.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Prefixes for the root line and for left and right children.
    pub fn prefixes(
        mut self,
        root: impl Into<Cow<'static, str>>,
        left: impl Into<Cow<'static, str>>,
        right: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.root_prefix = root.into();
        self.left_prefix = left.into();
        self.right_prefix = right.into();
        self
    }

    /// Text printed in place of a missing child (or of the root of an empty tree).
    pub fn absent(mut self, absent: impl Into<Cow<'static, str>>) -> Self {
        self.absent = absent.into();
        self
    }
}

/// A [`Tree`] paired with a [`Layout`], formatted through [`fmt::Display`].
pub struct Rendered<'a, T> {
    tree: &'a Tree<T>,
    layout: &'a Layout,
}

impl<T> fmt::Display for Rendered<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lines(self.tree.root(), self.layout, f)
    }
}

/// Renders with the default [`Layout`].
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lines(self.root(), &Layout::default(), f)
    }
}

impl<T> Tree<T>
where
    T: fmt::Display,
{
    /// The tree drawn with the default [`Layout`], one `\n` terminated line per entry. An empty
    /// tree is drawn as a single `Root: None` line.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The tree drawn with the given [`Layout`].
    pub fn render_with(&self, layout: &Layout) -> String {
        self.rendered(layout).to_string()
    }

    /// Lazily formats the tree with the given [`Layout`].
    pub fn rendered<'a>(&'a self, layout: &'a Layout) -> Rendered<'a, T> {
        Rendered { tree: self, layout }
    }

    /// Writes [`render`][Self::render]'s output to `out`.
    pub fn display_tree<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Writes [`render_with`][Self::render_with]'s output to `out`.
    pub fn display_tree_with<W: io::Write>(&self, layout: &Layout, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.rendered(layout))
    }
}

/// One line still to be printed: a node, or a placeholder for a missing child.
struct Entry<'a, T> {
    level: usize,
    prefix: &'a str,
    node: Option<&'a Node<T>>,
}

fn write_lines<T, W>(root: Option<&Node<T>>, layout: &Layout, out: &mut W) -> fmt::Result
where
    T: fmt::Display,
    W: fmt::Write,
{
    let mut stack = vec![Entry {
        level: 0,
        prefix: &layout.root_prefix,
        node: root,
    }];

    while let Some(Entry {
        level,
        prefix,
        node,
    }) = stack.pop()
    {
        let pad = level * layout.indent;
        let Some(node) = node else {
            writeln!(out, "{:pad$}{}{}", "", prefix, layout.absent, pad = pad)?;
            continue;
        };
        writeln!(out, "{:pad$}{}{}", "", prefix, node.value, pad = pad)?;

        // Leaves don't get placeholder lines.
        if node.is_leaf() {
            continue;
        }
        stack.push(Entry {
            level: level + 1,
            prefix: &layout.right_prefix,
            node: node.right(),
        });
        stack.push(Entry {
            level: level + 1,
            prefix: &layout.left_prefix,
            node: node.left(),
        });
    }

    Ok(())
}
