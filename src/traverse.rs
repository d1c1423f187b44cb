//! The combined traversal. Every present node is emitted three times: once before its left
//! subtree (pre-order), once between its subtrees (in-order), and once after its right subtree
//! (post-order). Filtering the emissions by [`Order`] gives each of the three classic
//! traversals.
//!
//! [`Tree::walk`] and [`Tree::traverse`] recurse, so their stack usage grows with the height of
//! the tree. [`Tree::events`] yields the same emissions from an explicit stack instead.
//!
//! # Examples
//!
//! ```
//! use bst_core::{Order, Tree};
//!
//! let tree = Tree::node(2, Tree::singleton(1), Tree::singleton(3));
//!
//! let pre_order: Vec<_> = tree
//!     .events()
//!     .filter(|visit| visit.order == Order::Pre)
//!     .map(|visit| *visit.data)
//!     .collect();
//! assert_eq!(pre_order, vec![2, 1, 3]);
//!
//! let mut out = Vec::new();
//! tree.traverse(&mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "2\n1\n1\n1\n2\n3\n3\n3\n2\n");
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::tree::{Node, Tree};

/// Which phase of a node's visit an emission belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Order {
    /// Before the left subtree.
    Pre,
    /// Between the left and right subtrees.
    In,
    /// After the right subtree.
    Post,
}

/// A single emission of the combined traversal.
#[derive(Debug, PartialEq, Eq)]
pub struct Visit<'a, T> {
    /// The phase this emission belongs to.
    pub order: Order,
    /// The key of the visited node.
    pub data: &'a T,
}

impl<T> Clone for Visit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Visit<'_, T> {}

impl<'a, T> Visit<'a, T> {
    fn new(order: Order, data: &'a T) -> Self {
        Self { order, data }
    }
}

impl<T> Tree<T> {
    /// Recursively walks this subtree, handing every emission to `f` in pre/in/post order. The
    /// first error returned by `f` stops the walk and is returned. An absent subtree emits
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_core::{Order, Tree};
    ///
    /// let tree = Tree::node(2, Tree::singleton(1), Tree::Leaf);
    ///
    /// let mut visits = Vec::new();
    /// tree.walk(&mut |visit| {
    ///     visits.push((visit.order, *visit.data));
    ///     Ok::<_, ()>(())
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(
    ///     visits,
    ///     vec![
    ///         (Order::Pre, 2),
    ///         (Order::Pre, 1),
    ///         (Order::In, 1),
    ///         (Order::Post, 1),
    ///         (Order::In, 2),
    ///         (Order::Post, 2),
    ///     ]
    /// );
    /// ```
    pub fn walk<'a, E, F>(&'a self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(Visit<'a, T>) -> Result<(), E>,
    {
        let Self::Node(n) = self else {
            return Ok(());
        };
        f(Visit::new(Order::Pre, n.data()))?;
        n.left().walk(f)?;
        f(Visit::new(Order::In, n.data()))?;
        n.right().walk(f)?;
        f(Visit::new(Order::Post, n.data()))
    }

    /// Writes every emission of the combined traversal to `out`, one line per emission holding
    /// the node's `Display` form.
    pub fn traverse<W>(&self, mut out: W) -> Result<()>
    where
        T: fmt::Display,
        W: io::Write,
    {
        self.walk(&mut |visit| {
            log::trace!("{:?}-order visit of {}", visit.order, visit.data);
            writeln!(out, "{}", visit.data).map_err(Error::from)
        })
    }

    /// An iterator over the emissions of the combined traversal. It yields exactly what
    /// [`Tree::walk`] hands to its callback, in the same order, without recursing.
    pub fn events(&self) -> Events<'_, T> {
        Events::new(self)
    }
}

/// Iterator returned by [`Tree::events`].
pub struct Events<'a, T> {
    /// Nodes whose visit isn't finished, paired with the phase they emit next. The top of the
    /// stack is the next emission.
    stack: Vec<(&'a Node<T>, Order)>,
}

impl<T> Clone for Events<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Events<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.stack.iter().map(|(n, order)| (order, n.data())))
            .finish()
    }
}

impl<'a, T> Events<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        Self {
            stack: tree.as_node().map(|n| (n, Order::Pre)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Events<'a, T> {
    type Item = Visit<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, order) = self.stack.pop()?;
        match order {
            // The in-order emission has to wait for the whole left subtree, so it goes under it.
            Order::Pre => {
                self.stack.push((node, Order::In));
                if let Some(left) = node.left().as_node() {
                    self.stack.push((left, Order::Pre));
                }
            }
            Order::In => {
                self.stack.push((node, Order::Post));
                if let Some(right) = node.right().as_node() {
                    self.stack.push((right, Order::Pre));
                }
            }
            Order::Post => {}
        }
        Some(Visit::new(order, node.data()))
    }
}
