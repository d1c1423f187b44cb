//! A binary search tree that owns its root. This is where the searches over the whole tree
//! live, including the iterative one that needs no call stack.
//!
//! # Examples
//!
//! ```
//! use bst_core::{Bst, Tree};
//!
//! let mut bst = Bst::new();
//!
//! // Nothing in here yet.
//! assert!(!bst.search(&1).unwrap());
//!
//! bst.insert(5).unwrap();
//! bst.insert(3).unwrap();
//! bst.insert(8).unwrap();
//!
//! // Both searches agree.
//! assert!(bst.search(&3).unwrap());
//! assert!(bst.search_iterative(&3).unwrap());
//! assert!(!bst.search_iterative(&4).unwrap());
//!
//! // Trees can also be built by hand.
//! let bst = Bst::from_root(Tree::node(2, Tree::singleton(1), Tree::Leaf));
//! assert_eq!(bst.sorted_list(), vec![&1, &2]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::mem;

use crate::error::Result;
use crate::iter::{IntoIter, Iter};
use crate::traverse::Events;
use crate::tree::Tree;
use crate::util::{compare, dismantle};

/// A Binary Search Tree owning a single root, which starts out absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bst<T> {
    root: Tree<T>,
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Bst<T> {
    fn drop(&mut self) {
        dismantle(vec![mem::take(&mut self.root)]);
    }
}

impl<T> Bst<T> {
    /// Generates a new, empty `Bst`.
    pub fn new() -> Self {
        Self { root: Tree::Leaf }
    }

    /// Adopts an existing node hierarchy. The ordering is not checked, see
    /// [`Tree::is_search_tree`].
    pub fn from_root(root: Tree<T>) -> Self {
        Self { root }
    }

    /// Builds a tree by inserting `keys` one after another. Duplicates are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_core::Bst;
    ///
    /// let bst = Bst::try_from_keys([2, 1, 3, 1]).unwrap();
    ///
    /// assert_eq!(bst.sorted_list(), vec![&1, &2, &3]);
    /// ```
    pub fn try_from_keys<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: PartialOrd,
    {
        let mut bst = Self::new();
        for key in keys {
            bst.insert(key)?;
        }
        Ok(bst)
    }

    /// The root of the tree.
    pub fn root(&self) -> &Tree<T> {
        &self.root
    }

    /// Gives up ownership of the root.
    pub fn into_root(mut self) -> Tree<T> {
        mem::take(&mut self.root)
    }

    /// Whether the root is absent.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Recursively searches the whole tree for `target`, see [`Tree::search`].
    pub fn search(&self, target: &T) -> Result<bool>
    where
        T: PartialOrd,
    {
        self.root.search(target)
    }

    /// Searches the whole tree for `target` by walking down from the root in a loop. Gives the
    /// same answer as [`Bst::search`] for every input, errors included.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_core::{Bst, Tree};
    ///
    /// let bst = Bst::from_root(Tree::node(
    ///     5,
    ///     Tree::node(3, Tree::singleton(1), Tree::Leaf),
    ///     Tree::singleton(8),
    /// ));
    ///
    /// assert!(bst.search_iterative(&8).unwrap());
    /// assert!(!bst.search_iterative(&4).unwrap());
    /// ```
    pub fn search_iterative(&self, target: &T) -> Result<bool>
    where
        T: PartialOrd,
    {
        let mut current = &self.root;
        while let Tree::Node(n) = current {
            let ordering = compare(target, n.data())?;
            log::trace!("iterative search step: target is {:?} the node", ordering);
            current = match ordering {
                Ordering::Less => n.left(),
                Ordering::Equal => return Ok(true),
                Ordering::Greater => n.right(),
            };
        }
        Ok(false)
    }

    /// Writes the combined pre/in/post-order traversal of the whole tree to `out`, see
    /// [`Tree::traverse`].
    pub fn traverse<W>(&self, out: W) -> Result<()>
    where
        T: fmt::Display,
        W: io::Write,
    {
        self.root.traverse(out)
    }

    /// The combined traversal of the whole tree as an iterator, see [`Tree::events`].
    pub fn events(&self) -> Events<'_, T> {
        self.root.events()
    }

    /// Inserts `key`, returning `false` if an equal key was already present.
    pub fn insert(&mut self, key: T) -> Result<bool>
    where
        T: PartialOrd,
    {
        let inserted = self.root.insert(key)?;
        log::debug!("insert: {}", if inserted { "added" } else { "already present" });
        Ok(inserted)
    }

    /// Removes the key equal to `target`, returning it if it was present.
    pub fn remove(&mut self, target: &T) -> Result<Option<T>>
    where
        T: PartialOrd,
    {
        let removed = self.root.remove(target)?;
        log::debug!("remove: {}", if removed.is_some() { "removed" } else { "not found" });
        Ok(removed)
    }

    /// The smallest key.
    pub fn min(&self) -> Option<&T> {
        self.root.min()
    }

    /// The largest key.
    pub fn max(&self) -> Option<&T> {
        self.root.max()
    }

    /// Greatest key less than or equal to `target`.
    pub fn floor(&self, target: &T) -> Result<Option<&T>>
    where
        T: PartialOrd,
    {
        self.root.floor(target)
    }

    /// Least key greater than or equal to `target`.
    pub fn ceiling(&self, target: &T) -> Result<Option<&T>>
    where
        T: PartialOrd,
    {
        self.root.ceiling(target)
    }

    /// All keys collected in order.
    pub fn sorted_list(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Iterates over the keys in order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.root.iter()
    }
}

impl<'a, T> IntoIterator for &'a Bst<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Bst<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into_root())
    }
}
