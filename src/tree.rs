//! The node hierarchy. A [`Tree`] is either absent ([`Tree::Leaf`]) or a [`Node`] that owns its
//! two children, so every subtree has exactly one owner and dropping a parent drops its
//! children.
//!
//! Trees can be built by hand, in which case nothing checks the BST ordering. Searching such a
//! tree follows the comparison path and may miss keys that are present off that path.
//!
//! # Examples
//!
//! ```
//! use bst_core::Tree;
//!
//! //       5
//! //      / \
//! //     3   8
//! //    /
//! //   1
//! let tree = Tree::node(
//!     5,
//!     Tree::node(3, Tree::singleton(1), Tree::Leaf),
//!     Tree::singleton(8),
//! );
//!
//! assert!(tree.is_search_tree().unwrap());
//! assert!(tree.search(&1).unwrap());
//! assert!(!tree.search(&4).unwrap());
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::error::Result;
use crate::util::compare;

/// A binary (search) tree rooted at an optional node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree<T> {
    /// The absent node. An empty tree, or the missing child of a [`Node`].
    Leaf,
    /// A present node. This enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::Leaf
    }
}

/// A `Node` has a key that is used for searching/sorting. It always has two children although
/// those children may be [`Leaf`][Tree::Leaf]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    data: T,
    left: Box<Tree<T>>,
    right: Box<Tree<T>>,
}

impl<T> Node<T> {
    /// The key stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The left subtree. Every key in it should be less than [`Node::data`].
    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    /// The right subtree. Every key in it should be greater than [`Node::data`].
    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    /// Whether this node has no children.
    pub fn is_leaf_node(&self) -> bool {
        self.left.is_leaf() && self.right.is_leaf()
    }

    pub(crate) fn into_parts(self) -> (T, Tree<T>, Tree<T>) {
        (self.data, *self.left, *self.right)
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// A tree of one node with no children.
    pub fn singleton(data: T) -> Self {
        Self::node(data, Self::Leaf, Self::Leaf)
    }

    /// A tree whose root holds `data` and owns the given subtrees. The ordering of the result is
    /// not checked, see [`Tree::is_search_tree`].
    pub fn node(data: T, left: Tree<T>, right: Tree<T>) -> Self {
        Self::Node(Node {
            data,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Whether this is the absent node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// The root node, if present.
    pub fn as_node(&self) -> Option<&Node<T>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n),
        }
    }

    /// The number of present nodes.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The smallest key, i.e. the leftmost node.
    pub fn min(&self) -> Option<&T> {
        let mut current = self.as_node()?;
        while let Self::Node(left) = current.left() {
            current = left;
        }
        Some(&current.data)
    }

    /// The largest key, i.e. the rightmost node.
    pub fn max(&self) -> Option<&T> {
        let mut current = self.as_node()?;
        while let Self::Node(right) = current.right() {
            current = right;
        }
        Some(&current.data)
    }

    /// Recursively searches this subtree for `target`. An absent subtree contains nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_core::{Error, Tree};
    ///
    /// let tree = Tree::node(2.0, Tree::singleton(1.0), Tree::singleton(3.0));
    ///
    /// assert!(tree.search(&3.0).unwrap());
    /// assert!(!tree.search(&4.0).unwrap());
    /// assert!(!Tree::Leaf.search(&4.0).unwrap());
    ///
    /// // `NaN` can't be ordered against the stored keys.
    /// assert!(matches!(tree.search(&f64::NAN), Err(Error::InvalidArgument)));
    /// ```
    pub fn search(&self, target: &T) -> Result<bool>
    where
        T: PartialOrd,
    {
        match self {
            Self::Leaf => Ok(false),
            Self::Node(n) => {
                let ordering = compare(target, &n.data)?;
                log::trace!("search step: target is {:?} the node", ordering);
                match ordering {
                    Ordering::Less => n.left.search(target),
                    Ordering::Equal => Ok(true),
                    Ordering::Greater => n.right.search(target),
                }
            }
        }
    }

    /// Inserts `data` at the position a search for it ends. Returns `false`, leaving the tree
    /// untouched, when an equal key is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_core::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(2).unwrap());
    /// assert!(tree.insert(1).unwrap());
    /// assert!(!tree.insert(2).unwrap());
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, data: T) -> Result<bool>
    where
        T: PartialOrd,
    {
        match self {
            Self::Leaf => {
                *self = Self::singleton(data);
                Ok(true)
            }
            Self::Node(n) => match compare(&data, &n.data)? {
                Ordering::Less => n.left.insert(data),
                Ordering::Equal => Ok(false),
                Ordering::Greater => n.right.insert(data),
            },
        }
    }

    /// Removes the node holding a key equal to `target` and returns that key. A node with two
    /// children is replaced by its predecessor, the largest key of its left subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_core::Tree;
    ///
    /// let mut tree = Tree::node(2, Tree::singleton(1), Tree::singleton(3));
    ///
    /// assert_eq!(tree.remove(&2).unwrap(), Some(2));
    /// assert_eq!(tree.remove(&2).unwrap(), None);
    /// assert_eq!(tree.as_node().map(|n| *n.data()), Some(1));
    /// ```
    pub fn remove(&mut self, target: &T) -> Result<Option<T>>
    where
        T: PartialOrd,
    {
        let Self::Node(n) = self else {
            return Ok(None);
        };
        match compare(target, &n.data)? {
            Ordering::Less => n.left.remove(target),
            Ordering::Equal => Ok(Some(self.unlink())),
            Ordering::Greater => n.right.remove(target),
        }
    }

    /// Greatest key less than or equal to `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_core::Tree;
    ///
    /// let tree = Tree::node(20, Tree::singleton(10), Tree::singleton(30));
    ///
    /// assert_eq!(tree.floor(&25).unwrap(), Some(&20));
    /// assert_eq!(tree.floor(&30).unwrap(), Some(&30));
    /// assert_eq!(tree.floor(&5).unwrap(), None);
    /// ```
    pub fn floor(&self, target: &T) -> Result<Option<&T>>
    where
        T: PartialOrd,
    {
        let mut best = None;
        let mut current = self;
        while let Self::Node(n) = current {
            current = match compare(target, &n.data)? {
                Ordering::Less => n.left(),
                Ordering::Equal => return Ok(Some(&n.data)),
                Ordering::Greater => {
                    best = Some(&n.data);
                    n.right()
                }
            };
        }
        Ok(best)
    }

    /// Least key greater than or equal to `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_core::Tree;
    ///
    /// let tree = Tree::node(20, Tree::singleton(10), Tree::singleton(30));
    ///
    /// assert_eq!(tree.ceiling(&15).unwrap(), Some(&20));
    /// assert_eq!(tree.ceiling(&10).unwrap(), Some(&10));
    /// assert_eq!(tree.ceiling(&35).unwrap(), None);
    /// ```
    pub fn ceiling(&self, target: &T) -> Result<Option<&T>>
    where
        T: PartialOrd,
    {
        let mut best = None;
        let mut current = self;
        while let Self::Node(n) = current {
            current = match compare(target, &n.data)? {
                Ordering::Less => {
                    best = Some(&n.data);
                    n.left()
                }
                Ordering::Equal => return Ok(Some(&n.data)),
                Ordering::Greater => n.right(),
            };
        }
        Ok(best)
    }

    /// Checks the BST ordering over the whole tree: every key is strictly greater than all keys
    /// in its left subtree and strictly less than all keys in its right subtree.
    pub fn is_search_tree(&self) -> Result<bool>
    where
        T: PartialOrd,
    {
        self.is_within(None, None)
    }

    fn is_within(&self, lower: Option<&T>, upper: Option<&T>) -> Result<bool>
    where
        T: PartialOrd,
    {
        let Self::Node(n) = self else {
            return Ok(true);
        };
        if let Some(lower) = lower {
            if compare(&n.data, lower)? != Ordering::Greater {
                return Ok(false);
            }
        }
        if let Some(upper) = upper {
            if compare(&n.data, upper)? != Ordering::Less {
                return Ok(false);
            }
        }
        Ok(n.left.is_within(lower, Some(&n.data))? && n.right.is_within(Some(&n.data), upper)?)
    }

    /// Replaces this node with its successor subtree and returns its key.
    ///
    /// ## Panics
    ///
    /// When called on a [`Tree::Leaf`].
    fn unlink(&mut self) -> T {
        let Self::Node(node) = mem::take(self) else {
            unreachable!("`remove` only unlinks present nodes");
        };
        let (data, left, right) = node.into_parts();

        *self = match (left, right) {
            (Self::Leaf, right) => right,
            (left, Self::Leaf) => left,
            // With two children we promote this node's predecessor. That is, the largest node
            // in this node's left subtree.
            (mut left, right) => match left.take_largest() {
                Some(predecessor) => Self::node(predecessor, left, right),
                None => unreachable!("a present left subtree has a largest key"),
            },
        };
        data
    }

    /// Removes the rightmost node of this subtree and returns its key.
    fn take_largest(&mut self) -> Option<T> {
        let Self::Node(n) = self else {
            return None;
        };
        if !n.right.is_leaf() {
            return n.right.take_largest();
        }

        let Self::Node(node) = mem::take(self) else {
            unreachable!("checked above");
        };
        let (data, left, _) = node.into_parts();
        *self = left;
        Some(data)
    }
}
