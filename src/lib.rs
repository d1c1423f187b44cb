//! This crate exposes the lookup and traversal core of a Binary Search Tree (BST)
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will store
//! a key and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//! > The absent child itself is a [`Tree::Leaf`].
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! Trees here can be built by hand with [`Tree::node`], in which case nothing
//! enforces the invariants, or with [`Bst::insert`], which keeps them. No
//! balancing is done, so inserting keys in sorted order gives a tree as tall as
//! it has keys. [`Bst::search_iterative`], [`Tree::events`] and the iterators
//! don't recurse and are safe to use on such trees.
//!
//! Keys only need to be [`PartialOrd`]. A key that can't be ordered against a
//! stored key (like `f64::NAN`) makes the operation fail with
//! [`Error::InvalidArgument`].
//!
//! # Examples
//!
//! ```
//! use bst_core::{Bst, Tree};
//!
//! let bst = Bst::from_root(Tree::node(
//!     5,
//!     Tree::node(3, Tree::singleton(1), Tree::Leaf),
//!     Tree::singleton(8),
//! ));
//!
//! assert!(bst.search(&1).unwrap());
//! assert!(!bst.search(&4).unwrap());
//! assert!(bst.search_iterative(&8).unwrap());
//!
//! // Every node is emitted three times: pre-, in-, and post-order.
//! let mut out = Vec::new();
//! bst.traverse(&mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 12);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod error;
pub mod iter;
pub mod traverse;
pub mod tree;
mod util;

#[cfg(test)]
mod test;

pub use crate::bst::Bst;
pub use crate::error::{Error, Result};
pub use crate::traverse::{Events, Order, Visit};
pub use crate::tree::{Node, Tree};
