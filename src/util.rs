use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::tree::Tree;

/// Orders `target` against a stored `key`. Keys without an ordering (like `NaN`) are rejected
/// rather than silently steering the search down one side.
pub(crate) fn compare<T: PartialOrd>(target: &T, key: &T) -> Result<Ordering> {
    target.partial_cmp(key).ok_or(Error::InvalidArgument)
}

/// Drops `trees` one node at a time. Each node's children are unlinked before the node itself is
/// dropped, so the recursive drop of `Box<Tree>` never goes deeper than one level.
pub(crate) fn dismantle<T>(mut trees: Vec<Tree<T>>) {
    while let Some(tree) = trees.pop() {
        if let Tree::Node(n) = tree {
            let (_, left, right) = n.into_parts();
            trees.push(left);
            trees.push(right);
        }
    }
}
