#[macro_use]
extern crate quickcheck_macros;

mod search;
mod traverse;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Remove the K from the tree
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}

/// Builds a tree holding `xs` whose shape doesn't depend on insertion order: the middle key of
/// each (sorted, deduplicated) slice becomes the root of its subtree.
pub(crate) fn balanced(xs: &[i8]) -> bst_core::Tree<i8> {
    use bst_core::Tree;

    let mut keys = xs.to_vec();
    keys.sort_unstable();
    keys.dedup();

    fn build(keys: &[i8]) -> Tree<i8> {
        if keys.is_empty() {
            return Tree::Leaf;
        }
        let mid = keys.len() / 2;
        Tree::node(keys[mid], build(&keys[..mid]), build(&keys[mid + 1..]))
    }
    build(&keys)
}
