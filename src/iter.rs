//! In-order iterators. Both keep an explicit stack holding the left spine of the subtree that
//! is still to be visited, so iterating never recurses.

use crate::tree::{Node, Tree};
use crate::util::dismantle;

impl<T> Tree<T> {
    /// Iterates over the keys in order (left subtree, node, right subtree). For a tree with the
    /// BST ordering this yields the keys sorted ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_core::Tree;
    ///
    /// let tree = Tree::node(2, Tree::singleton(1), Tree::singleton(3));
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self);
        iter
    }
}

/// Borrowing iterator returned by [`Tree::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.data())
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over the keys of a tree, in order.
pub struct IntoIter<T> {
    /// Keys whose left subtree has been fully yielded, paired with their right subtree.
    stack: Vec<(T, Tree<T>)>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(tree: Tree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: Tree<T>) {
        while let Tree::Node(n) = tree {
            let (data, left, right) = n.into_parts();
            self.stack.push((data, right));
            tree = left;
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // The pending right subtrees can be as tall as the tree they came from.
        dismantle(self.stack.drain(..).map(|(_, right)| right).collect());
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (data, right) = self.stack.pop()?;
        self.push_left_spine(right);
        Some(data)
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
