//! Traversal orders and value iteration for [`AvlTree`](crate::AvlTree).

use crate::node::Node;

/// The three classical orders in which [`AvlTree::traverse`] visits nodes.
///
/// [`AvlTree::traverse`]: crate::AvlTree::traverse
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree. Yields values in ascending
    /// order, and is the default.
    #[default]
    InOrder,
    /// Node first, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, right subtree, then the node itself.
    PostOrder,
}

/// In-order iterator over the values of an [`AvlTree`](crate::AvlTree),
/// ascending.
///
/// Keeps the chain of not-yet-visited ancestors on an explicit stack, so a
/// full pass is O(n) with O(height) transient space and no recursion.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // The top of the stack is the smallest unvisited node. After
        // yielding it, its right subtree's left spine becomes pending.
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}
