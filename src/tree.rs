//! AVL tree implementation.
//!
//! This module contains the main [`AvlTree`] container and the
//! ownership-returning recursion that keeps the balance invariant intact
//! through insertion and deletion.

use std::cmp::Ordering;
use std::fmt::{self, Debug};

use crate::iter::{Iter, TraversalOrder};
use crate::node::{rebalance, Link, Node};

/// A self-balancing binary search tree (AVL tree).
///
/// Stores a set of distinct values ordered by their [`Ord`] implementation.
/// Every node satisfies `|height(left) - height(right)| <= 1`, restored by
/// local rotations after each mutation, so single-element operations are
/// O(log n) worst case.
///
/// ## Duplicates
///
/// Inserting a value that is already present is a no-op: the existing node
/// wins, the shape is untouched and [`len`](AvlTree::len) does not change.
/// [`insert`](AvlTree::insert) reports this by returning `false`.
///
/// ## Absence
///
/// "Not found" is an ordinary result, never a fault: lookups return `None`,
/// and [`remove`](AvlTree::remove) of an absent value returns `None` and
/// leaves the tree exactly as it was.
///
/// ## Examples
///
/// ```rust
/// use ravl::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(50);
/// tree.insert(80);
/// tree.insert(90);
///
/// // That insertion order is a degenerate chain; a left rotation has
/// // already restored balance.
/// assert_eq!(tree.root().map(|n| *n.value()), Some(80));
/// assert_eq!(tree.min().map(|n| *n.value()), Some(50));
/// assert_eq!(tree.max().map(|n| *n.value()), Some(90));
/// assert!(tree.contains(&90));
///
/// assert_eq!(tree.remove(&50), Some(50));
/// assert_eq!(tree.remove(&50), None);
/// assert_eq!(tree.len(), 2);
/// ```
///
/// The tree is single-threaded and non-reentrant; wrap it in a lock if it
/// must be shared across threads.
pub struct AvlTree<T: Ord> {
    root: Link<T>,
    count: usize,
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> AvlTree<T> {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// Insert a value.
    ///
    /// Returns `true` if the value was added, `false` if an equal value was
    /// already present (in which case nothing changes).
    pub fn insert(&mut self, value: T) -> bool {
        let (root, inserted) = Self::insert_recurse(self.root.take(), value);
        self.root = root;
        if inserted {
            self.count += 1;
        }
        inserted
    }

    /// Remove a value, returning the stored element.
    ///
    /// Returns `None` when no equal value is present; the tree is left
    /// untouched in that case.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let (root, removed) = Self::remove_recurse(self.root.take(), value);
        self.root = root;
        if removed.is_some() {
            self.count -= 1;
        }
        removed
    }

    /// Find the node holding a value equal to `value`.
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match value.cmp(node.value()) {
                Ordering::Less => cur = node.left(),
                Ordering::Greater => cur = node.right(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Check whether a value is present.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// The node holding the smallest value, or `None` on an empty tree.
    pub fn min(&self) -> Option<&Node<T>> {
        let mut cur = self.root.as_deref()?;
        while let Some(left) = cur.left() {
            cur = left;
        }
        Some(cur)
    }

    /// The node holding the largest value, or `None` on an empty tree.
    pub fn max(&self) -> Option<&Node<T>> {
        let mut cur = self.root.as_deref()?;
        while let Some(right) = cur.right() {
            cur = right;
        }
        Some(cur)
    }

    /// The root node, or `None` on an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Number of values currently stored.
    ///
    /// O(1): the counter is maintained through mutations, never recomputed
    /// by walking the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the tree is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drop every node and reset the count to zero. Idempotent.
    pub fn clear(&mut self) {
        self.root = None;
        self.count = 0;
    }

    /// Visit every node exactly once in the given [`TraversalOrder`].
    ///
    /// The pass is read-only. Panics raised by the visitor are not caught;
    /// they abort the remaining traversal and propagate to the caller.
    pub fn traverse<F>(&self, order: TraversalOrder, mut visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        Self::traverse_recurse(self.root.as_deref(), order, &mut visitor);
    }

    /// In-order iterator over the stored values, ascending.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }
}

// Internals implementation
impl<T: Ord> AvlTree<T> {
    /// Insert `value` into the subtree `link`, returning the new subtree
    /// root and whether a node was actually created.
    ///
    /// Each level of the unwind refreshes its node's height and rebalances
    /// it; a single insertion moves any ancestor's height by at most 1, so
    /// at most one rotation point fires along the way up.
    fn insert_recurse(link: Link<T>, value: T) -> (Link<T>, bool) {
        let Some(mut node) = link else {
            return (Some(Box::new(Node::new(value))), true);
        };

        let inserted = match value.cmp(&node.value) {
            Ordering::Less => {
                let (left, inserted) = Self::insert_recurse(node.left.take(), value);
                node.left = left;
                inserted
            }
            Ordering::Greater => {
                let (right, inserted) = Self::insert_recurse(node.right.take(), value);
                node.right = right;
                inserted
            }
            // Equal values are not reinserted; the existing node wins.
            Ordering::Equal => false,
        };

        if inserted {
            node = rebalance(node);
        }
        (Some(node), inserted)
    }

    /// Remove `value` from the subtree `link`, returning the new subtree
    /// root and the removed element if one was found.
    ///
    /// Unlike insertion, every ancestor on the unwind is rebalanced:
    /// deletion can shrink a subtree enough that imbalance cascades up
    /// several levels.
    fn remove_recurse(link: Link<T>, value: &T) -> (Link<T>, Option<T>) {
        let Some(mut node) = link else {
            return (None, None);
        };

        let removed = match value.cmp(&node.value) {
            Ordering::Less => {
                let (left, removed) = Self::remove_recurse(node.left.take(), value);
                node.left = left;
                removed
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove_recurse(node.right.take(), value);
                node.right = right;
                removed
            }
            Ordering::Equal => {
                return match (node.left.take(), node.right.take()) {
                    (None, None) => (None, Some(node.value)),
                    (Some(child), None) | (None, Some(child)) => {
                        (Some(child), Some(node.value))
                    }
                    (Some(left), Some(right)) => {
                        // Two children: the in-order successor's value moves
                        // into this node and the successor is the node that
                        // physically leaves the tree. Values move, node
                        // identity stays put.
                        let (right, successor) = Self::detach_min(right);
                        node.left = Some(left);
                        node.right = right;
                        let removed = std::mem::replace(&mut node.value, successor);
                        (Some(rebalance(node)), Some(removed))
                    }
                };
            }
        };

        if removed.is_some() {
            node = rebalance(node);
        }
        (Some(node), removed)
    }

    /// Detach the minimum node of a non-empty subtree, returning the
    /// remaining (rebalanced) subtree and the detached value.
    fn detach_min(mut node: Box<Node<T>>) -> (Link<T>, T) {
        match node.left.take() {
            None => (node.right.take(), node.value),
            Some(left) => {
                let (left, min) = Self::detach_min(left);
                node.left = left;
                (Some(rebalance(node)), min)
            }
        }
    }

    fn traverse_recurse<F>(link: Option<&Node<T>>, order: TraversalOrder, visitor: &mut F)
    where
        F: FnMut(&Node<T>),
    {
        let Some(node) = link else {
            return;
        };
        match order {
            TraversalOrder::InOrder => {
                Self::traverse_recurse(node.left(), order, visitor);
                visitor(node);
                Self::traverse_recurse(node.right(), order, visitor);
            }
            TraversalOrder::PreOrder => {
                visitor(node);
                Self::traverse_recurse(node.left(), order, visitor);
                Self::traverse_recurse(node.right(), order, visitor);
            }
            TraversalOrder::PostOrder => {
                Self::traverse_recurse(node.left(), order, visitor);
                Self::traverse_recurse(node.right(), order, visitor);
                visitor(node);
            }
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + Debug> Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
