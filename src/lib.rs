//! # ravl
//!
//! A self-balancing binary search tree (AVL tree): a generic ordered
//! container with O(log n) worst-case insert, lookup and removal, and
//! in-order iteration in ascending order.
//!
//! The balance invariant — every node's subtree heights differ by at most
//! one — is restored after each mutation by local rotations, so the tree
//! never degenerates into a linked list no matter the insertion order.
//!
//! ## Example
//!
//! ```rust
//! use ravl::{AvlTree, TraversalOrder};
//!
//! let mut tree: AvlTree<i32> = [50, 80, 90, 40, 30].into_iter().collect();
//! assert_eq!(tree.len(), 5);
//!
//! // In-order traversal yields ascending order regardless of how the
//! // values went in.
//! let mut values = Vec::new();
//! tree.traverse(TraversalOrder::InOrder, |node| values.push(*node.value()));
//! assert_eq!(values, vec![30, 40, 50, 80, 90]);
//!
//! assert_eq!(tree.remove(&80), Some(80));
//! assert!(!tree.contains(&80));
//! assert_eq!(tree.min().map(|n| *n.value()), Some(30));
//! ```

pub mod iter;
pub mod node;
pub mod stats;
pub mod tree;

pub use iter::{Iter, TraversalOrder};
pub use node::Node;
pub use stats::{TreeStats, TreeStatsTrait};
pub use tree::AvlTree;
