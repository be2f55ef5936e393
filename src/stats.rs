//! Statistics and introspection for the AVL tree.
//!
//! Gathers structural facts about a tree in a single walk. Useful for:
//! - Verifying the balance guarantee from the outside (max height vs. the
//!   theoretical AVL bound)
//! - Cross-checking the maintained element count in tests
//! - Debugging tree-shape issues

use crate::node::Node;
use crate::tree::AvlTree;

pub trait TreeStatsTrait {
    fn get_tree_stats(&self) -> TreeStats;
}

/// Structural statistics for one tree, computed by a full O(n) walk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes reachable from the root.
    pub num_nodes: usize,
    /// Nodes with no children.
    pub num_leaves: usize,
    /// Longest root-to-leaf path, in nodes. 0 for an empty tree. For an
    /// AVL tree this never exceeds ~1.44 * log2(n).
    pub max_height: usize,
}

impl<T: Ord> TreeStatsTrait for AvlTree<T> {
    fn get_tree_stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        if let Some(root) = self.root() {
            collect_stats(root, 1, &mut stats);
        }
        stats
    }
}

fn collect_stats<T>(node: &Node<T>, depth: usize, stats: &mut TreeStats) {
    stats.num_nodes += 1;
    if depth > stats.max_height {
        stats.max_height = depth;
    }
    if node.is_leaf() {
        stats.num_leaves += 1;
    }
    if let Some(left) = node.left() {
        collect_stats(left, depth + 1, stats);
    }
    if let Some(right) = node.right() {
        collect_stats(right, depth + 1, stats);
    }
}
