//! Node storage and the rotation primitives for the AVL tree.
//!
//! Nodes own their children exclusively through [`Box`], with no parent
//! pointers. Every structural operation takes ownership of a subtree and
//! returns the (possibly new) subtree root, so relinking is always the
//! caller's job and there are no back-pointer invariants to keep in sync
//! through rotations.

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single stored value plus its subtree bookkeeping.
///
/// The public surface is read-only: [`value`](Node::value),
/// [`left`](Node::left) and [`right`](Node::right). Structural mutation
/// happens only inside the crate, which keeps the balance invariants out
/// of callers' reach.
pub struct Node<T> {
    pub(crate) value: T,
    /// Height of the subtree rooted here. A leaf is 1; an empty link
    /// counts as 0.
    pub(crate) height: u32,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// The value stored at this node.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, holding values that compare less than this node's.
    #[inline]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right child, holding values that compare greater than this node's.
    #[inline]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Left height minus right height. In range [-1, 1] whenever the AVL
    /// invariant holds at this node.
    #[inline]
    pub(crate) fn balance_factor(&self) -> i32 {
        height_of(&self.left) as i32 - height_of(&self.right) as i32
    }

    /// Recompute the stored height from the children's stored heights.
    /// Must run before this node is handed back across a return boundary
    /// after its children changed.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height_of(&self.left).max(height_of(&self.right));
    }
}

#[inline]
pub(crate) fn height_of<T>(link: &Link<T>) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Right rotation around `node`: the left child is promoted to subtree root
/// and `node` becomes its right child; the promoted child's former right
/// subtree moves under `node` on the left. Heights are recomputed demoted
/// node first, so the promoted node sees fresh child heights.
pub(crate) fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut pivot = node
        .left
        .take()
        .expect("right rotation requires a left child");
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Mirror of [`rotate_right`]: the right child is promoted and `node`
/// becomes its left child.
pub(crate) fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut pivot = node
        .right
        .take()
        .expect("left rotation requires a right child");
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Restore the AVL invariant at `node` after one of its subtrees changed
/// height, and return the new subtree root.
///
/// The stored height is refreshed first, then one of the four classical
/// cases is selected from the node's balance factor and the heavier child's
/// balance factor:
///
/// * left-heavy, child not right-leaning: single right rotation (LL)
/// * left-heavy, child right-leaning: left-right double rotation (LR)
/// * right-heavy, child not left-leaning: single left rotation (RR)
/// * right-heavy, child left-leaning: right-left double rotation (RL)
pub(crate) fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    let bf = node.balance_factor();
    if bf > 1 {
        let left = node.left.take().expect("left-heavy node has a left child");
        node.left = Some(if left.balance_factor() < 0 {
            rotate_left(left)
        } else {
            left
        });
        return rotate_right(node);
    }
    if bf < -1 {
        let right = node
            .right
            .take()
            .expect("right-heavy node has a right child");
        node.right = Some(if right.balance_factor() > 0 {
            rotate_right(right)
        } else {
            right
        });
        return rotate_left(node);
    }
    node
}
