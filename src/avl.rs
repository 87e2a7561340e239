//! Height bookkeeping and the rotation primitives that restore the AVL
//! balance invariant after a structural change.

use crate::arena::{Arena, NodeId};

/// Returns the height of the (optional) subtree rooted at `n`.
///
/// An absent subtree has a height of -1.
pub(crate) fn height<K>(arena: &Arena<K>, n: Option<NodeId>) -> i8 {
    n.map(|v| arena[v].height).unwrap_or(-1)
}

/// Recompute the height of `n` from the heights of its direct children.
///
/// The children must hold correct heights before calling this.
pub(crate) fn update_height<K>(arena: &mut Arena<K>, n: NodeId) {
    let left = height(arena, arena[n].left);
    let right = height(arena, arena[n].right);

    arena[n].height = 1 + left.max(right);
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<K>(arena: &Arena<K>, n: NodeId) -> i8 {
    // Correctness: the height is an i8 >= -1, the difference of two of which
    // fits in an i16 without truncation or sign inversion.
    (height(arena, arena[n].left) as i16 - height(arena, arena[n].right) as i16) as i8
}

/// Link `child` as the left child of `parent`, pointing the child's parent
/// link back at `parent`.
pub(crate) fn set_left<K>(arena: &mut Arena<K>, parent: NodeId, child: Option<NodeId>) {
    arena[parent].left = child;
    if let Some(c) = child {
        arena[c].parent = Some(parent);
    }
}

/// Link `child` as the right child of `parent`, pointing the child's parent
/// link back at `parent`.
pub(crate) fn set_right<K>(arena: &mut Arena<K>, parent: NodeId, child: Option<NodeId>) {
    arena[parent].right = child;
    if let Some(c) = child {
        arena[c].parent = Some(parent);
    }
}

/// Left rotate the given subtree rooted at `z` around the pivot point `Y`,
/// returning the new subtree root `Y`.
///
/// ```text
///
///      z
///     / \                               Y
///    1   Y         Rotate Left        /   \
///       / \      --------------->    z     x
///      t   x                        / \   / \
///         / \                      1   t 3   4
///        3   4
/// ```
///
/// The parent of the new subtree root is inherited from `z`, but the child
/// link of that parent still references `z` and must be updated by the caller.
///
/// # Panics
///
/// Panics if `z` has no right pointer (cannot be rotated).
pub(crate) fn rotate_left<K>(arena: &mut Arena<K>, z: NodeId) -> NodeId {
    let y = arena[z].right.unwrap();
    let t = arena[y].left;

    #[cfg(feature = "tracing")]
    tracing::trace!(node = %z, pivot = %y, "rotate left");

    arena[y].left = Some(z);
    arena[z].right = t;

    // z is now a child of y, and must be updated first.
    update_height(arena, z);
    update_height(arena, y);

    arena[y].parent = arena[z].parent;
    arena[z].parent = Some(y);
    if let Some(t) = t {
        arena[t].parent = Some(z);
    }

    y
}

/// Right rotate the given subtree rooted at `z` around the pivot point `Y`,
/// returning the new subtree root `Y`.
///
/// ```text
///          z
///         / \                           Y
///        Y   4     Rotate Right       /   \
///       / \      --------------->    x     z
///      x   t                        / \   / \
///     / \                          1   2 t   4
///    1   2
/// ```
///
/// The parent of the new subtree root is inherited from `z`, but the child
/// link of that parent still references `z` and must be updated by the caller.
///
/// # Panics
///
/// Panics if `z` has no left pointer (cannot be rotated).
pub(crate) fn rotate_right<K>(arena: &mut Arena<K>, z: NodeId) -> NodeId {
    let y = arena[z].left.unwrap();
    let t = arena[y].right;

    #[cfg(feature = "tracing")]
    tracing::trace!(node = %z, pivot = %y, "rotate right");

    arena[y].right = Some(z);
    arena[z].left = t;

    update_height(arena, z);
    update_height(arena, y);

    arena[y].parent = arena[z].parent;
    arena[z].parent = Some(y);
    if let Some(t) = t {
        arena[t].parent = Some(z);
    }

    y
}

/// Restore the balance of the subtree rooted at `n`, returning the (possibly
/// new) subtree root.
///
/// The height of `n` must have been refreshed after the structural change
/// below it, and the subtrees of `n` must themselves be balanced.
pub(crate) fn rebalance<K>(arena: &mut Arena<K>, n: NodeId) -> NodeId {
    let root = match balance(arena, n) {
        // Left-heavy
        (2..) => {
            let left = arena[n].left.unwrap();
            if balance(arena, left) < 0 {
                #[cfg(feature = "tracing")]
                tracing::trace!(node = %n, "left-right imbalance");

                let left = rotate_left(arena, left);
                arena[n].left = Some(left);
            }
            rotate_right(arena, n)
        }
        // Right-heavy
        (..=-2) => {
            let right = arena[n].right.unwrap();
            if balance(arena, right) > 0 {
                #[cfg(feature = "tracing")]
                tracing::trace!(node = %n, "right-left imbalance");

                let right = rotate_right(arena, right);
                arena[n].right = Some(right);
            }
            rotate_left(arena, n)
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => n,
    };

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(arena, root).abs() <= 1);

    root
}
