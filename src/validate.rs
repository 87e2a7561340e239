use std::cmp::Ordering;

use thiserror::Error;

use crate::{
    arena::NodeId,
    avl::{balance, height},
    AvlTree,
};

/// A broken structural invariant, as reported by [`AvlTree::check()`].
///
/// Any of these indicates a defect in the tree implementation rather than a
/// condition callers are expected to handle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A child or parent link references a vacant arena slot.
    #[error("node {node} links to vacant slot {link}")]
    DanglingLink { node: NodeId, link: NodeId },

    /// The stored height does not equal one more than the tallest child.
    #[error("node {node} has height {stored}, want {want}")]
    Height { node: NodeId, stored: i8, want: i8 },

    /// The balance factor is outside of `-1..=1`.
    #[error("node {node} has balance factor {balance}")]
    Unbalanced { node: NodeId, balance: i8 },

    /// A value is not within the bounds imposed by its ancestors.
    #[error("node {node} is out of order with respect to its ancestors")]
    Order { node: NodeId },

    /// The node's parent does not hold it as the expected child.
    #[error("node {node} is not the expected child of its parent {parent}")]
    Parent { node: NodeId, parent: NodeId },

    /// The root node has a parent link.
    #[error("root node {node} has parent {parent}")]
    RootHasParent { node: NodeId, parent: NodeId },

    /// A non-root node has no parent link.
    #[error("non-root node {node} has no parent")]
    Orphan { node: NodeId },

    /// The number of reachable nodes disagrees with the recorded length, or
    /// with the number of occupied slots.
    #[error("reached {reachable} nodes, tree length is {len} with {live} live slots")]
    Length {
        reachable: usize,
        len: usize,
        live: usize,
    },
}

impl<K> AvlTree<K>
where
    K: Ord,
{
    /// Walk the tree and return true if every structural invariant holds.
    ///
    /// This is a diagnostic intended for tests; see [`AvlTree::check()`].
    pub fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Walk the tree asserting the BST, AVL and parent link invariants of
    /// every node, returning the first violation found.
    ///
    /// The walk is an iterative pre-order traversal and does not recurse.
    pub fn check(&self) -> Result<(), ValidationError> {
        let arena = &self.arena;

        let Some(root) = self.root else {
            return match (self.len, arena.live()) {
                (0, 0) => Ok(()),
                (len, live) => Err(ValidationError::Length {
                    reachable: 0,
                    len,
                    live,
                }),
            };
        };

        // Each entry carries the exclusive (lower, upper) value bounds
        // imposed by the ancestors of the node.
        let mut stack: Vec<(NodeId, Option<&K>, Option<&K>)> = vec![(root, None, None)];
        let mut reachable = 0;

        while let Some((id, lower, upper)) = stack.pop() {
            reachable += 1;
            let n = &arena[id];

            for link in [n.left, n.right, n.parent].into_iter().flatten() {
                if arena.get(link).is_none() {
                    return Err(ValidationError::DanglingLink { node: id, link });
                }
            }

            // Invariant 1: every value in the left subtree is strictly less
            // than this node, and every value in the right subtree strictly
            // greater.
            if lower.is_some_and(|l| n.value <= *l) || upper.is_some_and(|u| n.value >= *u) {
                return Err(ValidationError::Order { node: id });
            }

            // Invariant 2: the height of this node is always +1 of the
            // maximum child height (-1 for an absent child).
            let want = 1 + height(arena, n.left).max(height(arena, n.right));
            if n.height != want {
                return Err(ValidationError::Height {
                    node: id,
                    stored: n.height,
                    want,
                });
            }

            // Invariant 3: the absolute height difference between the left
            // subtree and right subtree (the "balance factor") cannot
            // exceed 1.
            let balance = balance(arena, id);
            if balance.abs() > 1 {
                return Err(ValidationError::Unbalanced { node: id, balance });
            }

            // Invariant 4: the parent link agrees with the child links of the
            // parent, and only the root has no parent.
            match (n.parent, id == root) {
                (Some(parent), true) => {
                    return Err(ValidationError::RootHasParent { node: id, parent });
                }
                (None, false) => return Err(ValidationError::Orphan { node: id }),
                (None, true) => {}
                (Some(parent), false) => {
                    let p = &arena[parent];
                    let holder = match n.value.cmp(&p.value) {
                        Ordering::Less => p.left,
                        Ordering::Equal | Ordering::Greater => p.right,
                    };
                    if holder != Some(id) {
                        return Err(ValidationError::Parent { node: id, parent });
                    }
                }
            }

            // Prepare to visit the children, left first.
            if let Some(right) = n.right {
                stack.push((right, Some(&n.value), upper));
            }
            if let Some(left) = n.left {
                stack.push((left, lower, Some(&n.value)));
            }

            // A cycle in the child links would otherwise never terminate.
            if reachable > arena.live() {
                break;
            }
        }

        if reachable != self.len || reachable != arena.live() {
            return Err(ValidationError::Length {
                reachable,
                len: self.len,
                live: arena.live(),
            });
        }

        Ok(())
    }
}
