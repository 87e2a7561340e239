//! An ordered set backed by a self-balancing [AVL tree].
//!
//! [`AvlTree`] stores unique, totally-ordered values and maintains the AVL
//! invariant (the heights of the two subtrees of every node differ by at most
//! one) after every insert and removal using single and double rotations,
//! bounding the height of a tree of `n` values to roughly `1.44 * log2(n)`.
//!
//! ```
//! use avlset::AvlTree;
//!
//! let mut t = AvlTree::new();
//!
//! // Inserting an ascending sequence triggers a left rotation.
//! for v in [1, 2, 3] {
//!     assert!(t.insert(v));
//! }
//!
//! // Duplicates are rejected.
//! assert!(!t.insert(2));
//!
//! let root = t.root().unwrap();
//! assert_eq!(*root.value(), 2);
//! assert_eq!(root.left().map(|v| *v.value()), Some(1));
//! assert_eq!(root.right().map(|v| *v.value()), Some(3));
//!
//! assert!(t.remove(&1));
//! assert_eq!(t.iter().copied().collect::<Vec<_>>(), [2, 3]);
//!
//! // The structural invariants can be checked at any time.
//! assert!(t.validate());
//! ```
//!
//! Nodes are held in an arena and reference their children and parent by
//! slot handle, so the parent back-links never participate in ownership.
//!
//! # Logging
//!
//! Enabling the `tracing` feature emits a `TRACE` level event for every
//! rotation performed while rebalancing.
//!
//! [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree

mod arena;
mod avl;
mod dot;
mod iter;
mod node;
mod tree;
mod validate;

#[cfg(test)]
mod test_utils;

pub use arena::NodeId;
pub use dot::Dot;
pub use iter::{IntoIter, Iter};
pub use node::NodeRef;
pub use tree::AvlTree;
pub use validate::ValidationError;

