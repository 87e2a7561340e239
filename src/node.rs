use std::fmt::Debug;

use crate::{
    arena::{Arena, NodeId},
    avl::balance,
};

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub(crate) value: K,

    /// Child node links.
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,

    /// The node holding this node as a child, or [`None`] for the root.
    ///
    /// This link is informational only; slot ownership is held by the
    /// [`Arena`].
    pub(crate) parent: Option<NodeId>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 0, and an absent subtree has a height of -1.
    ///
    /// An i8 holds a maximum value of 127, meaning it can represent the height
    /// of a balanced tree of up to 4.3*10²⁶ entries.
    pub(crate) height: i8,
}

impl<K> Node<K> {
    pub(crate) fn new(value: K) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent: None,
            height: 0,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A read-only view of a single node within an [`AvlTree`].
///
/// A [`NodeRef`] borrows the tree, so the structure it describes cannot
/// change while it is held.
///
/// [`AvlTree`]: crate::AvlTree
pub struct NodeRef<'a, K> {
    arena: &'a Arena<K>,
    id: NodeId,
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(arena: &'a Arena<K>, id: NodeId) -> Self {
        Self { arena, id }
    }

    fn node(&self) -> &'a Node<K> {
        let arena = self.arena;
        &arena[self.id]
    }

    fn view(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.arena, id))
    }

    /// The handle of the arena slot holding this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &'a K {
        &self.node().value
    }

    pub fn left(&self) -> Option<Self> {
        self.view(self.node().left)
    }

    pub fn right(&self) -> Option<Self> {
        self.view(self.node().right)
    }

    /// The parent of this node, or [`None`] if this node is the tree root.
    pub fn parent(&self) -> Option<Self> {
        self.view(self.node().parent)
    }

    /// The number of edges on the longest path from this node down to a leaf.
    pub fn height(&self) -> usize {
        debug_assert!(self.node().height >= 0);
        self.node().height as usize
    }

    /// The "balance factor" of the subtree rooted at this node.
    ///
    /// Positive when left heavy, negative when right heavy, and always within
    /// `-1..=1` for a well-formed tree.
    pub fn balance(&self) -> i8 {
        balance(self.arena, self.id)
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<K> Debug for NodeRef<'_, K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .field("height", &self.node().height)
            .finish()
    }
}
