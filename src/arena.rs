use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use crate::node::Node;

/// An opaque handle to a [`Node`] slot within an [`Arena`].
///
/// Handles are only meaningful for the arena that issued them, and a handle
/// to a freed slot may be handed out again by a later allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Slot storage for tree nodes.
///
/// Freed slots are recorded in a free list and reused by subsequent
/// allocations before the backing [`Vec`] grows.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<usize>,
}

impl<K> Default for Arena<K> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<K> Arena<K> {
    /// Store `node`, returning the handle of the slot it now occupies.
    pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeId {
        match self.free.pop() {
            Some(idx) => {
                debug_assert!(self.slots[idx].is_none());
                self.slots[idx] = Some(node);
                NodeId(idx)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Vacate the slot referenced by `id`, returning the node it held.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not reference an occupied slot.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<K> {
        let node = self.slots[id.0].take().expect("free of vacant node slot");
        self.free.push(id.0);
        node
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<K>> {
        self.slots.get(id.0)?.as_ref()
    }

    /// The number of occupied slots.
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// The number of slots ever allocated, occupied or not.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<K> Index<NodeId> for Arena<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.slots[id.0].as_ref().expect("dangling node id")
    }
}

impl<K> IndexMut<NodeId> for Arena<K> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.slots[id.0].as_mut().expect("dangling node id")
    }
}
