use std::iter::FusedIterator;

use crate::arena::{Arena, NodeId};

/// An in-order iterator over references to the values of an
/// [`AvlTree`](crate::AvlTree), yielding values in ascending order.
#[derive(Debug)]
pub struct Iter<'a, K> {
    arena: &'a Arena<K>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(arena: &'a Arena<K>, root: Option<NodeId>, len: usize) -> Self {
        let mut this = Self {
            arena,
            stack: vec![],
            remaining: len,
        };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: Option<NodeId>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = self.arena[v].left;
        }
    }
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;
        self.remaining -= 1;

        // Descend down the left side of the right hand child of this node, if
        // any.
        let arena = self.arena;
        self.push_subtree(arena[v].right);

        Some(&arena[v].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

/// An iterator of owned values as the underlying tree `into_iter()` impl,
/// yielding values in ascending order.
#[derive(Debug)]
pub struct IntoIter<K> {
    arena: Arena<K>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(arena: Arena<K>, root: Option<NodeId>, len: usize) -> Self {
        let mut this = Self {
            arena,
            stack: vec![],
            remaining: len,
        };

        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: Option<NodeId>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = self.arena[v].left;
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        // The left subtree of this node has already been yielded, so it can
        // be moved out of the arena.
        let v = self.arena.free(self.stack.pop()?);
        self.remaining -= 1;

        self.push_subtree(v.right);

        Some(v.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}
impl<K> FusedIterator for IntoIter<K> {}
