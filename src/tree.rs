use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{Debug, Display},
    mem,
};

use crate::{
    arena::{Arena, NodeId},
    avl::{rebalance, set_left, set_right, update_height},
    iter::{IntoIter, Iter},
    node::{Node, NodeRef},
};

/// An ordered set of unique values, stored in a self-balancing AVL tree.
///
/// Every insert and removal restores the AVL invariant (the heights of the two
/// child subtrees of any node differ by at most one), bounding the height of
/// the tree, and therefore the cost of all operations, to _O(log n)_.
///
/// Nodes are stored in an arena and link to their children and parent by
/// slot handle.
#[derive(Clone)]
pub struct AvlTree<K> {
    pub(crate) root: Option<NodeId>,
    pub(crate) arena: Arena<K>,
    pub(crate) len: usize,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self {
            root: None,
            arena: Arena::default(),
            len: 0,
        }
    }
}

impl<K> AvlTree<K> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no values.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.len == 0, self.root.is_none());
        self.root.is_none()
    }

    /// Drop all values in the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
        self.len = 0;
    }

    /// Returns the minimum value in the tree, if any.
    pub fn min(&self) -> Option<&K> {
        let mut id = self.root?;
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        Some(&self.arena[id].value)
    }

    /// Returns the maximum value in the tree, if any.
    pub fn max(&self) -> Option<&K> {
        let mut id = self.root?;
        while let Some(right) = self.arena[id].right {
            id = right;
        }
        Some(&self.arena[id].value)
    }

    /// Returns the height of the tree, or [`None`] if the tree is empty.
    ///
    /// A tree containing a single value has a height of 0.
    pub fn height(&self) -> Option<usize> {
        self.root().map(|v| v.height())
    }

    /// Returns a read-only view of the root node, if any.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|id| NodeRef::new(&self.arena, id))
    }

    /// Iterate over the values in the tree in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.arena, self.root, self.len)
    }

    /// Return the in-order (ascending) sequence of values in the tree.
    pub fn to_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Replace the root of the tree, clearing the parent link of the new root.
    fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
        if let Some(r) = root {
            self.arena[r].parent = None;
        }
    }
}

impl<K> AvlTree<K>
where
    K: Ord,
{
    /// Insert `value` into the tree, returning true if it was added.
    ///
    /// If an equal value is already present the tree is left unchanged, `value`
    /// is dropped and false is returned.
    ///
    /// This operation completes in _O(log n)_ time.
    pub fn insert(&mut self, value: K) -> bool {
        if self.contains(&value) {
            return false;
        }

        let root = self.insert_at(self.root, value);
        self.set_root(Some(root));
        self.len += 1;

        true
    }

    /// Returns a reference to the value in the tree equal to `value`, if any.
    pub fn get<Q>(&self, value: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut next = self.root;

        while let Some(id) = next {
            let n = &self.arena[id];
            next = match value.cmp(n.value.borrow()) {
                Ordering::Less => n.left,
                Ordering::Equal => return Some(&n.value),
                Ordering::Greater => n.right,
            };
        }

        None
    }

    /// Returns true if the tree contains a value equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Remove `value` from the tree, returning true if it was present.
    ///
    /// This operation completes in _O(log n)_ time.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Remove and return the value equal to `value` from the tree, if any.
    pub fn take<Q>(&mut self, value: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut removed = None;
        let root = self.remove_at(self.root, value, &mut removed);

        if removed.is_some() {
            self.set_root(root);
            self.len -= 1;
        }

        removed
    }

    /// Recurse down the subtree rooted at `node` to the empty slot where
    /// `value` belongs, allocating a new leaf there.
    ///
    /// Returns the root of the (possibly rotated) subtree.
    fn insert_at(&mut self, node: Option<NodeId>, value: K) -> NodeId {
        let Some(id) = node else {
            return self.arena.alloc(Node::new(value));
        };

        match value.cmp(&self.arena[id].value) {
            Ordering::Less => {
                let left = self.arena[id].left;
                let child = self.insert_at(left, value);
                set_left(&mut self.arena, id, Some(child));
            }
            Ordering::Greater => {
                let right = self.arena[id].right;
                let child = self.insert_at(right, value);
                set_right(&mut self.arena, id, Some(child));
            }
            Ordering::Equal => unreachable!("duplicate values are rejected before descent"),
        }

        // Update this node's height and correct any imbalance introduced by
        // the new leaf.
        update_height(&mut self.arena, id);
        rebalance(&mut self.arena, id)
    }

    /// Recurse down the subtree rooted at `node`, removing the node holding
    /// `value` if it exists and placing the removed value in `removed`.
    ///
    /// Returns the root of the (possibly rotated, or now empty) subtree. If
    /// the value is not found, the subtree is returned unmodified.
    fn remove_at<Q>(
        &mut self,
        node: Option<NodeId>,
        value: &Q,
        removed: &mut Option<K>,
    ) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = node?;
        let (left, right) = (self.arena[id].left, self.arena[id].right);

        match value.cmp(self.arena[id].value.borrow()) {
            Ordering::Less => {
                let child = self.remove_at(left, value, removed);
                set_left(&mut self.arena, id, child);
            }
            Ordering::Greater => {
                let child = self.remove_at(right, value, removed);
                set_right(&mut self.arena, id, child);
            }
            Ordering::Equal => match (left, right) {
                (Some(_), Some(right)) => {
                    // This node has two children, and is replaced by the
                    // in-order successor: the minimum value of the right
                    // subtree, which is unlinked from that subtree.
                    //
                    // The node itself stays in place and takes the value of
                    // the successor.
                    let (child, successor) = self.remove_min(right);
                    set_right(&mut self.arena, id, child);

                    *removed = Some(mem::replace(&mut self.arena[id].value, successor));
                }
                (child, None) | (None, child) => {
                    // Splice out this node, replacing it with its only child
                    // (if any). The parent links the child on return.
                    *removed = Some(self.arena.free(id).value);
                    return child;
                }
            },
        }

        if removed.is_none() {
            // The tree structure has not been modified, so it does not require
            // rebalancing.
            return Some(id);
        }

        update_height(&mut self.arena, id);
        Some(rebalance(&mut self.arena, id))
    }

    /// Unlink the node holding the minimum value in the subtree rooted at
    /// `id`, returning the new subtree root and the extracted value.
    ///
    /// Each ancestor of the extracted node is rebalanced as the recursion
    /// unwinds.
    fn remove_min(&mut self, id: NodeId) -> (Option<NodeId>, K) {
        let Some(left) = self.arena[id].left else {
            // This node is the end of the left edge, and has no left child;
            // its right subtree (if any) takes its place.
            let n = self.arena.free(id);
            return (n.right, n.value);
        };

        let (child, min) = self.remove_min(left);
        set_left(&mut self.arena, id, child);

        update_height(&mut self.arena, id);
        (Some(rebalance(&mut self.arena, id)), min)
    }
}

impl<K> Debug for AvlTree<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the values of the tree in pre-order, which (unlike the in-order
/// sequence) captures the shape of the tree.
impl<K> Display for AvlTree<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AVL pre-order { ")?;

        let mut stack = self.root.into_iter().collect::<Vec<_>>();
        let mut first = true;
        while let Some(id) = stack.pop() {
            let n = &self.arena[id];
            stack.extend(n.right.iter().chain(n.left.iter()));

            if !first {
                f.write_str(", ")?;
            }
            first = false;

            write!(f, "{}", n.value)?;
        }

        f.write_str(" }")
    }
}

impl<K> PartialEq for AvlTree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K> Eq for AvlTree<K> where K: Eq {}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<K> Extend<K> for AvlTree<K>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<K> IntoIterator for AvlTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.arena, self.root, self.len)
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
