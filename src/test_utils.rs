use std::fmt::{Debug, Display};

use proptest::prelude::*;

use crate::AvlTree;

/// The upper bound of values generated by [`arbitrary_op()`].
///
/// A small value domain encourages multiple operations to act on the same
/// value.
const VALUE_MAX: u16 = 64;

#[derive(Debug, Clone)]
pub(crate) enum Op {
    Insert(u16),
    Contains(u16),
    Remove(u16),
    Min,
    Max,
    Clear,
}

pub(crate) fn arbitrary_op() -> impl Strategy<Value = Op> {
    // Mutations are weighted to build up trees of a useful size between
    // (rare) clears.
    prop_oneof![
        8 => (0..VALUE_MAX).prop_map(Op::Insert),
        4 => (0..VALUE_MAX).prop_map(Op::Contains),
        6 => (0..VALUE_MAX).prop_map(Op::Remove),
        1 => Just(Op::Min),
        1 => Just(Op::Max),
        1 => Just(Op::Clear),
    ]
}

/// The maximum height (in edges) of an AVL tree holding `n` values.
pub(crate) fn avl_height_bound(n: usize) -> f64 {
    1.44 * ((n + 2) as f64).log2() - 0.328
}

/// Assert the BST, AVL and parent link invariants of `t`, printing the tree
/// structure on failure.
#[track_caller]
pub(crate) fn assert_valid<K>(t: &AvlTree<K>)
where
    K: Ord + Debug + Display,
{
    if let Err(e) = t.check() {
        panic!("invalid tree: {e}\n{t}\n{t:?}\n{}", t.dot());
    }
}
