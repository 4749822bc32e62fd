#[macro_use]
extern crate quickcheck_macros;

mod set;

use avl_set::tree::{NodeRef, Tree};
use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Delete the K from the tree
    Delete(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        if *g.choose(&[true, true, false]).unwrap() {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Delete(K::arbitrary(g))
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Op::Insert(k) => Box::new(k.shrink().map(Op::Insert)),
            Op::Delete(k) => Box::new(k.shrink().map(Op::Delete)),
        }
    }
}

/// A node's key, height, balance factor, and the keys of its left child, right child, and parent.
pub type NodeShape<K> = (K, usize, isize, [Option<K>; 3]);

/// Every node of `tree` in pre-order, with `None` for each empty link. Two trees with equal
/// shapes are structurally identical.
pub fn shape<K: Clone>(tree: &Tree<K>) -> Vec<Option<NodeShape<K>>> {
    fn key_of<K: Clone>(node: Option<NodeRef<'_, K>>) -> Option<K> {
        node.map(|n| n.key().clone())
    }

    let mut out = Vec::new();
    let mut stack = vec![tree.root()];
    while let Some(node) = stack.pop() {
        let Some(node) = node else {
            out.push(None);
            continue;
        };
        out.push(Some((
            node.key().clone(),
            node.height(),
            node.balance_factor(),
            [key_of(node.left()), key_of(node.right()), key_of(node.parent())],
        )));
        stack.push(node.right());
        stack.push(node.left());
    }
    out
}
