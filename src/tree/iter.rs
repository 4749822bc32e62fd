use std::iter::FusedIterator;

use super::{Dir, NodeId, Tree};

/// An iterator over the keys of a [`Tree`] in ascending order.
///
/// It walks parent links between neighbours, so it needs no stack of its own.
pub struct Iter<'tree, K> {
    tree: &'tree Tree<K>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    len: usize,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'tree, K> Iter<'tree, K> {
    pub(crate) fn new(tree: &'tree Tree<K>) -> Self {
        Iter {
            tree,
            front: tree.root.map(|root| tree.search_minimum(root)),
            back: tree.root.map(|root| tree.search_maximum(root)),
            len: tree.len(),
        }
    }
}

impl<'tree, K> Iterator for Iter<'tree, K> {
    type Item = &'tree K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let cur = self.front?;
        self.len -= 1;
        self.front = self.tree.neighbor(cur, Dir::Right);

        Some(&self.tree.nodes[cur].key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K> DoubleEndedIterator for Iter<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let cur = self.back?;
        self.len -= 1;
        self.back = self.tree.neighbor(cur, Dir::Left);

        Some(&self.tree.nodes[cur].key)
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
