//! Ordered descent: key search, extreme search, and the search for where a new key goes.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::{Dir, NodeId, NodeRef, Tree};

/// Where a key belongs in the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    /// The key is already held by this node.
    Occupied(NodeId),
    /// The key belongs in the empty `dir` child slot of `mount`.
    Vacant { mount: NodeId, dir: Dir },
}

impl<K> Tree<K> {
    /// Follows `dir` links from `start` until there are none left.
    fn search_extreme(&self, start: NodeId, dir: Dir) -> NodeId {
        let mut cur = start;
        while let Some(next) = self.nodes[cur].child(dir) {
            cur = next;
        }
        cur
    }

    /// The node with the smallest key in the subtree rooted at `start`.
    pub(crate) fn search_minimum(&self, start: NodeId) -> NodeId {
        self.search_extreme(start, Dir::Left)
    }

    /// The node with the largest key in the subtree rooted at `start`.
    pub(crate) fn search_maximum(&self, start: NodeId) -> NodeId {
        self.search_extreme(start, Dir::Right)
    }

    /// The in-order neighbour of `id` in direction `dir` (`Right` is the successor), found through
    /// child links when there is a subtree on that side and parent links otherwise.
    pub(crate) fn neighbor(&self, id: NodeId, dir: Dir) -> Option<NodeId> {
        if let Some(child) = self.nodes[id].child(dir) {
            return Some(self.search_extreme(child, !dir));
        }

        // Climb until we arrive from the opposite side; that ancestor is next in line.
        let mut cur = id;
        while let Some(parent) = self.nodes[cur].parent {
            if self.which_child(parent, cur) == !dir {
                return Some(parent);
            }
            cur = parent;
        }
        None
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Potentially finds the node holding `key`. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1).map(|n| *n.key()), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'_, K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search_from(key, self.root)
            .map(|id| NodeRef::new(self, id))
    }

    /// Returns `true` if the tree holds `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search_from(key, self.root).is_some()
    }

    /// Descends from `start` towards `key`. Costs `O(height)`.
    pub(crate) fn search_from<Q>(&self, key: &Q, start: Option<NodeId>) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = start;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            cur = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Descends from `start` the same way [`search_from`][Self::search_from] does and stops at
    /// the last node whose matching child slot is empty. Meeting an equal key on the way means
    /// the key can't be inserted.
    pub(crate) fn search_insertion_point(&self, key: &K, start: NodeId) -> Slot {
        let mut cur = start;
        loop {
            let node = &self.nodes[cur];
            let dir = match key.cmp(&node.key) {
                Ordering::Less => Dir::Left,
                Ordering::Equal => return Slot::Occupied(cur),
                Ordering::Greater => Dir::Right,
            };
            match node.child(dir) {
                Some(next) => cur = next,
                None => return Slot::Vacant { mount: cur, dir },
            }
        }
    }
}
