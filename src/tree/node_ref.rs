use std::borrow::Borrow;
use std::fmt;

use super::{Dir, NodeId, Tree};

/// A read-only view of one node of a [`Tree`].
///
/// The view borrows the tree, so it can't outlive the next mutation.
pub struct NodeRef<'a, K> {
    tree: &'a Tree<K>,
    id: NodeId,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for NodeRef<'_, K> {}

/// Two views are equal when they name the same node of the same tree.
impl<K> PartialEq for NodeRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}
impl<K> Eq for NodeRef<'_, K> {}

impl<K> fmt::Debug for NodeRef<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", self.key())
            .field("height", &self.height())
            .field("balance_factor", &self.balance_factor())
            .finish()
    }
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(tree: &'a Tree<K>, id: NodeId) -> Self {
        NodeRef { tree, id }
    }

    fn link(&self, link: Option<NodeId>) -> Option<NodeRef<'a, K>> {
        link.map(|id| NodeRef::new(self.tree, id))
    }

    /// The handle naming this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The key stored in this node.
    pub fn key(&self) -> &'a K {
        &self.tree.nodes[self.id].key
    }

    /// Levels in the subtree rooted here; 1 for a leaf.
    pub fn height(&self) -> usize {
        self.tree.nodes[self.id].height
    }

    /// Left subtree height minus right subtree height. Positive means left-heavy, negative means
    /// right-heavy, and it is always within `-1..=1` between operations.
    pub fn balance_factor(&self) -> isize {
        self.tree.nodes[self.id].balance_factor
    }

    /// The node holding this one as a child, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.link(self.tree.nodes[self.id].parent)
    }

    /// The root of the left subtree.
    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.link(self.tree.nodes[self.id].left)
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.link(self.tree.nodes[self.id].right)
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        let node = &self.tree.nodes[self.id];
        node.left.is_none() && node.right.is_none()
    }

    /// Number of nodes on the path from the root to this node, both ends included. The root has
    /// depth 1.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut cursor = self.tree.nodes[self.id].parent;
        while let Some(parent) = cursor {
            depth += 1;
            cursor = self.tree.nodes[parent].parent;
        }
        depth
    }

    /// The node with the smallest key in this subtree.
    pub fn minimum(&self) -> NodeRef<'a, K> {
        NodeRef::new(self.tree, self.tree.search_minimum(self.id))
    }

    /// The node with the largest key in this subtree.
    pub fn maximum(&self) -> NodeRef<'a, K> {
        NodeRef::new(self.tree, self.tree.search_maximum(self.id))
    }

    /// The in-order successor of this node in the whole tree.
    pub fn next(&self) -> Option<NodeRef<'a, K>> {
        self.link(self.tree.neighbor(self.id, Dir::Right))
    }

    /// The in-order predecessor of this node in the whole tree.
    pub fn prev(&self) -> Option<NodeRef<'a, K>> {
        self.link(self.tree.neighbor(self.id, Dir::Left))
    }

    /// Searches for `key` in the subtree rooted at this node only.
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'a, K>>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        self.link(self.tree.search_from(key, Some(self.id)))
    }
}
