//! Slot storage for tree nodes. Links between nodes are `NodeId` indices into the arena, so the
//! downward `left`/`right` links and the upward `parent` link never form an ownership cycle.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut, Not};

/// An opaque handle naming a node slot in a [`Tree`][crate::tree::Tree].
///
/// A `NodeId` stays attached to the same node for as long as that node is in the tree. Once the
/// node is deleted its slot may be handed to a later insertion.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which child slot of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Dir {
    Left,
    Right,
}

impl Not for Dir {
    type Output = Dir;

    fn not(self) -> Self::Output {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

#[derive(Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1.
    pub(crate) height: usize,
    /// Left subtree height minus right subtree height.
    pub(crate) balance_factor: isize,
}

impl<K> Node<K> {
    pub(crate) fn leaf(key: K, parent: Option<NodeId>) -> Self {
        Node {
            key,
            left: None,
            right: None,
            parent,
            height: 1,
            balance_factor: 0,
        }
    }

    pub(crate) fn child(&self, dir: Dir) -> Option<NodeId> {
        match dir {
            Dir::Left => self.left,
            Dir::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, dir: Dir) -> &mut Option<NodeId> {
        match dir {
            Dir::Left => &mut self.left,
            Dir::Right => &mut self.right,
        }
    }
}

#[derive(Clone)]
pub(crate) struct Arena<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<usize>,
}

impl<K> Arena<K> {
    pub(crate) const fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeId {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                NodeId(idx)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Empties the slot and returns the node that lived there.
    ///
    /// ## Panics
    ///
    /// When the slot is already vacant: some caller lost track of which nodes are live.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<K> {
        let node = self.slots[id.0]
            .take()
            .expect("Freeing a node requires a live node");
        self.free.push(id.0);
        node
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<K>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Exchanges the keys held by two live nodes, leaving their links untouched.
    pub(crate) fn swap_keys(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.slots.split_at_mut(hi);
        let low = head[lo].as_mut().expect("Swapping keys requires live nodes");
        let high = tail[0].as_mut().expect("Swapping keys requires live nodes");
        mem::swap(&mut low.key, &mut high.key);
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<K> Index<NodeId> for Arena<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Node<K> {
        self.get(id).expect("NodeId must name a live node")
    }
}

impl<K> IndexMut<NodeId> for Arena<K> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K> {
        self.slots[id.0]
            .as_mut()
            .expect("NodeId must name a live node")
    }
}
