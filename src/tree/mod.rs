//! A mutable ordered key set kept balanced with AVL rotations.
//!
//! Nodes are stored in an arena and refer to each other by [`NodeId`]. Every node carries its
//! subtree height and its balance factor (left height minus right height, so positive means
//! left-heavy), and both are kept current after every insertion and deletion.
//!
//! # Examples
//!
//! ```
//! use avl_set::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&10).is_none());
//!
//! assert!(tree.insert(10));
//! assert!(tree.insert(20));
//! assert!(tree.insert(30));
//!
//! // Keys are unique.
//! assert!(!tree.insert(20));
//!
//! // Inserting in ascending order rotated 20 up to the root.
//! let root = tree.root().unwrap();
//! assert_eq!(root.key(), &20);
//! assert_eq!(root.height(), 2);
//! assert_eq!(root.balance_factor(), 0);
//!
//! assert!(tree.delete(&20));
//! assert!(tree.search(&20).is_none());
//! assert_eq!(tree.len(), 2);
//! ```

mod arena;
mod iter;
mod locate;
mod mutate;
mod node_ref;
mod rebalance;
mod rotate;
mod validate;

use std::fmt;

pub use self::arena::NodeId;
pub use self::iter::Iter;
pub use self::node_ref::NodeRef;

use self::arena::{Arena, Dir};

/// Which neighbour takes the place of a deleted node that has two children.
///
/// Every policy keeps the tree a valid AVL tree; they only differ in the shape left behind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Replacement {
    /// Take the predecessor when the node leans left or is even, the successor when it leans
    /// right. Pulling from the taller side tends to need fewer rotations.
    #[default]
    TallerSide,
    /// Always take the in-order predecessor (the maximum of the left subtree).
    Predecessor,
    /// Always take the in-order successor (the minimum of the right subtree).
    Successor,
}

/// A self-balancing Binary Search Tree (specifically, an AVL tree) holding unique keys. This can
/// be used for inserting, searching, and deleting keys.
#[derive(Clone)]
pub struct Tree<K> {
    nodes: Arena<K>,
    root: Option<NodeId>,
    len: usize,
    replacement: Replacement,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree` using [`Replacement::TallerSide`] for deletions.
    pub const fn new() -> Self {
        Self::with_replacement(Replacement::TallerSide)
    }

    /// Generate a new, empty `Tree` that replaces deleted two-child nodes according to
    /// `replacement`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::tree::{Replacement, Tree};
    ///
    /// let mut tree = Tree::with_replacement(Replacement::Successor);
    /// tree.extend([20, 10, 30]);
    /// tree.delete(&20);
    ///
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(30));
    /// ```
    pub const fn with_replacement(replacement: Replacement) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            replacement,
        }
    }

    /// The deletion policy this tree was built with.
    pub fn replacement(&self) -> Replacement {
        self.replacement
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// Height of the whole tree: 0 when empty, 1 for a lone root.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// The node holding the smallest key.
    pub fn first(&self) -> Option<NodeRef<'_, K>> {
        self.root
            .map(|root| NodeRef::new(self, self.search_minimum(root)))
    }

    /// The node holding the largest key.
    pub fn last(&self) -> Option<NodeRef<'_, K>> {
        self.root
            .map(|root| NodeRef::new(self, self.search_maximum(root)))
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    fn height_of(&self, link: Option<NodeId>) -> usize {
        link.map_or(0, |id| self.nodes[id].height)
    }

    /// Recomputes the height and balance factor of `id` from its children, which must already
    /// be correct.
    fn fix_height(&mut self, id: NodeId) {
        let left_height = self.height_of(self.nodes[id].left);
        let right_height = self.height_of(self.nodes[id].right);

        let node = &mut self.nodes[id];
        node.height = left_height.max(right_height) + 1;
        node.balance_factor = left_height as isize - right_height as isize;
    }

    /// Which side of `parent` holds `child`.
    fn which_child(&self, parent: NodeId, child: NodeId) -> Dir {
        if self.nodes[parent].left == Some(child) {
            Dir::Left
        } else {
            debug_assert_eq!(self.nodes[parent].right, Some(child));
            Dir::Right
        }
    }

    /// Puts `new` in the slot that `old` occupies under `parent` (or in the root slot when there
    /// is no parent) and points `new`'s parent link at `parent`. `old`'s own links are left alone.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            Some(parent) => {
                let dir = self.which_child(parent, old);
                *self.nodes[parent].child_mut(dir) = new;
            }
            None => self.root = new,
        }
        if let Some(new) = new {
            self.nodes[new].parent = parent;
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    /// Inserts every key, skipping the ones already present.
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
