//! Structural edits: mounting a new leaf and unlinking a node.

use std::borrow::Borrow;

use tracing::{debug, trace};

use super::arena::Node;
use super::locate::Slot;
use super::{NodeId, Replacement, Tree};
use crate::error::AvlError;

/// How many children a node about to be unlinked has.
enum Shape {
    Leaf,
    /// Exactly one child, which takes the node's place.
    Single(NodeId),
    Full,
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Inserts `key` into the tree. Returns `false` and leaves the tree untouched if the key is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        self.try_insert(key).is_ok()
    }

    /// Inserts `key` into the tree, handing the key back inside
    /// [`AvlError::DuplicateKey`] if it is already present.
    pub fn try_insert(&mut self, key: K) -> Result<(), AvlError<K>> {
        let Some(root) = self.root else {
            let id = self.nodes.alloc(Node::leaf(key, None));
            self.root = Some(id);
            self.len += 1;
            debug!(node = ?id, "inserted root");
            return Ok(());
        };

        let (mount, dir) = match self.search_insertion_point(&key, root) {
            Slot::Occupied(existing) => {
                debug!(node = ?existing, "rejected duplicate key");
                return Err(AvlError::DuplicateKey(key));
            }
            Slot::Vacant { mount, dir } => (mount, dir),
        };

        let id = self.nodes.alloc(Node::leaf(key, Some(mount)));
        *self.nodes[mount].child_mut(dir) = Some(id);
        self.len += 1;
        debug!(node = ?id, mount = ?mount, side = ?dir, "inserted");

        self.rebalance(Some(mount));
        Ok(())
    }

    /// Deletes `key` from the tree. Returns `false` and leaves the tree untouched if the key is
    /// absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::tree::Tree;
    ///
    /// let mut tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert!(tree.iter().eq([1, 3].iter()));
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_delete(key).is_ok()
    }

    /// Deletes `key` from the tree and returns the key that was stored, or
    /// [`AvlError::KeyNotFound`] if it is absent.
    pub fn try_delete<Q>(&mut self, key: &Q) -> Result<K, AvlError<K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(target) = self.search_from(key, self.root) else {
            debug!("delete of absent key");
            return Err(AvlError::KeyNotFound);
        };

        let (rebalance_start, removed) = self.unlink(target);
        self.rebalance(rebalance_start);
        self.len -= 1;
        debug!(node = ?target, "deleted");

        Ok(removed)
    }
}

impl<K> Tree<K> {
    fn shape(&self, id: NodeId) -> Shape {
        match (self.nodes[id].left, self.nodes[id].right) {
            (None, None) => Shape::Leaf,
            (Some(child), None) | (None, Some(child)) => Shape::Single(child),
            (Some(_), Some(_)) => Shape::Full,
        }
    }

    /// The neighbour whose key moves into `target`, a node with two children.
    fn replacement_for(&self, target: NodeId) -> NodeId {
        let node = &self.nodes[target];
        let (left, right) = (
            node.left.expect("Full node => left child"),
            node.right.expect("Full node => right child"),
        );
        let predecessor = match self.replacement {
            Replacement::TallerSide => node.balance_factor >= 0,
            Replacement::Predecessor => true,
            Replacement::Successor => false,
        };

        if predecessor {
            self.search_maximum(left)
        } else {
            self.search_minimum(right)
        }
    }

    /// Detaches `target` from the tree and frees its slot. Returns the node the rebalancing walk
    /// should start from (`None` if the tree is now empty) and the key that was removed.
    ///
    /// A node with two children is not freed itself: it takes over its replacement's key and the
    /// replacement, which has at most one child, is unlinked in its place.
    ///
    /// ## Panics
    ///
    /// When `target` does not name a live node.
    fn unlink(&mut self, target: NodeId) -> (Option<NodeId>, K) {
        let mut target = target;

        if let Shape::Full = self.shape(target) {
            let replacement = self.replacement_for(target);
            trace!(node = ?target, replacement = ?replacement, "unlinking full node");
            self.nodes.swap_keys(target, replacement);
            target = replacement;
        }

        let parent = self.nodes[target].parent;
        let rebalance_start = match self.shape(target) {
            Shape::Leaf => {
                trace!(node = ?target, "unlinking leaf");
                self.replace_child(parent, target, None);
                parent
            }
            Shape::Single(child) => {
                trace!(node = ?target, child = ?child, "splicing out single-child node");
                self.replace_child(parent, target, Some(child));
                Some(child)
            }
            Shape::Full => unreachable!("an in-order neighbour has at most one child"),
        };

        (rebalance_start, self.nodes.free(target).key)
    }
}
