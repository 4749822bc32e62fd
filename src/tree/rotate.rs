//! The four AVL rotations. See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for
//! terminology.

use tracing::trace;

use super::{Dir, NodeId, Tree};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Rotation {
    Left,
    Right,
    /// Rotate the right child right, then the node left.
    RightLeft,
    /// Rotate the left child left, then the node right.
    LeftRight,
}

/// Whether two balance factors lean to different sides. An even (zero) factor leans nowhere, so
/// a heavy node over an even child always gets a single rotation.
fn opposite_sign(a: isize, b: isize) -> bool {
    a.signum() * b.signum() < 0
}

impl<K> Tree<K> {
    /// Picks the rotation that restores balance at `id`, or `None` if it is already balanced.
    fn rotation_for(&self, id: NodeId) -> Option<Rotation> {
        let node = &self.nodes[id];
        if node.balance_factor.abs() <= 1 {
            return None;
        }

        let leans_left = node.balance_factor >= 0;
        let child_opposes = |child: Option<NodeId>| {
            child.map_or(false, |c| {
                opposite_sign(node.balance_factor, self.nodes[c].balance_factor)
            })
        };

        let rotation = if !leans_left && child_opposes(node.right) {
            Rotation::RightLeft
        } else if leans_left && child_opposes(node.left) {
            Rotation::LeftRight
        } else if leans_left {
            Rotation::Right
        } else {
            Rotation::Left
        };
        Some(rotation)
    }

    /// Rotates `id` if it is unbalanced. Returns the root of the subtree that now sits where `id`
    /// was, which is `id` itself when nothing had to move.
    pub(crate) fn rotate_if_needed(&mut self, id: NodeId) -> NodeId {
        let Some(rotation) = self.rotation_for(id) else {
            return id;
        };
        trace!(node = ?id, ?rotation, "rotating");

        let new_root = match rotation {
            Rotation::Left => self.rotate_left(id),
            Rotation::Right => self.rotate_right(id),
            Rotation::RightLeft => {
                let right = self.nodes[id].right.expect("Rotate right-left => right child");
                self.rotate_right(right);
                self.rotate_left(id)
            }
            Rotation::LeftRight => {
                let left = self.nodes[id].left.expect("Rotate left-right => left child");
                self.rotate_left(left);
                self.rotate_right(id)
            }
        };

        // After rotating, assert that we've restored the AVL invariant locally.
        if cfg!(debug_assertions) {
            let root = &self.nodes[new_root];
            let left_height = self.height_of(root.left);
            let right_height = self.height_of(root.right);
            assert_eq!(root.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        new_root
    }

    /// Rotate `id` to the right. This moves the left child up vertically and `id` down
    /// vertically. Used to rebalance the tree when the left child is too tall.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///    Option<parent>            Option<parent>
    ///      /                         /
    ///   old_root (i.e. "id")      new_root
    ///    /     \                  /     \
    /// new_root  z     rotate ->  x    old_root
    ///  / \                               /  \
    /// x   y                             y    z
    /// ```
    pub(crate) fn rotate_right(&mut self, id: NodeId) -> NodeId {
        self.rotate(id, Dir::Right)
    }

    /// Mirror image of [`rotate_right`][Self::rotate_right]: the right child moves up.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    pub(crate) fn rotate_left(&mut self, id: NodeId) -> NodeId {
        self.rotate(id, Dir::Left)
    }

    /// Moves `old_root` down towards `dir`, lifting its child on the other side into its place.
    /// Returns the lifted child.
    fn rotate(&mut self, old_root: NodeId, dir: Dir) -> NodeId {
        let new_root = self.nodes[old_root]
            .child(!dir)
            .expect("Rotating a node requires a child to lift");
        let parent = self.nodes[old_root].parent;
        let inner = self.nodes[new_root].child(dir);

        // `y` in the diagram changes sides: from the new root to the old root.
        *self.nodes[old_root].child_mut(!dir) = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(old_root);
        }

        *self.nodes[new_root].child_mut(dir) = Some(old_root);
        self.nodes[old_root].parent = Some(new_root);
        self.replace_child(parent, old_root, Some(new_root));

        // The old root is now below the new one, so it has to be fixed first.
        self.fix_height(old_root);
        self.fix_height(new_root);
        new_root
    }
}
