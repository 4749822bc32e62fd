use tracing::trace;

use super::{NodeId, Tree};

impl<K> Tree<K> {
    /// Walks from `start` up to the root, refreshing each node's height and balance factor from
    /// its children and rotating wherever a node has become unbalanced.
    ///
    /// Every ancestor is visited even after a rotation: an insertion needs at most one rotation,
    /// but a deletion can unbalance several levels on the way up.
    pub(crate) fn rebalance(&mut self, start: Option<NodeId>) {
        let mut cursor = start;
        while let Some(id) = cursor {
            self.fix_height(id);
            trace!(
                node = ?id,
                height = self.nodes[id].height,
                balance_factor = self.nodes[id].balance_factor,
                "rebalancing"
            );

            let subtree_root = self.rotate_if_needed(id);
            cursor = self.nodes[subtree_root].parent;
        }
    }
}
