use super::{NodeId, Tree};
use crate::error::InvariantError;

impl<K> Tree<K>
where
    K: Ord,
{
    /// Checks every structural invariant of the tree and reports the first one found broken:
    /// search ordering, AVL balance, cached heights and balance factors, parent links, and the
    /// stored length.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let mut reachable = 0;
        if let Some(root) = self.root {
            if self.nodes[root].parent.is_some() {
                return Err(InvariantError::BrokenParent(root));
            }
            self.validate_subtree(root, None, None, &mut reachable)?;
        }

        if reachable != self.len {
            return Err(InvariantError::SizeMismatch {
                len: self.len,
                reachable,
            });
        }
        Ok(())
    }

    /// Panics with the broken invariant if [`validate`][Self::validate] fails.
    pub fn assert_invariants(&self) {
        if let Err(err) = self.validate() {
            panic!("AVL invariant violated: {err}");
        }
    }

    /// Validates the subtree at `id`, whose keys must lie strictly between `lower` and `upper`.
    /// Returns the subtree's actual height.
    fn validate_subtree(
        &self,
        id: NodeId,
        lower: Option<&K>,
        upper: Option<&K>,
        reachable: &mut usize,
    ) -> Result<usize, InvariantError> {
        *reachable += 1;
        let node = &self.nodes[id];

        if lower.map_or(false, |lower| node.key <= *lower)
            || upper.map_or(false, |upper| node.key >= *upper)
        {
            return Err(InvariantError::Unordered(id));
        }

        let left_height = self.validate_child(id, node.left, lower, Some(&node.key), reachable)?;
        let right_height =
            self.validate_child(id, node.right, Some(&node.key), upper, reachable)?;

        let actual = left_height.max(right_height) + 1;
        if node.height != actual {
            return Err(InvariantError::StaleHeight {
                node: id,
                cached: node.height,
                actual,
            });
        }

        let balance_factor = left_height as isize - right_height as isize;
        if node.balance_factor != balance_factor {
            return Err(InvariantError::StaleBalanceFactor {
                node: id,
                cached: node.balance_factor,
                actual: balance_factor,
            });
        }
        if balance_factor.abs() > 1 {
            return Err(InvariantError::Unbalanced {
                node: id,
                balance_factor,
            });
        }

        Ok(actual)
    }

    fn validate_child(
        &self,
        parent: NodeId,
        child: Option<NodeId>,
        lower: Option<&K>,
        upper: Option<&K>,
        reachable: &mut usize,
    ) -> Result<usize, InvariantError> {
        let Some(child) = child else {
            return Ok(0);
        };
        if self.nodes[child].parent != Some(parent) {
            return Err(InvariantError::BrokenParent(child));
        }
        self.validate_subtree(child, lower, upper, reachable)
    }
}
