//! Errors reported by [`Tree`][crate::tree::Tree] operations.

use crate::tree::NodeId;

/// Failure of a keyed operation. Neither variant leaves any trace on the tree: a failed call is
/// a no-op.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AvlError<K> {
    /// The key is already stored in the tree. The rejected key is handed back.
    #[error("key is already present in the tree")]
    DuplicateKey(K),
    /// The key is not stored in the tree.
    #[error("key is not present in the tree")]
    KeyNotFound,
}

/// A broken structural invariant, as reported by [`Tree::validate`][crate::tree::Tree::validate].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    /// A key in the node's subtree is on the wrong side of the node's own key.
    #[error("node {0:?} breaks the search ordering")]
    Unordered(NodeId),
    /// The node's subtree heights differ by more than one.
    #[error("node {node:?} is unbalanced (balance factor {balance_factor})")]
    Unbalanced {
        /// The offending node.
        node: NodeId,
        /// Its balance factor, computed from the actual subtree heights.
        balance_factor: isize,
    },
    /// The cached height does not match the subtree's shape.
    #[error("node {node:?} caches height {cached} but its subtree is {actual} high")]
    StaleHeight {
        /// The offending node.
        node: NodeId,
        /// The height stored on the node.
        cached: usize,
        /// The height of the subtree rooted at the node.
        actual: usize,
    },
    /// The cached balance factor does not match the children's heights.
    #[error("node {node:?} caches balance factor {cached} but should be {actual}")]
    StaleBalanceFactor {
        /// The offending node.
        node: NodeId,
        /// The balance factor stored on the node.
        cached: isize,
        /// The balance factor derived from the children.
        actual: isize,
    },
    /// The node's parent link does not point at the node that holds it as a child.
    #[error("node {0:?} has a parent link that disagrees with its position")]
    BrokenParent(NodeId),
    /// The stored length differs from the number of reachable nodes.
    #[error("tree reports {len} nodes but {reachable} are reachable from the root")]
    SizeMismatch {
        /// The length stored on the tree.
        len: usize,
        /// The number of nodes reachable from the root.
        reachable: usize,
    },
}
