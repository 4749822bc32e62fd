//! This crate exposes an ordered, mutable key set backed by an AVL tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored keys. Every `Node` stores one key and has at most two child `Node`s. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its
//!    own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than
//!    its own key.
//!
//! Searching takes `O(height)`, where `height` is the longest path from the root `Node` to a
//! leaf `Node`.
//!
//! ## AVL trees
//!
//! An AVL tree additionally keeps, for every `Node`, the heights of its two subtrees within one
//! of each other. After each insertion or deletion the tree walks from the point of change back
//! up to the root and restores that balance with rotations, so the height never exceeds roughly
//! `1.44 * lg(N + 2)` and every operation stays `O(lg N)`.
//!
//! ```
//! use avl_set::Tree;
//!
//! let mut tree: Tree<u32> = (0..1000).collect();
//! assert!(tree.height() <= 14);
//!
//! for key in (0..1000).step_by(2) {
//!     assert!(tree.delete(&key));
//! }
//! assert_eq!(tree.len(), 500);
//! assert_eq!(tree.first().map(|n| *n.key()), Some(1));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod tree;

pub use crate::error::{AvlError, InvariantError};
pub use crate::tree::{NodeRef, Replacement, Tree};
