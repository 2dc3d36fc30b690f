//! This crate exposes an unbalanced Binary Search Tree (BST), the linked queue it uses for
//! breadth-first walks, and a recursive binary search over sorted slices, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`Tree`] here does nothing to limit its
//! height, so inserting keys in sorted order makes every operation linear. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! ## Binary search
//!
//! The same "discard half of what's left" idea applied to a sorted slice is in [`search`].
//!
//! # Examples
//!
//! ```
//! use bst_search::{search, Error, Tree};
//!
//! let mut tree = Tree::new();
//! for key in [25, 15, 50, 10, 24, 35, 70, 4, 12, 18, 31, 44, 66, 90, 22] {
//!     tree.insert(key, key.to_string());
//! }
//!
//! // Removing the root hands its place to its in-order successor.
//! assert_eq!(tree.remove(&25), Ok("25".to_string()));
//! assert_eq!(tree.find(&25), Err(Error::KeyNotFound));
//! assert_eq!(tree.pre_order().next(), Some((&31, &"31".to_string())));
//!
//! let sorted: Vec<_> = tree.in_order().map(|(k, _)| *k).collect();
//! assert_eq!(search::binary_search(&sorted, &44), Some(9));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod queue;
pub mod search;
pub mod tree;


pub use error::{Error, Result};
pub use queue::Queue;
pub use tree::Tree;
