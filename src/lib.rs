//! This crate exposes a persistent Binary Search Tree (BST) and a priority
//! queue built on top of it, mostly for educational purposes.
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
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! The trees here are not balanced: searching takes `O(height)` which is
//! `O(lg N)` for random insertion orders but `O(N)` for sorted ones.
//!
//! ## Persistence
//!
//! Nodes are never modified once built. Inserting or removing a value copies
//! the path from the root to the affected node and shares every other subtree
//! with the previous version, so old versions stay valid and cloning a tree is
//! `O(1)`.
//!
//! ## Priority queue and merging
//!
//! [`PriorityQueue`] reads the smallest value as the one with the highest
//! priority. Two queues can be merged with [`general_merge`],
//! [`general_merge2`] or, when every value of the first is smaller than every
//! value of the second, the much cheaper [`special_merge`].
//!
//! ```
//! use bst_pq::{special_merge, PriorityQueue};
//!
//! let low: PriorityQueue<_> = [3, 1, 2].into_iter().collect();
//! let high: PriorityQueue<_> = [5, 4].into_iter().collect();
//!
//! let mut merged = special_merge(&low, &high)?;
//! assert_eq!(merged.delete_min()?, 1);
//! assert_eq!(merged.len(), 4);
//! # Ok::<(), bst_pq::Error>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod merge;
pub mod priority_queue;
pub mod search_tree;
pub mod sort;
pub mod tree;

pub use error::{Error, Result};
pub use merge::{general_merge, general_merge2, special_merge};
pub use priority_queue::PriorityQueue;
pub use search_tree::{IntoIter, SearchTree};
pub use sort::{pq_sort, st_sort};
pub use tree::{Iter, Node, Tree};
