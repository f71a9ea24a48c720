//! Sorting built on the tree algebra. Both adapters collapse duplicates, just like the containers
//! they drain.

use std::cmp;

use crate::priority_queue::PriorityQueue;
use crate::search_tree::{IntoIter, SearchTree};

/// Sorts `xs` by inserting every value into a [`SearchTree`] and walking it in order.
///
/// # Examples
///
/// ```
/// use bst_pq::st_sort;
///
/// assert_eq!(st_sort([3, 1, 2, 1]).collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn st_sort<T, I>(xs: I) -> IntoIter<T>
where
    T: cmp::Ord + Clone,
    I: IntoIterator<Item = T>,
{
    let tree: SearchTree<T> = xs.into_iter().collect();
    log::trace!("st_sort: {} distinct values", tree.len());
    tree.into_iter()
}

/// Sorts `xs` by inserting every value into a [`PriorityQueue`] and lazily deleting the minimum
/// until the queue is empty.
///
/// # Examples
///
/// ```
/// use bst_pq::pq_sort;
///
/// assert_eq!(pq_sort([3, 1, 2, 1]).collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn pq_sort<T, I>(xs: I) -> impl Iterator<Item = T>
where
    T: cmp::Ord + Clone,
    I: IntoIterator<Item = T>,
{
    let mut queue: PriorityQueue<T> = xs.into_iter().collect();
    log::trace!("pq_sort: {} distinct values", queue.len());
    std::iter::from_fn(move || queue.delete_min().ok())
}
