//! Strategies for merging two priority queues. None of them modify their operands: every merge
//! builds new paths and shares the rest, so `x` and `y` stay usable afterwards.

use std::cmp;

use crate::error::{Error, Result};
use crate::priority_queue::PriorityQueue;
use crate::tree::Tree;

/// Merges `x` and `y` by inserting every value of both into a fresh queue. Makes no assumption
/// about how the values of the two queues relate.
///
/// Takes `O((|x| + |y|) · height)`.
///
/// # Examples
///
/// ```
/// use bst_pq::{general_merge, PriorityQueue};
///
/// let x: PriorityQueue<_> = [1, 3, 5].into_iter().collect();
/// let y: PriorityQueue<_> = [2, 3, 4].into_iter().collect();
///
/// let merged = general_merge(&x, &y);
/// assert_eq!(merged.iter().collect::<Vec<_>>(), [&1, &2, &3, &4, &5]);
/// ```
pub fn general_merge<T>(x: &PriorityQueue<T>, y: &PriorityQueue<T>) -> PriorityQueue<T>
where
    T: cmp::Ord,
{
    log::debug!("general_merge: rebuilding from {} + {} values", x.len(), y.len());

    let mut merged = PriorityQueue::new();
    for queue in [x, y] {
        let mut nodes = queue.root().iter();
        while let Some(node) = nodes.next_node() {
            merged.insert_rc(node.shared_value());
        }
    }
    merged
}

/// Merges `x` and `y` by reusing the larger queue's tree and inserting the smaller queue's values
/// into it.
///
/// Takes `O(min(|x|, |y|) · height)`.
///
/// # Examples
///
/// ```
/// use bst_pq::{general_merge2, PriorityQueue};
///
/// let x: PriorityQueue<_> = (0..100).collect();
/// let y: PriorityQueue<_> = [42, 100].into_iter().collect();
///
/// let merged = general_merge2(&x, &y);
/// assert_eq!(merged.len(), 101);
/// ```
pub fn general_merge2<T>(x: &PriorityQueue<T>, y: &PriorityQueue<T>) -> PriorityQueue<T>
where
    T: cmp::Ord,
{
    let (larger, smaller) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    log::debug!(
        "general_merge2: inserting {} values into a tree of {}",
        smaller.len(),
        larger.len()
    );

    let mut merged = larger.clone();
    let mut nodes = smaller.root().iter();
    while let Some(node) = nodes.next_node() {
        merged.insert_rc(node.shared_value());
    }
    merged
}

/// Merges `x` and `y` when every value in `x` is smaller than every value in `y`. The largest
/// value of `x` becomes the new root with the rest of `x` on its left and all of `y`, untouched,
/// on its right.
///
/// Takes `O(height(x))`. If either queue is empty the other one is returned.
///
/// # Errors
///
/// [`Error::Overlapping`] if the largest value in `x` isn't smaller than the smallest value in `y`.
///
/// # Examples
///
/// ```
/// use bst_pq::{special_merge, Error, PriorityQueue};
///
/// let x: PriorityQueue<_> = (0..5).collect();
/// let y: PriorityQueue<_> = (5..10).collect();
///
/// let merged = special_merge(&x, &y).unwrap();
/// assert_eq!(merged.iter().copied().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
///
/// assert_eq!(special_merge(&y, &x), Err(Error::Overlapping));
/// ```
pub fn special_merge<T>(x: &PriorityQueue<T>, y: &PriorityQueue<T>) -> Result<PriorityQueue<T>>
where
    T: cmp::Ord,
{
    let smallest_y = match y.min_val() {
        Ok(smallest_y) => smallest_y,
        Err(_) => return Ok(x.clone()),
    };
    // One descent finds the largest value of `x` and builds `x` without it.
    let Some((root_value, rest_of_x)) = x.root().remove_largest() else {
        return Ok(y.clone());
    };
    if *root_value >= *smallest_y {
        return Err(Error::Overlapping);
    }

    log::trace!("special_merge: splicing {} + {} values", x.len(), y.len());
    let root = Tree::from_parts(root_value, rest_of_x, y.root().clone());
    Ok(PriorityQueue::from_root(root, x.len() + y.len()))
}
