use std::collections::BTreeSet;

use bst_pq::PriorityQueue;
use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a priority queue in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Remove(T),
    /// Pop the smallest value
    DeleteMin,
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Inserts are
    /// weighted up so the trees actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::DeleteMin,
            3 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

/// Applies a set of operations to a queue and a `BTreeSet` model.
/// Returns `false` as soon as the two disagree or the queue's values
/// stop being strictly ascending.
pub(crate) fn do_ops<T>(
    ops: &[Op<T>],
    queue: &mut PriorityQueue<T>,
    set: &mut BTreeSet<T>,
) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(x) => queue.insert(x.clone()) == set.insert(x.clone()),
            Op::Remove(x) => queue.remove(x) == set.remove(x),
            Op::DeleteMin => queue.delete_min().ok() == set.pop_first(),
            Op::Iter => queue.iter().eq(set.iter()),
        };
        let ascending = queue.iter().zip(queue.iter().skip(1)).all(|(a, b)| a < b);
        if !agrees || !ascending || queue.len() != set.len() {
            return false;
        }
    }

    true
}
