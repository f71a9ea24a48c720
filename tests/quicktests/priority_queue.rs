use bst_pq::PriorityQueue;

use std::collections::BTreeSet;

use crate::ops::do_ops;
use crate::Op;

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut queue = PriorityQueue::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut queue, &mut set) && queue.iter().eq(set.iter())
}

#[quickcheck]
fn fuzz_multiple_operations_string(ops: Vec<Op<String>>) -> bool {
    let mut queue = PriorityQueue::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut queue, &mut set)
}

#[quickcheck]
fn delete_min_drains_ascending(xs: Vec<i16>) -> bool {
    let mut queue: PriorityQueue<_> = xs.iter().copied().collect();
    let mut drained = Vec::new();
    while let Ok(x) = queue.delete_min() {
        drained.push(x);
    }

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    drained == expected && queue.is_empty() && queue.min_val().is_err()
}

#[quickcheck]
fn min_val_is_smallest(xs: Vec<i16>) -> bool {
    let queue: PriorityQueue<_> = xs.iter().copied().collect();

    queue.min_val().ok() == xs.iter().min()
}
