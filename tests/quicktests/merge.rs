use bst_pq::{general_merge, general_merge2, special_merge, Error, PriorityQueue};

use std::collections::BTreeSet;

fn union(xs: &[i16], ys: &[i16]) -> BTreeSet<i16> {
    xs.iter().chain(ys).copied().collect()
}

#[quickcheck]
fn general_merge_is_union(xs: Vec<i16>, ys: Vec<i16>) -> bool {
    let x: PriorityQueue<_> = xs.iter().copied().collect();
    let y: PriorityQueue<_> = ys.iter().copied().collect();
    let expected = union(&xs, &ys);

    let merged = general_merge(&x, &y);
    merged.len() == expected.len() && merged.iter().eq(expected.iter())
}

#[quickcheck]
fn general_merge2_is_union(xs: Vec<i16>, ys: Vec<i16>) -> bool {
    let x: PriorityQueue<_> = xs.iter().copied().collect();
    let y: PriorityQueue<_> = ys.iter().copied().collect();
    let expected = union(&xs, &ys);

    let merged = general_merge2(&x, &y);
    let operands_intact = x.iter().eq(xs.iter().collect::<BTreeSet<_>>())
        && y.iter().eq(ys.iter().collect::<BTreeSet<_>>());
    merged.len() == expected.len() && merged.iter().eq(expected.iter()) && operands_intact
}

#[quickcheck]
fn special_merge_of_split(xs: Vec<i16>, pivot: i16) -> bool {
    let x: PriorityQueue<_> = xs.iter().copied().filter(|v| *v <= pivot).collect();
    let y: PriorityQueue<_> = xs.iter().copied().filter(|v| *v > pivot).collect();
    let expected: BTreeSet<_> = xs.into_iter().collect();

    match special_merge(&x, &y) {
        Ok(merged) => merged.len() == expected.len() && merged.iter().eq(expected.iter()),
        Err(_) => false,
    }
}

#[quickcheck]
fn special_merge_detects_overlap(xs: Vec<i16>, ys: Vec<i16>) -> bool {
    let x: PriorityQueue<_> = xs.into_iter().collect();
    let y: PriorityQueue<_> = ys.into_iter().collect();

    let overlapping = match (x.root().rightmost(), y.min_val()) {
        (Ok(largest), Ok(smallest)) => largest >= smallest,
        _ => false,
    };
    match special_merge(&x, &y) {
        Err(Error::Overlapping) => overlapping,
        Err(_) => false,
        Ok(merged) => !overlapping && merged.len() == x.len() + y.len(),
    }
}
