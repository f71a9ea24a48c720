use bst_pq::{pq_sort, st_sort};

fn sorted_dedup(mut xs: Vec<i32>) -> Vec<i32> {
    xs.sort_unstable();
    xs.dedup();
    xs
}

#[quickcheck]
fn st_sort_sorts(xs: Vec<i32>) -> bool {
    st_sort(xs.clone()).collect::<Vec<_>>() == sorted_dedup(xs)
}

#[quickcheck]
fn pq_sort_sorts(xs: Vec<i32>) -> bool {
    pq_sort(xs.clone()).collect::<Vec<_>>() == sorted_dedup(xs)
}

#[quickcheck]
fn sorts_agree(xs: Vec<u8>) -> bool {
    st_sort(xs.clone()).eq(pq_sort(xs))
}
