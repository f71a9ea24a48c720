use bst_pq::{SearchTree, Tree};

use std::collections::{BTreeSet, HashSet};

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: SearchTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: SearchTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: SearchTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    // We may have inserted the same value multiple times - delete each one.
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: SearchTree<_> = xs.into_iter().collect();
    tree.insert(x);
    let before = tree.clone();

    !tree.insert(x) && tree.root().ptr_eq(before.root()) && tree == before
}

#[quickcheck]
fn iter_matches_btreeset(xs: Vec<i16>) -> bool {
    let tree: SearchTree<_> = xs.iter().copied().collect();
    let set: BTreeSet<_> = xs.into_iter().collect();

    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn old_versions_survive(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut versions = vec![Tree::new()];
    for x in &xs {
        let next = versions.last().unwrap().insert(*x);
        versions.push(next);
    }
    for delete in &deletes {
        let next = versions.last().unwrap().remove(delete);
        versions.push(next);
    }

    // Replaying the operations must find every version as it was built.
    let mut model = BTreeSet::new();
    let mut expected = vec![model.clone()];
    for x in &xs {
        model.insert(*x);
        expected.push(model.clone());
    }
    for delete in &deletes {
        model.remove(delete);
        expected.push(model.clone());
    }

    versions
        .iter()
        .zip(&expected)
        .all(|(tree, set)| tree.iter().eq(set.iter()))
}
