use bst_core::{Bst, Error};

use std::collections::{BTreeSet, HashSet};

use crate::{balanced, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops(ops: &[Op<i8>], bst: &mut Bst<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(*k).unwrap();
                set.insert(*k);
            }
            Op::Remove(k) => {
                bst.remove(k).unwrap();
                set.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut bst = Bst::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut bst, &mut set);
    bst.sorted_list().into_iter().eq(set.iter())
        && (i8::MIN..=i8::MAX)
            .all(|k| bst.search(&k).unwrap() == set.contains(&k))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let bst = Bst::try_from_keys(xs.iter().copied()).unwrap();

    xs.iter().all(|x| bst.search(x).unwrap())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let bst = Bst::try_from_keys(xs.iter().copied()).unwrap();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !bst.search(x).unwrap() && !bst.search_iterative(x).unwrap())
}

#[quickcheck]
fn hand_built_searches_agree(xs: Vec<i8>, targets: Vec<i8>) -> bool {
    let bst = Bst::from_root(balanced(&xs));

    bst.root().is_search_tree().unwrap()
        && xs.iter().all(|x| bst.search_iterative(x).unwrap())
        && targets
            .iter()
            .all(|t| bst.search(t).unwrap() == bst.search_iterative(t).unwrap())
}

#[quickcheck]
fn empty_tree_finds_nothing(k: i8) -> bool {
    let bst = Bst::new();

    !bst.search(&k).unwrap() && !bst.search_iterative(&k).unwrap()
}

#[test]
fn nan_target_is_rejected() {
    let bst = Bst::try_from_keys([1.5, 0.5, 2.5]).unwrap();

    assert!(matches!(bst.search(&f64::NAN), Err(Error::InvalidArgument)));
    assert!(matches!(bst.search_iterative(&f64::NAN), Err(Error::InvalidArgument)));
    assert!(matches!(bst.floor(&f64::NAN), Err(Error::InvalidArgument)));
    assert!(matches!(Bst::new().search(&f64::NAN), Ok(false)));
}

#[test]
fn concrete_scenario() {
    use bst_core::Tree;

    let bst = Bst::from_root(Tree::node(
        5,
        Tree::node(3, Tree::singleton(1), Tree::Leaf),
        Tree::singleton(8),
    ));

    assert!(bst.root().search(&1).unwrap());
    assert!(!bst.root().search(&4).unwrap());
    assert!(bst.search_iterative(&8).unwrap());
}
