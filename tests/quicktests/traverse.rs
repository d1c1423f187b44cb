use bst_core::{Bst, Order, Tree};

use std::collections::HashMap;

use crate::balanced;

#[quickcheck]
fn three_emissions_per_node(xs: Vec<i8>) -> bool {
    let tree = balanced(&xs);
    let mut out = Vec::new();
    tree.traverse(&mut out).unwrap();

    let lines = String::from_utf8(out).unwrap();
    lines.lines().count() == 3 * tree.len()
}

#[quickcheck]
fn emissions_per_node_are_pre_in_post(xs: Vec<i8>) -> bool {
    let tree = balanced(&xs);
    let mut seen: HashMap<i8, Vec<Order>> = HashMap::new();
    for visit in tree.events() {
        seen.entry(*visit.data).or_default().push(visit.order);
    }

    seen.len() == tree.len()
        && seen
            .values()
            .all(|orders| orders == &[Order::Pre, Order::In, Order::Post])
}

#[quickcheck]
fn in_order_emissions_are_sorted(xs: Vec<i8>) -> bool {
    let bst = Bst::try_from_keys(xs).unwrap();
    let in_order: Vec<_> = bst
        .events()
        .filter(|v| v.order == Order::In)
        .map(|v| v.data)
        .collect();

    in_order == bst.sorted_list()
}

#[quickcheck]
fn subtrees_nest_between_emissions(xs: Vec<i8>) -> bool {
    // Every key of the left subtree is emitted between a node's pre and in emissions, every key
    // of the right subtree between its in and post emissions.
    let tree = balanced(&xs);
    let events: Vec<_> = tree.events().collect();
    let position = |key: &i8, order: Order| {
        events
            .iter()
            .position(|v| v.data == key && v.order == order)
            .unwrap()
    };

    let mut stack = vec![&tree];
    while let Some(tree) = stack.pop() {
        let Tree::Node(n) = tree else {
            continue;
        };
        let (pre, mid, post) = (
            position(n.data(), Order::Pre),
            position(n.data(), Order::In),
            position(n.data(), Order::Post),
        );
        let left_ok = n.left().iter().all(|k| {
            let p = position(k, Order::Pre);
            let q = position(k, Order::Post);
            pre < p && q < mid
        });
        let right_ok = n.right().iter().all(|k| {
            let p = position(k, Order::Pre);
            let q = position(k, Order::Post);
            mid < p && q < post
        });
        if !(left_ok && right_ok) {
            return false;
        }
        stack.push(n.left());
        stack.push(n.right());
    }
    true
}

#[test]
fn empty_tree_emits_nothing() {
    let mut out = Vec::new();
    Bst::<i8>::new().traverse(&mut out).unwrap();

    assert!(out.is_empty());
    assert_eq!(Tree::<i8>::Leaf.events().count(), 0);
}
