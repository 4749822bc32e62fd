use std::collections::{BTreeSet, HashSet};

use avl_set::tree::{Replacement, Tree};
use avl_set::AvlError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{shape, Op};

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both, and that the tree
/// passes validation after every step.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Clone + Ord + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k) => assert_eq!(tree.insert(k.clone()), set.insert(k.clone())),
            Op::Delete(k) => assert_eq!(tree.delete(k), set.remove(k)),
        }
        assert_eq!(tree.validate(), Ok(()));
    }
}

/// Largest height an AVL tree with `n` keys may have.
fn height_bound(n: usize) -> f64 {
    1.4405 * ((n + 2) as f64).log2() - 0.3277
}

fn shuffled(n: i32, seed: u64) -> Vec<i32> {
    let mut keys: Vec<_> = (0..n).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn fuzz_every_replacement_policy(ops: Vec<Op<i16>>) -> bool {
    [
        Replacement::TallerSide,
        Replacement::Predecessor,
        Replacement::Successor,
    ]
    .into_iter()
    .all(|replacement| {
        let mut tree = Tree::with_replacement(replacement);
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.iter().eq(set.iter())
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.search(x).map(|n| n.key()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    tree.validate().is_ok()
        && deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
}

#[quickcheck]
fn round_trip(xs: Vec<i16>, k: i16) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();

    tree.insert(k);
    let found = tree.search(&k).map(|n| *n.key()) == Some(k);
    tree.delete(&k);

    found && tree.search(&k).is_none() && tree.validate().is_ok()
}

#[quickcheck]
fn duplicate_insert_leaves_shape_alone(xs: Vec<i8>, k: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.insert(k);
    let before = shape(&tree);

    !tree.insert(k)
        && tree.try_insert(k) == Err(AvlError::DuplicateKey(k))
        && shape(&tree) == before
}

#[quickcheck]
fn missing_delete_leaves_shape_alone(xs: Vec<i8>, k: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != k).collect();
    let before = shape(&tree);
    let len = tree.len();

    !tree.delete(&k)
        && tree.try_delete(&k) == Err(AvlError::KeyNotFound)
        && shape(&tree) == before
        && tree.len() == len
}

#[quickcheck]
fn neighbours_agree_with_iteration(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let forward: Vec<_> = std::iter::successors(tree.first(), |n| n.next())
        .map(|n| *n.key())
        .collect();
    let backward: Vec<_> = std::iter::successors(tree.last(), |n| n.prev())
        .map(|n| *n.key())
        .collect();

    tree.iter().copied().eq(forward) && tree.iter().rev().copied().eq(backward)
}

#[test]
fn height_bound_holds_for_ascending_inserts() {
    let mut tree = Tree::new();
    for n in 1..=20_000 {
        tree.insert(n);
        assert!(
            tree.height() as f64 <= height_bound(tree.len()),
            "height {} too large for {} keys",
            tree.height(),
            tree.len()
        );
    }
}

#[test]
fn height_bound_holds_for_random_inserts_and_deletes() {
    let keys = shuffled(50_000, 7);
    let mut tree: Tree<_> = keys.iter().copied().collect();
    assert_eq!(tree.validate(), Ok(()));
    assert!(tree.height() as f64 <= height_bound(tree.len()));

    for (i, key) in shuffled(50_000, 11).into_iter().enumerate() {
        assert!(tree.delete(&key));
        if i % 1000 == 0 {
            assert_eq!(tree.validate(), Ok(()));
            if !tree.is_empty() {
                assert!(tree.height() as f64 <= height_bound(tree.len()));
            }
        }
    }
    assert!(tree.is_empty());
}

#[test]
fn invariants_hold_after_every_operation() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut keys: Vec<i32> = (0..500).collect();

    for replacement in [Replacement::TallerSide, Replacement::Successor] {
        let mut tree = Tree::with_replacement(replacement);
        keys.shuffle(&mut rng);
        for key in &keys {
            assert!(tree.insert(*key));
            assert_eq!(tree.validate(), Ok(()));
        }
        keys.shuffle(&mut rng);
        for key in &keys {
            assert!(tree.delete(key));
            assert_eq!(tree.validate(), Ok(()));
        }
        assert!(tree.is_empty());
    }
}

#[test]
fn deleting_every_key_empties_the_tree() {
    for seed in 0..16 {
        let keys = shuffled(300, seed);
        let mut tree: Tree<_> = keys.iter().copied().collect();
        let mut remaining = keys.len();

        for key in shuffled(300, seed + 100) {
            assert_eq!(tree.try_delete(&key), Ok(key));
            remaining -= 1;
            assert_eq!(tree.len(), remaining);
        }

        assert!(tree.root().is_none());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.validate(), Ok(()));
    }
}

#[test]
fn depth_matches_distance_from_root() {
    let tree: Tree<_> = shuffled(1000, 3).into_iter().collect();
    let root = tree.root().unwrap();
    assert_eq!(root.depth(), 1);

    for key in 0..1000 {
        let node = tree.search(&key).unwrap();
        let ancestors = std::iter::successors(node.parent(), |n| n.parent()).count();
        assert_eq!(node.depth(), ancestors + 1);
        assert!(node.depth() <= tree.height());
    }
}

#[test]
fn two_child_deletion_promotes_predecessor() {
    let mut tree: Tree<_> = [20, 10, 30, 5, 15].into_iter().collect();
    let holder = tree.search(&20).unwrap().id();

    assert!(tree.delete(&20));
    assert_eq!(tree.validate(), Ok(()));

    assert_eq!(tree.search(&15).unwrap().id(), holder);
    assert_eq!(
        shape(&tree),
        [
            Some((15, 3, 1, [Some(10), Some(30), None])),
            Some((10, 2, 1, [Some(5), None, Some(15)])),
            Some((5, 1, 0, [None, None, Some(10)])),
            None,
            None,
            None,
            Some((30, 1, 0, [None, None, Some(15)])),
            None,
            None,
        ]
    );
}
