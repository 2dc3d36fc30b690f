use bst_search::{Error, Tree};

use std::collections::{HashMap, HashSet};

use crate::Op;

const KEYS: [i32; 15] = [25, 15, 50, 10, 24, 35, 70, 4, 12, 18, 31, 44, 66, 90, 22];

fn in_order_keys<K: Copy, V>(tree: &Tree<K, V>) -> Vec<K> {
    tree.in_order().map(|(k, _)| *k).collect()
}

fn is_sorted<K: Ord>(keys: &[K]) -> bool {
    keys.windows(2).all(|w| w[0] <= w[1])
}

/// Applies a set of operations to a tree and a hashmap of the oldest value per key. Keys are
/// only inserted into the tree when they're new so the tree never holds duplicates and the
/// hashmap stays an exact model.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut HashMap<K, V>)
where
    K: std::hash::Hash + Eq + Clone + Ord + std::fmt::Debug,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                if !map.contains_key(k) {
                    bst.insert(k.clone(), v.clone());
                    map.insert(k.clone(), v.clone());
                }
            }
            Op::Remove(k) => {
                assert_eq!(bst.remove(k), map.remove(k).ok_or(Error::KeyNotFound));
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
        let mut tree = Tree::new();
        let mut map = HashMap::new();

        do_ops(&ops, &mut tree, &mut map);
        tree.len() == map.len()
            && map.keys().all(|key| tree.find(key) == map.get(key).ok_or(Error::KeyNotFound))
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted(xs: Vec<i8>) -> bool {
        let tree: Tree<_, _> = xs.iter().map(|x| (*x, ())).collect();
        let keys = in_order_keys(&tree);

        let mut expected = xs;
        expected.sort_unstable();
        keys == expected
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_, _> = xs.iter().map(|x| (*x, *x)).collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x) == Err(Error::KeyNotFound))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_, _> = xs.iter().map(|x| (*x, *x)).collect();

        let mut still_present = xs;
        for delete in &deletes {
            let before = tree.len();
            let removed = tree.remove(delete);

            // Duplicates are removed one at a time.
            match still_present.iter().position(|x| x == delete) {
                Some(pos) => {
                    still_present.swap_remove(pos);
                    if removed != Ok(*delete) || tree.len() != before - 1 {
                        return false;
                    }
                }
                None => {
                    if removed != Err(Error::KeyNotFound) || tree.len() != before {
                        return false;
                    }
                }
            }
            if !is_sorted(&in_order_keys(&tree)) {
                return false;
            }
        }

        still_present.sort_unstable();
        in_order_keys(&tree) == still_present
    }
}

quickcheck::quickcheck! {
    fn draining_leaves_empty(xs: Vec<i8>, seed: Vec<usize>) -> bool {
        let mut tree: Tree<_, _> = xs.iter().map(|x| (*x, ())).collect();

        // Remove in an order scrambled by `seed` rather than insertion order.
        let mut pending = xs;
        let mut seed = seed.into_iter().cycle();
        while !pending.is_empty() {
            let pos = seed.next().unwrap_or(0) % pending.len();
            let key = pending.swap_remove(pos);
            if tree.remove(&key).is_err() {
                return false;
            }
        }

        tree.is_empty() && (i8::MIN..=i8::MAX).all(|k| tree.find(&k).is_err())
    }
}

quickcheck::quickcheck! {
    fn level_order_visits_every_node(xs: Vec<i8>) -> bool {
        let tree: Tree<_, _> = xs.iter().map(|x| (*x, *x)).collect();

        let mut bfs: Vec<i8> = tree.bfs().into_iter().copied().collect();
        let mut pre: Vec<i8> = tree.pre_order().map(|(k, _)| *k).collect();
        let mut post: Vec<i8> = tree.post_order().map(|(k, _)| *k).collect();
        bfs.sort_unstable();
        pre.sort_unstable();
        post.sort_unstable();

        let sorted = in_order_keys(&tree);
        bfs == sorted && pre == sorted && post == sorted
    }
}

#[test]
fn in_order_of_small_tree() {
    let mut tree = Tree::new();
    for key in [25, 15, 50, 10, 24, 35, 70] {
        tree.insert(key, ());
    }

    assert_eq!(in_order_keys(&tree), [10, 15, 24, 25, 35, 50, 70]);
}

#[test]
fn removing_the_root_promotes_its_successor() {
    let mut tree: Tree<_, _> = KEYS.iter().map(|k| (*k, *k)).collect();

    assert_eq!(tree.remove(&25), Ok(25));
    assert_eq!(tree.find(&25), Err(Error::KeyNotFound));
    assert_eq!(tree.pre_order().next(), Some((&31, &31)));
    assert_eq!(tree.len(), KEYS.len() - 1);

    let keys = in_order_keys(&tree);
    assert!(is_sorted(&keys));
    assert!(!keys.contains(&25));
}

#[test]
fn duplicate_keys_are_kept() {
    let mut tree = Tree::new();
    tree.insert(7, "a");
    tree.insert(7, "b");

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.find(&7), Ok(&"a"));
    assert_eq!(tree.bfs(), [&"a", &"b"]);
}
