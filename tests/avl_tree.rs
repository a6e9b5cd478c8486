use avl_collections::avl_tree::{AvlMap, AvlSet};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 5_000;

fn keys_of(map: &AvlMap<i32, i32>) -> Vec<i32> {
    map.iter().map(|pair| *pair.0).collect()
}

#[test]
fn int_test_ascending_insertions() {
    let mut map = AvlMap::new();
    for key in 1..8 {
        map.insert(key, key);
        assert!(map.is_valid());
    }

    assert_eq!(map.height(), 3);
    assert_eq!(
        map.pretty_print(),
        "        7 (+0)\n    6 (+0)\n        5 (+0)\n4 (+0)\n        3 (+0)\n    2 (+0)\n        1 (+0)\n",
    );
}

#[test]
fn int_test_single_and_double_rotations() {
    for order in &[[3, 2, 1], [1, 2, 3], [1, 3, 2], [3, 1, 2]] {
        let mut map = AvlMap::new();
        for key in order.iter() {
            map.insert(*key, *key * 10);
        }

        assert!(map.is_valid());
        assert_eq!(map.height(), 2);
        assert_eq!(keys_of(&map), vec![1, 2, 3]);
        assert_eq!(map.pretty_print(), "    3 (+0)\n2 (+0)\n    1 (+0)\n");
    }
}

#[test]
fn int_test_overwrite_keeps_shape() {
    let mut map = AvlMap::new();
    for key in &[5, 2, 8, 1] {
        map.insert(*key, 0);
    }
    let before = map.pretty_print();

    assert_eq!(map.insert(2, 7), Some(0));
    assert_eq!(map.len(), 4);
    assert_eq!(map.pretty_print(), before);
    assert_eq!(map[&2], 7);
}

#[test]
fn int_test_remove_missing_is_noop() {
    let mut map = AvlMap::new();
    for key in 0..10 {
        map.insert(key, key);
    }
    let before = map.pretty_print();

    assert_eq!(map.remove(&42), None);
    assert_eq!(map.len(), 10);
    assert_eq!(map.pretty_print(), before);
}

#[test]
fn int_test_random_operations_stay_valid() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = AvlMap::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 500);
        if rng.gen::<bool>() {
            map.insert(key, -key);
            expected.insert(key);
        } else {
            assert_eq!(map.remove(&key).is_some(), expected.remove(&key));
        }

        assert!(map.is_valid());
    }

    assert_eq!(keys_of(&map), expected.into_iter().collect::<Vec<i32>>());
}

#[test]
fn int_test_set_matches_btreeset() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen::<u16>();
        assert_eq!(set.insert(key), expected.insert(key));
    }

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen::<u16>();
        assert_eq!(set.contains(&key), expected.contains(&key));
        assert_eq!(set.remove(&key), expected.take(&key));
    }

    assert!(set.is_valid());
    assert_eq!(set.len(), expected.len());
    assert_eq!(
        set.into_iter().collect::<Vec<u16>>(),
        expected.into_iter().collect::<Vec<u16>>(),
    );
}
