use sparse_bitset::{SparseBitSet, codec};

fn sorted(set: &SparseBitSet) -> Vec<i64> {
    let mut keys: Vec<_> = set.iter().collect();
    keys.sort_unstable();
    keys
}

fn set_of(keys: &[i64]) -> SparseBitSet {
    keys.iter().copied().collect()
}

#[test]
fn test_new() {
    let set = SparseBitSet::new();
    assert!(set.is_empty());
    assert!(set.none());
    assert!(!set.any());
    assert_eq!(set.count(), 0);
    assert_eq!(set.word_count(), 0);
}

#[test]
fn test_basic_operations() {
    let mut set = SparseBitSet::new();
    let keys = [-64, -63, -2, -1, 0, 1, 2, 62, 63, 64, 65];
    for key in keys {
        set.set(key);
    }

    for key in keys {
        assert!(set.test(key), "{key} should be a member");
    }
    for key in [3, 61, 66] {
        assert!(!set.test(key), "{key} should not be a member");
    }

    assert_eq!(set.count(), keys.len());
    // Words -2, -1, 0 and 1.
    assert_eq!(set.word_count(), 4);
}

#[test]
fn test_set_returns_word() {
    let mut set = SparseBitSet::new();
    assert_eq!(set.set(0), (0, 1));
    assert_eq!(set.set(63), (0, 1 | 1 << 63));
    assert_eq!(set.set(-63), (-1, 1 << 63));
    assert_eq!(set.set(-127), (-2, 1 << 63));
}

#[test]
fn test_clear_everything_empties_store() {
    let keys: Vec<i64> = (-300..300).step_by(7).collect();
    let mut set = set_of(&keys);
    assert_eq!(set.count(), keys.len());

    for &key in &keys {
        set.clear(key);
    }
    assert_eq!(set.word_count(), 0);
    assert!(set.none());
}

#[test]
fn test_flip_twice_restores() {
    let mut set = set_of(&[-1, 5]);
    for key in [-1, 5, 6, -1000] {
        let before = set.test(key);
        set.flip(key);
        set.flip(key);
        assert_eq!(set.test(key), before);
    }
    assert_eq!(sorted(&set), [-1, 5]);
    assert_eq!(set.word_count(), 2);
}

#[test]
fn test_scenario_algebra() {
    let a = set_of(&[-127, -63, -64, -1, 0, 1, 2, 63, 64]);
    let b = set_of(&[-63, -64, 0, 62, 63, 64, 65]);

    assert_eq!(sorted(&a.intersection(&b)), [-64, -63, 0, 63, 64]);
    assert_eq!(sorted(&a.remove_intersection(&b)), [-127, -1, 1, 2]);
    assert_eq!(
        sorted(&a.union(&b)),
        [-127, -64, -63, -1, 0, 1, 2, 62, 63, 64, 65]
    );
}

#[test]
fn test_self_application() {
    let a = set_of(&[-127, -63, -1, 0, 64, 1 << 50]);

    assert_eq!(a.intersection(&a), a);
    assert_eq!(a.union(&a), a);
    assert!(a.remove_intersection(&a).none());

    let mut b = a.clone();
    let c = a.clone();
    b.remove_intersection_with(&c);
    assert!(b.is_empty());
}

#[test]
fn test_copy_matches_in_place() {
    let a = set_of(&[-500, -64, -1, 3, 90, 4096]);
    let b = set_of(&[-64, -2, 3, 91, 4096, 9000]);

    let mut u = a.clone();
    u.union_with(&b);
    assert_eq!(u, a.union(&b));

    let mut i = a.clone();
    i.intersection_with(&b);
    assert_eq!(i, a.intersection(&b));

    let mut d = a.clone();
    d.remove_intersection_with(&b);
    assert_eq!(d, a.remove_intersection(&b));
}

#[test]
fn test_intersection_never_adds_words_from_other() {
    let a = set_of(&[1]);
    let b = set_of(&[1, 1000, -1000]);
    let i = a.intersection(&b);
    assert_eq!(i.word_count(), 1);

    let mut j = a.clone();
    j.intersection_with(&b);
    assert_eq!(j.word_count(), 1);
}

#[test]
fn test_iteration_decodes_every_key() {
    let keys = [i64::MIN, -129, -128, -65, -64, -1, 0, 127, 128, i64::MAX];
    let set = set_of(&keys);
    let mut expected = keys.to_vec();
    expected.sort_unstable();
    assert_eq!(sorted(&set), expected);
    assert_eq!(set.iter().len(), keys.len());
}

#[test]
fn test_for_each_key_early_stop() {
    let set: SparseBitSet = (-1000..1000).collect();
    let mut taken = Vec::new();
    set.for_each_key(|key| {
        taken.push(key);
        taken.len() < 5
    });
    assert_eq!(taken.len(), 5);
    assert!(taken.iter().all(|&key| set.test(key)));
}

#[test]
fn test_storage_holds_encoded_words() {
    let set = set_of(&[-64, -1, 64]);
    let mut words: Vec<_> = set.storage().iter().collect();
    words.sort_unstable();
    assert_eq!(
        words,
        [
            (-2, codec::mask(0)),
            (-1, codec::mask(1)),
            (1, codec::mask(0))
        ]
    );
}

#[test]
fn test_subset_disjoint() {
    let a = set_of(&[-64, 0]);
    let b = set_of(&[-64, 0, 1]);
    let c = set_of(&[-63, 2]);
    assert!(a.is_subset(&b));
    assert!(!b.is_subset(&a));
    assert!(a.is_disjoint(&c));
    assert!(!b.is_disjoint(&a));
}
