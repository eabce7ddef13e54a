//! Integration tests for persistent collections
//!
//! Tests that every operation leaves the original vector untouched.

use counterpick_foundation::PVec;

#[test]
fn push_back_preserves_original() {
    let v1: PVec<u32> = PVec::new();
    let v2 = v1.push_back(1).push_back(2);
    assert!(v1.is_empty());
    assert_eq!(v2.len(), 2);
    assert_eq!(v2.last(), Some(&2));
}

#[test]
fn insert_and_remove_bounds() {
    let v: PVec<u32> = vec![1, 2, 3].into();
    assert!(v.insert(4, 9).is_none());
    assert_eq!(v.insert(3, 9).unwrap().last(), Some(&9));

    let (rest, removed) = v.remove(0).unwrap();
    assert_eq!(removed, 1);
    assert_eq!(rest.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    assert!(v.remove(3).is_none());
    assert_eq!(v.len(), 3);
}

#[test]
fn reposition_is_remove_then_insert() {
    let v: PVec<char> = "abcd".chars().collect();
    let forward = v.reposition(0, 2).unwrap();
    assert_eq!(forward.iter().collect::<String>(), "bcad");
    let backward = v.reposition(3, 1).unwrap();
    assert_eq!(backward.iter().collect::<String>(), "adbc");
    assert_eq!(v.reposition(1, 1).unwrap(), v);
    assert!(v.reposition(0, 4).is_none());
}

#[test]
fn retain_update_and_search() {
    let v: PVec<u32> = (1..=6).collect();
    let evens = v.retain(|x| x % 2 == 0);
    assert_eq!(evens.len(), 3);
    assert!(evens.contains(&4));
    assert_eq!(evens.position(|&x| x == 6), Some(2));

    let updated = v.update(0, 10).unwrap();
    assert_eq!(updated.first(), Some(&10));
    assert_eq!(v.first(), Some(&1));
    assert!(v.update(6, 0).is_none());
}
