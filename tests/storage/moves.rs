//! Integration tests for move primitives
//!
//! Tests assign, transfer, release, and reorder for each drag rule.

use counterpick_foundation::{EntityId, ErrorKind};

use crate::fixtures::{ids, members, roster_with, set_id, slot_id};

#[test]
fn assign_moves_pool_entity_into_slot() {
    let roster = roster_with(&[], &[]);
    let s0 = set_id("s0");
    assert!(roster.pool(&s0).unwrap().contains(&EntityId::new(101)));

    let next = roster.assign(&s0, EntityId::new(101), &slot_id("i0")).unwrap();
    assert_eq!(members(&next, "s0", "i0"), ids(&[101]));
    assert!(!next.pool(&s0).unwrap().contains(&EntityId::new(101)));
}

#[test]
fn assign_rejects_placed_and_unknown_entities() {
    let roster = roster_with(&[101], &[]);
    let s0 = set_id("s0");
    let placed = roster.assign(&s0, EntityId::new(101), &slot_id("i1")).unwrap_err();
    assert!(matches!(placed.kind, ErrorKind::EntityNotPlaced { .. }));

    let unknown = roster.assign(&s0, EntityId::new(1), &slot_id("i1")).unwrap_err();
    assert!(matches!(unknown.kind, ErrorKind::EntityNotFound(_)));
}

#[test]
fn reorder_takes_target_position() {
    let roster = roster_with(&[101, 102], &[]);
    let s0 = set_id("s0");
    let i0 = slot_id("i0");
    let next = roster
        .reorder(&s0, &i0, EntityId::new(101), EntityId::new(102))
        .unwrap();
    assert_eq!(members(&next, "s0", "i0"), ids(&[102, 101]));

    let same = roster
        .reorder(&s0, &i0, EntityId::new(101), EntityId::new(101))
        .unwrap();
    assert_eq!(same, roster);
}

#[test]
fn release_restores_canonical_pool_position() {
    let roster = roster_with(&[101], &[]);
    let s0 = set_id("s0");
    let next = roster.release(&s0, &slot_id("i0"), EntityId::new(101)).unwrap();
    assert!(members(&next, "s0", "i0").is_empty());
    assert_eq!(next.pool(&s0).unwrap().first(), Some(&EntityId::new(101)));

    let again = next.release(&s0, &slot_id("i0"), EntityId::new(101));
    assert!(again.unwrap_err().is_rejection());
}

#[test]
fn transfer_appends_to_destination() {
    let roster = roster_with(&[101, 102], &[103]);
    let s0 = set_id("s0");
    let next = roster
        .transfer(&s0, &slot_id("i0"), &slot_id("i1"), EntityId::new(101))
        .unwrap();
    assert_eq!(members(&next, "s0", "i0"), ids(&[102]));
    assert_eq!(members(&next, "s0", "i1"), ids(&[103, 101]));

    let missing = roster.transfer(&s0, &slot_id("i1"), &slot_id("i0"), EntityId::new(101));
    assert!(missing.unwrap_err().is_rejection());
}
