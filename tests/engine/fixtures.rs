//! Shared roster builders.

use std::sync::Arc;

use counterpick_foundation::{Catalog, EntityId};
use counterpick_storage::{Labels, Roster, Set, SetId, Slot, SlotId};

pub fn set_id(id: &str) -> SetId {
    SetId::new(id).unwrap()
}

pub fn slot_id(id: &str) -> SlotId {
    SlotId::new(id).unwrap()
}

pub fn ids(raw: &[u32]) -> Vec<EntityId> {
    raw.iter().copied().map(EntityId::new).collect()
}

fn set(id: &str, i0: &[u32], i1: &[u32]) -> Set {
    Set::new(
        set_id(id),
        None,
        vec![
            Slot::new(slot_id("i0"), "ターゲット").with_members(ids(i0)),
            Slot::new(slot_id("i1"), "有利").with_members(ids(i1)),
        ],
    )
    .unwrap()
}

/// Set `s0` with slots `i0`/`i1`, plus an empty set `s1` with the same slot ids.
pub fn roster_with(i0: &[u32], i1: &[u32]) -> Roster {
    Roster::from_sets(
        Arc::new(Catalog::builtin()),
        Arc::new(Labels::default()),
        vec![set("s0", i0, i1), set("s1", &[], &[])],
    )
    .unwrap()
}

pub fn members(roster: &Roster, set: &str, slot: &str) -> Vec<EntityId> {
    roster
        .set(&set_id(set))
        .unwrap()
        .slot(&slot_id(slot))
        .unwrap()
        .members()
        .iter()
        .copied()
        .collect()
}

pub fn pool(roster: &Roster, set: &str) -> Vec<EntityId> {
    roster.pool(&set_id(set)).unwrap()
}
