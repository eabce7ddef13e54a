//! Property tests across the persisted and transport forms
//!
//! Any roster reachable through edits and moves survives being saved,
//! shared, and opened again.

use std::sync::Arc;

use counterpick_foundation::{Catalog, EntityId};
use counterpick_runtime::{codec, transport};
use counterpick_storage::{Direction, Labels, Roster};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Edit {
    AddSet,
    AddSlot(usize, usize),
    Assign(usize, usize, u32),
    Rename(usize, String),
    Relabel(usize, usize, String),
    MoveSet(usize, bool),
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        Just(Edit::AddSet),
        (0usize..4, 0usize..4).prop_map(|(s, i)| Edit::AddSlot(s, i)),
        (0usize..4, 0usize..4, 101u32..125).prop_map(|(s, i, e)| Edit::Assign(s, i, e)),
        (0usize..4, "[a-z]{0,8}").prop_map(|(s, n)| Edit::Rename(s, n)),
        (0usize..4, 0usize..4, "[a-zA-Z]{1,6}").prop_map(|(s, i, l)| Edit::Relabel(s, i, l)),
        (0usize..4, any::<bool>()).prop_map(|(s, up)| Edit::MoveSet(s, up)),
    ]
}

fn apply(roster: &Roster, edit: &Edit) -> Option<Roster> {
    let set_at = |index: usize| roster.sets().get(index % roster.len().max(1));
    match edit {
        Edit::AddSet => Some(roster.add_set().0),
        Edit::AddSlot(s, i) => {
            let set = set_at(*s)?;
            let after = set.slots().get(i % set.slots().len())?.id().clone();
            roster.add_slot_after(set.id(), &after, "").ok().map(|(r, _)| r)
        }
        Edit::Assign(s, i, e) => {
            let set = set_at(*s)?;
            let slot = set.slots().get(i % set.slots().len())?.id().clone();
            roster.assign(set.id(), EntityId::new(*e), &slot).ok()
        }
        Edit::Rename(s, name) => roster.rename_set(set_at(*s)?.id(), name).ok(),
        Edit::Relabel(s, i, label) => {
            let set = set_at(*s)?;
            let slot = set.slots().get(i % set.slots().len())?.id().clone();
            roster.rename_slot(set.id(), &slot, label).ok()
        }
        Edit::MoveSet(s, up) => {
            let direction = if *up { Direction::Up } else { Direction::Down };
            roster.move_set(set_at(*s)?.id(), direction).ok()
        }
    }
}

fn build(edits: &[Edit]) -> Roster {
    let start = Roster::with_default_set(Arc::new(Catalog::builtin()), Arc::new(Labels::default()));
    edits
        .iter()
        .fold(start, |roster, edit| apply(&roster, edit).unwrap_or(roster))
}

proptest! {
    #[test]
    fn saved_form_is_stable(edits in prop::collection::vec(edit(), 0..30)) {
        let roster = build(&edits);
        let json = codec::to_json(&roster).unwrap();
        let loaded = codec::from_json(&json, roster.catalog().clone(), roster.labels().clone()).unwrap();

        prop_assert!(loaded.check_invariants().is_ok());
        prop_assert_eq!(codec::encode(&loaded), codec::encode(&roster));
        prop_assert_eq!(codec::to_json(&loaded).unwrap(), json);
    }

    #[test]
    fn shared_form_matches_saved_form(edits in prop::collection::vec(edit(), 0..30)) {
        let roster = build(&edits);
        let json = codec::to_json(&roster).unwrap();
        let payload = transport::encode(&json).unwrap();
        prop_assert_eq!(transport::decode(&payload).unwrap(), json);
    }

    #[test]
    fn pools_survive_reload(edits in prop::collection::vec(edit(), 0..30)) {
        let roster = build(&edits);
        let json = codec::to_json(&roster).unwrap();
        let loaded = codec::from_json(&json, roster.catalog().clone(), roster.labels().clone()).unwrap();

        let kept: Vec<_> = roster
            .sets()
            .iter()
            .filter(|set| !set.is_pristine(roster.labels()))
            .collect();
        prop_assert_eq!(kept.len(), loaded.len());
        for (before, after) in kept.iter().zip(loaded.sets().iter()) {
            prop_assert_eq!(before.pool(roster.catalog()), after.pool(loaded.catalog()));
        }
    }
}
