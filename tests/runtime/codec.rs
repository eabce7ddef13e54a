//! Integration tests for the persisted form
//!
//! Tests the current short-key form and every legacy shape.

use std::sync::Arc;

use counterpick_foundation::{Catalog, EntityId, ErrorKind};
use counterpick_runtime::codec;
use counterpick_storage::{Labels, Roster};

fn load(text: &str) -> Roster {
    codec::from_json(text, Arc::new(Catalog::builtin()), Arc::new(Labels::default())).unwrap()
}

fn members(roster: &Roster, set: usize, slot: usize) -> Vec<u32> {
    roster
        .sets()
        .get(set)
        .unwrap()
        .slots()
        .get(slot)
        .unwrap()
        .members()
        .iter()
        .map(|id| id.get())
        .collect()
}

// =============================================================================
// Current Form
// =============================================================================

#[test]
fn minimal_document_uses_default_labels() {
    let roster = load(r#"[{"i":[{"p":[101]}]}]"#);
    let set = roster.sets().first().unwrap();
    assert_eq!(set.slots().len(), 1);
    assert_eq!(set.slots().first().unwrap().label(), "ターゲット");
    assert_eq!(members(&roster, 0, 0), vec![101]);

    let pool = roster.pool(set.id()).unwrap();
    assert_eq!(pool.len(), 86);
    assert!(!pool.contains(&EntityId::new(101)));
}

#[test]
fn ids_are_regenerated_from_position() {
    let roster = load(r#"[{"i":[{"p":[]},{"p":[]}]},{"n":"Two","i":[{"p":[102]}]}]"#);
    let ids: Vec<String> = roster
        .sets()
        .iter()
        .flat_map(|s| s.slots().iter().map(|slot| slot.id().to_string()).collect::<Vec<_>>())
        .collect();
    assert_eq!(ids, vec!["s0_i0", "s0_i1", "s1_i0"]);
    assert_eq!(roster.sets().get(1).unwrap().name(), Some("Two"));
}

#[test]
fn pristine_sets_are_not_written() {
    let roster = load(r#"[{"i":[{"p":[]},{"p":[]}]},{"i":[{"n":"Bans","p":[]}]}]"#);
    assert_eq!(roster.len(), 2);
    assert_eq!(codec::to_json(&roster).unwrap(), r#"[{"i":[{"n":"Bans","p":[]}]}]"#);
}

#[test]
fn default_labels_are_omitted() {
    let roster = load(r#"[{"n":" Mid ","i":[{"n":"ターゲット","p":[101]},{"n":"Checks","p":[102]}]}]"#);
    assert_eq!(
        codec::to_json(&roster).unwrap(),
        r#"[{"n":"Mid","i":[{"p":[101]},{"n":"Checks","p":[102]}]}]"#
    );
}

// =============================================================================
// Legacy Forms
// =============================================================================

#[test]
fn long_keys_and_english_names() {
    let roster = load(r#"[{"name":"Old","items":[{"name":"Row","pokemons":["pikachu","cinderace"]}]}]"#);
    let set = roster.sets().first().unwrap();
    assert_eq!(set.name(), Some("Old"));
    assert_eq!(set.slots().first().unwrap().label(), "Row");
    assert_eq!(members(&roster, 0, 0), vec![101, 102]);
}

#[test]
fn object_members_and_numeric_strings() {
    let roster = load(r#"[{"i":[{"p":[{"id":101},{"id":"cinderace"},"103",{"name":"no id"}]}]}]"#);
    assert_eq!(members(&roster, 0, 0), vec![101, 102, 103]);
}

#[test]
fn unresolvable_and_repeated_members_are_dropped() {
    let roster = load(r#"[{"i":[{"p":[101,"missingno",9999,-1,1.5,null,101]},{"p":[101,102]}]}]"#);
    assert_eq!(members(&roster, 0, 0), vec![101]);
    assert_eq!(members(&roster, 0, 1), vec![102]);
    roster.check_invariants().unwrap();
}

#[test]
fn malformed_entries_are_skipped() {
    let roster = load(r#"[42, "x", {"i":"nope"}, {"i":[7, {"p":[101]}]}]"#);
    assert_eq!(roster.len(), 2);
    let first = roster.sets().first().unwrap();
    assert_eq!(first.slots().len(), 2);
    assert!(first.is_pristine(roster.labels()));
    assert_eq!(members(&roster, 1, 0), vec![101]);
}

// =============================================================================
// Whole-document Failures
// =============================================================================

#[test]
fn non_arrays_and_invalid_json_are_decode_errors() {
    let catalog = Arc::new(Catalog::builtin());
    let labels = Arc::new(Labels::default());
    for text in ["null", "7", "not json", ""] {
        let err = codec::from_json(text, catalog.clone(), labels.clone()).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Decode(_)), "{text}");
    }
    assert!(load("[]").is_empty());
}

#[test]
fn bare_set_object_is_one_set() {
    let roster = load(r#"{"i":[{"p":[101]}]}"#);
    assert_eq!(roster.len(), 1);
    assert_eq!(members(&roster, 0, 0), vec![101]);

    let empty = load("{}");
    assert_eq!(empty.len(), 1);
    assert!(empty.sets().first().unwrap().is_pristine(empty.labels()));
}

#[test]
fn named_empty_set_is_written() {
    let roster = load(r#"[{"n":"Bans","i":[{"p":[]},{"p":[]}]}]"#);
    let json = codec::to_json(&roster).unwrap();
    assert_eq!(json, r#"[{"n":"Bans","i":[{"p":[]},{"p":[]}]}]"#);
    assert_eq!(load(&json).sets().first().unwrap().name(), Some("Bans"));
}
