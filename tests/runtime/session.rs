//! Integration tests for sessions
//!
//! Tests loading, auto-persist through a file store, and the preview
//! lifecycle of share links.

use counterpick_engine::Container;
use counterpick_foundation::EntityId;
use counterpick_runtime::{
    AutoConfirm, FileStore, KeyValueStore, MemoryStore, Mode, Session, SessionConfig,
};
use counterpick_storage::{SetId, SlotId};

use crate::init_logging;

const KEY: &str = "pokemon-unite-counter-pick";

fn set(id: &str) -> SetId {
    SetId::new(id).unwrap()
}

fn slot(id: &str) -> SlotId {
    SlotId::new(id).unwrap()
}

fn members<S: KeyValueStore>(
    session: &Session<S>,
    set_index: usize,
    slot_index: usize,
) -> Vec<u32> {
    session
        .roster()
        .sets()
        .get(set_index)
        .unwrap()
        .slots()
        .get(slot_index)
        .unwrap()
        .members()
        .iter()
        .map(|id| id.get())
        .collect()
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn edits_survive_a_restart() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();

    let mut session = Session::start(
        FileStore::open(dir.path()).unwrap(),
        SessionConfig::default(),
        None,
    );
    assert!(session.drag("pool-s0-101", Some("drop:s0:s0_i1")));
    assert!(session.rename_set(&set("s0"), "Mid lane").unwrap());
    drop(session);

    let restarted = Session::start(
        FileStore::open(dir.path()).unwrap(),
        SessionConfig::default(),
        None,
    );
    let set = restarted.roster().sets().first().unwrap();
    assert_eq!(set.name(), Some("Mid lane"));
    assert_eq!(set.slots().first().unwrap().id().as_str(), "s0_i0");
    assert_eq!(members(&restarted, 0, 0), vec![101]);
}

#[test]
fn renamed_empty_set_survives_a_restart() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();

    let mut session = Session::start(
        FileStore::open(dir.path()).unwrap(),
        SessionConfig::default(),
        None,
    );
    assert!(session.rename_set(&set("s0"), "Mine").unwrap());
    let saved = session.store().get(KEY).unwrap();
    assert_eq!(saved.as_deref(), Some(r#"[{"n":"Mine","i":[{"p":[]},{"p":[]}]}]"#));
    drop(session);

    let restarted = Session::start(
        FileStore::open(dir.path()).unwrap(),
        SessionConfig::default(),
        None,
    );
    assert_eq!(restarted.roster().len(), 1);
    assert_eq!(restarted.roster().sets().first().unwrap().name(), Some("Mine"));
}

#[test]
fn untouched_default_set_is_not_written() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::start(
        FileStore::open(dir.path()).unwrap(),
        SessionConfig::default(),
        None,
    );
    let added = session.add_set();
    assert_eq!(added.as_str(), "s3");
    assert_eq!(session.store().get(KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn custom_storage_key() {
    init_logging();
    let config = SessionConfig::default().with_storage_key("scrims");
    let store = MemoryStore::new().with_entry("scrims", r#"[{"i":[{"p":[102]}]}]"#);
    let session = Session::start(store, config, None);
    assert_eq!(members(&session, 0, 0), vec![102]);
}

#[test]
fn corrupt_saved_roster_starts_fresh() {
    init_logging();
    let store = MemoryStore::new().with_entry(KEY, "{not json");
    let session = Session::start(store, SessionConfig::default(), None);
    assert_eq!(session.mode(), Mode::Editing);
    assert_eq!(session.roster().len(), 1);
    assert!(members(&session, 0, 0).is_empty());
}

// =============================================================================
// Preview
// =============================================================================

fn shared_link() -> String {
    let store = MemoryStore::new().with_entry(KEY, r#"[{"n":"Shared","i":[{"p":[103]}]}]"#);
    let session = Session::start(store, SessionConfig::default(), None);
    session.share_url().unwrap()
}

#[test]
fn opening_a_link_previews_without_saving() {
    init_logging();
    let link = shared_link();
    let store = MemoryStore::new().with_entry(KEY, r#"[{"i":[{"p":[101]}]}]"#);
    let mut session = Session::start(store, SessionConfig::default(), Some(&link));

    assert!(session.is_previewing());
    assert!(session.view().previewing);
    assert_eq!(session.location(), Some("http://localhost/"));
    assert_eq!(members(&session, 0, 0), vec![103]);

    assert!(session.drag("s0-s0_i0-103", None));
    assert!(members(&session, 0, 0).is_empty());
    let saved = session.store().get(KEY).unwrap();
    assert_eq!(saved.as_deref(), Some(r#"[{"i":[{"p":[101]}]}]"#));
}

#[test]
fn adopting_a_preview_overwrites_saved_roster() {
    init_logging();
    let link = shared_link();
    let store = MemoryStore::new().with_entry(KEY, r#"[{"i":[{"p":[101]}]}]"#);
    let mut session = Session::start(store, SessionConfig::default(), Some(&link));

    assert!(!session.adopt_preview(&mut AutoConfirm(false)));
    assert!(session.is_previewing());

    assert!(session.adopt_preview(&mut AutoConfirm(true)));
    assert_eq!(session.mode(), Mode::Editing);
    let saved = session.store().get(KEY).unwrap().unwrap();
    assert!(saved.contains("Shared"));
    assert!(saved.contains("103"));

    // Edits persist again once adopted.
    assert!(session.drag("pool-s0-104", Some("drop:s0:s0_i0")));
    let saved = session.store().get(KEY).unwrap().unwrap();
    assert!(saved.contains("104"));
}

#[test]
fn keeping_own_data_discards_the_preview() {
    init_logging();
    let link = shared_link();
    let store = MemoryStore::new().with_entry(KEY, r#"[{"i":[{"p":[101]}]}]"#);
    let mut session = Session::start(store, SessionConfig::default(), Some(&link));

    assert!(session.keep_own_data());
    assert!(!session.is_previewing());
    assert_eq!(members(&session, 0, 0), vec![101]);
    assert!(!session.keep_own_data());
}

#[test]
fn reset_leaves_preview_and_clears_storage() {
    init_logging();
    let link = shared_link();
    let store = MemoryStore::new().with_entry(KEY, r#"[{"i":[{"p":[101]}]}]"#);
    let mut session = Session::start(store, SessionConfig::default(), Some(&link));

    assert!(session.reset(&mut AutoConfirm(true)));
    assert_eq!(session.mode(), Mode::Editing);
    assert!(session.roster().is_empty());
    assert_eq!(session.store().get(KEY).unwrap(), None);
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn click_to_place_then_return_to_pool() {
    init_logging();
    let mut session = Session::start(MemoryStore::new(), SessionConfig::default(), None);
    let s0 = set("s0");

    session.on_entity_click(&s0, EntityId::new(105));
    assert!(session.view().selection.is_some());
    assert!(session.on_container_click(&s0, &Container::Slot(slot("s0_i2"))));
    assert_eq!(members(&session, 0, 1), vec![105]);
    assert!(session.selection().is_none());

    session.on_entity_click(&s0, EntityId::new(105));
    assert!(session.on_container_click(&s0, &Container::Pool));
    assert!(members(&session, 0, 1).is_empty());
}
