//! Integration tests for key-value stores
//!
//! Tests the in-memory and directory-backed stores behind one trait.

use counterpick_foundation::ErrorKind;
use counterpick_runtime::{FileStore, KeyValueStore, MemoryStore};

const KEY: &str = "pokemon-unite-counter-pick";

fn exercise(store: &mut dyn KeyValueStore) {
    assert_eq!(store.get(KEY).unwrap(), None);
    store.set(KEY, "[1]").unwrap();
    store.set(KEY, "[2]").unwrap();
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some("[2]"));
    store.remove(KEY).unwrap();
    store.remove(KEY).unwrap();
    assert_eq!(store.get(KEY).unwrap(), None);
}

#[test]
fn memory_store_contract() {
    exercise(&mut MemoryStore::new());
}

#[test]
fn file_store_contract() {
    let dir = tempfile::tempdir().unwrap();
    exercise(&mut FileStore::open(dir.path()).unwrap());
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    FileStore::open(&nested).unwrap().set(KEY, "[]").unwrap();

    let reopened = FileStore::open(&nested).unwrap();
    assert_eq!(reopened.get(KEY).unwrap().as_deref(), Some("[]"));
    assert!(nested.join(format!("{KEY}.json")).exists());
    assert!(!nested.join(format!("{KEY}.json.tmp")).exists());
}

#[test]
fn file_store_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    for key in ["", "../escape", "a/b", ".hidden"] {
        let err = store.set(key, "x").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Storage(_)), "{key}");
    }
}

#[test]
fn boxed_stores_delegate() {
    let mut boxed: Box<dyn KeyValueStore> = Box::new(MemoryStore::new().with_entry(KEY, "[]"));
    assert_eq!(boxed.get(KEY).unwrap().as_deref(), Some("[]"));
    exercise_boxed(&mut boxed);
}

fn exercise_boxed<S: KeyValueStore>(store: &mut S) {
    store.remove(KEY).unwrap();
    assert_eq!(store.get(KEY).unwrap(), None);
}
