//! Integration tests for the entity catalog
//!
//! Tests canonical order, lookups, and legacy-name resolution.

use counterpick_foundation::{Catalog, Category, Entity, EntityId, ErrorKind};

// =============================================================================
// Built-in Catalog
// =============================================================================

#[test]
fn builtin_catalog_is_ordered_and_unique() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 87);
    assert_eq!(catalog.all()[0].id, EntityId::new(101));

    let ids: Vec<EntityId> = catalog.ids().collect();
    for (position, id) in ids.iter().enumerate() {
        assert_eq!(catalog.position(*id), Some(position));
    }
}

#[test]
fn builtin_lookup_by_id_and_legacy_name() {
    let catalog = Catalog::builtin();
    let pikachu = catalog.get(EntityId::new(101)).unwrap();
    assert_eq!(pikachu.name, "ピカチュウ");
    assert_eq!(pikachu.category, Category::Attacker);

    assert_eq!(
        catalog.find_by_legacy_name("pikachu").map(|e| e.id),
        Some(EntityId::new(101))
    );
    assert!(catalog.find_by_legacy_name("missingno").is_none());
    assert!(!catalog.contains(EntityId::new(9999)));
}

// =============================================================================
// Derived Views
// =============================================================================

#[test]
fn complement_keeps_canonical_order() {
    let catalog = Catalog::builtin();
    let placed = [EntityId::new(102), EntityId::new(101)];
    let pool = catalog.complement(|id| placed.contains(&id));

    assert_eq!(pool.len(), catalog.len() - 2);
    assert_eq!(pool[0], EntityId::new(103));
    assert!(pool.windows(2).all(|w| catalog.position(w[0]) < catalog.position(w[1])));
}

#[test]
fn sort_canonical_puts_unknown_ids_last() {
    let catalog = Catalog::builtin();
    let mut ids = vec![EntityId::new(9000), EntityId::new(103), EntityId::new(101)];
    catalog.sort_canonical(&mut ids);
    assert_eq!(
        ids,
        vec![EntityId::new(101), EntityId::new(103), EntityId::new(9000)]
    );
}

// =============================================================================
// Custom Catalogs
// =============================================================================

#[test]
fn custom_catalog_rejects_duplicate_ids() {
    let entities = vec![
        Entity::new(1, "One", "one", Category::Support, "/1.png"),
        Entity::new(1, "Uno", "uno", Category::Defender, "/1b.png"),
    ];
    let err = Catalog::new(entities).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateEntity(id) if id == EntityId::new(1)));
}

#[test]
fn custom_catalog_keeps_given_order() {
    let catalog = Catalog::new(vec![
        Entity::new(3, "Three", "three", Category::Speedster, "/3.png"),
        Entity::new(1, "One", "one", Category::AllRounder, "/1.png"),
    ])
    .unwrap();
    assert_eq!(catalog.position(EntityId::new(3)), Some(0));
    assert_eq!(catalog.find_by_legacy_name("one").unwrap().name, "One");
}
