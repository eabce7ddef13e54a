//! The immutable entity catalog.
//!
//! The catalog is the single source of canonical ordering: every pool is the
//! catalog filtered to unplaced entities, in catalog order. Lookups by id and
//! by legacy name are O(1).

use std::collections::{HashMap, HashSet};

use crate::builtin::ENTITIES;
use crate::entity::{Entity, EntityId};
use crate::error::{Error, ErrorKind, Result};

/// Ordered, never-mutated list of entities.
#[derive(Clone, Debug)]
pub struct Catalog {
    entities: Vec<Entity>,
    positions: HashMap<EntityId, usize>,
    legacy_names: HashMap<String, EntityId>,
}

impl Catalog {
    /// Builds a catalog from entities in canonical order.
    ///
    /// # Errors
    ///
    /// Returns an error if two entries share an id.
    pub fn new(entities: Vec<Entity>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entities.len());
        if let Some(duplicate) = entities.iter().find(|e| !seen.insert(e.id)) {
            return Err(Error::new(ErrorKind::DuplicateEntity(duplicate.id)));
        }
        Ok(Self::indexed(entities))
    }

    /// Returns the built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::indexed(
            ENTITIES
                .iter()
                .map(|&(id, name, legacy, category, image)| {
                    Entity::new(id, name, legacy, category, image)
                })
                .collect(),
        )
    }

    /// Builds the lookup indices. A repeated legacy name resolves to its
    /// first entity.
    fn indexed(entities: Vec<Entity>) -> Self {
        let mut positions = HashMap::with_capacity(entities.len());
        let mut legacy_names = HashMap::with_capacity(entities.len());
        for (position, entity) in entities.iter().enumerate() {
            positions.entry(entity.id).or_insert(position);
            legacy_names
                .entry(entity.legacy_name.clone())
                .or_insert(entity.id);
        }
        Self {
            entities,
            positions,
            legacy_names,
        }
    }

    /// Returns every entity in canonical order.
    #[must_use]
    pub fn all(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the catalog has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates entity ids in canonical order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().map(|e| e.id)
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.positions.get(&id).map(|&i| &self.entities[i])
    }

    /// Returns true if the id is part of the catalog.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Returns the canonical position of an entity.
    #[must_use]
    pub fn position(&self, id: EntityId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Resolves an English key from the oldest persisted format.
    #[must_use]
    pub fn find_by_legacy_name(&self, name: &str) -> Option<&Entity> {
        self.legacy_names.get(name).and_then(|&id| self.get(id))
    }

    /// Returns catalog ids not matched by `placed`, in canonical order.
    pub fn complement<F>(&self, mut placed: F) -> Vec<EntityId>
    where
        F: FnMut(EntityId) -> bool,
    {
        self.ids().filter(|&id| !placed(id)).collect()
    }

    /// Sorts ids by canonical position; unknown ids go last, by raw value.
    pub fn sort_canonical(&self, ids: &mut [EntityId]) {
        ids.sort_by_key(|&id| (self.position(id).unwrap_or(usize::MAX), id));
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
