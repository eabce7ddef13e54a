//! Roster state management with immutable snapshots.
//!
//! The `Roster` is the authoritative set/slot repository. It uses persistent
//! data structures for O(1) cloning and structural sharing; every operation
//! returns a new `Roster` and leaves the receiver untouched.

use std::collections::HashSet;
use std::sync::Arc;

use counterpick_foundation::{Catalog, EntityId, Error, ErrorKind, PVec, Result};

use crate::ids::{SetId, SlotId};
use crate::labels::Labels;
use crate::set::Set;
use crate::slot::Slot;

/// Direction for moving a set or slot one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards index 0.
    Up,
    /// Towards the end.
    Down,
}

impl Direction {
    /// Returns the neighbouring index, or `None` at the boundary.
    #[must_use]
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Self::Up => index.checked_sub(1),
            Self::Down => (index + 1 < len).then_some(index + 1),
        }
    }
}

/// Immutable snapshot of every set.
///
/// Clone is O(1) due to structural sharing.
#[derive(Clone, Debug)]
pub struct Roster {
    /// Sets in display order.
    sets: PVec<Set>,
    /// Shared entity catalog.
    catalog: Arc<Catalog>,
    /// Positional default names.
    labels: Arc<Labels>,
    /// Next candidate for generated ids.
    serial: usize,
}

impl PartialEq for Roster {
    fn eq(&self, other: &Self) -> bool {
        self.sets == other.sets
    }
}

impl Eq for Roster {}

impl Roster {
    /// Creates a roster with no sets.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, labels: Arc<Labels>) -> Self {
        Self {
            sets: PVec::new(),
            catalog,
            labels,
            serial: 0,
        }
    }

    /// Creates a roster holding a single empty set.
    #[must_use]
    pub fn with_default_set(catalog: Arc<Catalog>, labels: Arc<Labels>) -> Self {
        Self::new(catalog, labels).add_set().0
    }

    /// Creates a roster from already-built sets.
    ///
    /// # Errors
    ///
    /// Returns an error if two sets share an id.
    pub fn from_sets(catalog: Arc<Catalog>, labels: Arc<Labels>, sets: Vec<Set>) -> Result<Self> {
        let mut seen = HashSet::new();
        for set in &sets {
            if !seen.insert(set.id().clone()) {
                return Err(Error::new(ErrorKind::DuplicateIdentifier(
                    set.id().to_string(),
                )));
            }
        }
        let serial = sets.len();
        Ok(Self {
            sets: PVec::from(sets),
            catalog,
            labels,
            serial,
        })
    }

    /// Returns the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Returns the label defaults.
    #[must_use]
    pub fn labels(&self) -> &Arc<Labels> {
        &self.labels
    }

    /// Returns the sets in order.
    #[must_use]
    pub fn sets(&self) -> &PVec<Set> {
        &self.sets
    }

    /// Returns the number of sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if there are no sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Looks up a set by id.
    #[must_use]
    pub fn set(&self, id: &SetId) -> Option<&Set> {
        self.sets.iter().find(|s| s.id() == id)
    }

    /// Returns the index of a set.
    #[must_use]
    pub fn set_index(&self, id: &SetId) -> Option<usize> {
        self.sets.position(|s| s.id() == id)
    }

    /// Returns the derived pool of a set.
    ///
    /// # Errors
    ///
    /// Returns an error if the set does not exist.
    pub fn pool(&self, id: &SetId) -> Result<Vec<EntityId>> {
        self.set(id)
            .map(|s| s.pool(&self.catalog))
            .ok_or_else(|| Error::set_not_found(id.as_str()))
    }

    /// Verifies every structural invariant of the snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for set in &self.sets {
            if !ids.insert(set.id().clone()) {
                return Err(Error::new(ErrorKind::DuplicateIdentifier(
                    set.id().to_string(),
                )));
            }
            Set::new(
                set.id().clone(),
                set.name().map(str::to_string),
                set.slots().iter().cloned().collect(),
            )?;
        }
        Ok(())
    }

    // --- Set Operations ---

    /// Appends an empty set with the default slots.
    ///
    /// Returns a new Roster and the new set's id.
    #[must_use]
    pub fn add_set(&self) -> (Roster, SetId) {
        let mut serial = self.serial;
        let id = loop {
            let candidate = SetId::positional(serial);
            serial += 1;
            if self.set(&candidate).is_none() {
                break candidate;
            }
        };
        let set = Set::with_default_slots(id.clone(), &self.labels, serial);
        serial += set.slots().len();
        let roster = Roster {
            sets: self.sets.push_back(set),
            serial,
            ..self.clone()
        };
        (roster, id)
    }

    /// Removes a set.
    ///
    /// # Errors
    ///
    /// Returns an error if the set does not exist.
    pub fn delete_set(&self, id: &SetId) -> Result<Roster> {
        let index = self.require_set_index(id)?;
        let (sets, _) = self
            .sets
            .remove(index)
            .ok_or_else(|| Error::set_not_found(id.as_str()))?;
        Ok(Roster {
            sets,
            ..self.clone()
        })
    }

    /// Swaps a set with its neighbour; a no-op at the boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the set does not exist.
    pub fn move_set(&self, id: &SetId, direction: Direction) -> Result<Roster> {
        let index = self.require_set_index(id)?;
        let Some(target) = direction.step(index, self.sets.len()) else {
            return Ok(self.clone());
        };
        let sets = self
            .sets
            .reposition(index, target)
            .ok_or_else(|| Error::set_not_found(id.as_str()))?;
        Ok(Roster {
            sets,
            ..self.clone()
        })
    }

    /// Renames a set. A blank name clears it back to the positional default.
    ///
    /// # Errors
    ///
    /// Returns an error if the set does not exist.
    pub fn rename_set(&self, id: &SetId, name: &str) -> Result<Roster> {
        let name = name.trim();
        let name = (!name.is_empty()).then(|| name.to_string());
        self.map_set(id, |set| Ok(set.renamed(name)))
    }

    // --- Slot Operations ---

    /// Relabels a slot. A blank label is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the set or slot does not exist.
    pub fn rename_slot(&self, set: &SetId, slot: &SlotId, label: &str) -> Result<Roster> {
        let label = label.trim();
        self.map_set(set, |s| {
            s.map_slot(slot, |current| {
                if label.is_empty() {
                    Ok(current.clone())
                } else {
                    Ok(current.relabeled(label.to_string()))
                }
            })
        })
    }

    /// Inserts an empty slot directly after `after`.
    ///
    /// A blank label falls back to the new-slot default.
    /// Returns a new Roster and the new slot's id.
    ///
    /// # Errors
    ///
    /// Returns an error if the set or anchor slot does not exist.
    pub fn add_slot_after(
        &self,
        set: &SetId,
        after: &SlotId,
        label: &str,
    ) -> Result<(Roster, SlotId)> {
        let current = self.require_set(set)?;
        let index = current
            .slot_index(after)
            .ok_or_else(|| Error::slot_not_found(set.as_str(), after.as_str()))?;

        let mut serial = self.serial;
        let id = loop {
            let candidate = SlotId::within(set, serial);
            serial += 1;
            if current.slot(&candidate).is_none() {
                break candidate;
            }
        };

        let label = match label.trim() {
            "" => self.labels.new_slot().to_string(),
            trimmed => trimmed.to_string(),
        };
        let slots = current
            .slots()
            .insert(index + 1, Slot::new(id.clone(), label))
            .ok_or_else(|| Error::slot_not_found(set.as_str(), after.as_str()))?;
        let roster = self.map_set(set, |s| Ok(s.with_slots(slots)))?;
        Ok((Roster { serial, ..roster }, id))
    }

    /// Removes a slot; its members fall back into the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the set or slot does not exist, or if it is the
    /// set's last slot.
    pub fn delete_slot(&self, set: &SetId, slot: &SlotId) -> Result<Roster> {
        self.map_set(set, |s| {
            let index = s
                .slot_index(slot)
                .ok_or_else(|| Error::slot_not_found(set.as_str(), slot.as_str()))?;
            if s.slots().len() <= 1 {
                return Err(Error::new(ErrorKind::LastSlot(set.to_string())));
            }
            let (slots, _) = s
                .slots()
                .remove(index)
                .ok_or_else(|| Error::slot_not_found(set.as_str(), slot.as_str()))?;
            Ok(s.with_slots(slots))
        })
    }

    /// Swaps a slot with its neighbour; a no-op at the boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the set or slot does not exist.
    pub fn move_slot(&self, set: &SetId, slot: &SlotId, direction: Direction) -> Result<Roster> {
        self.map_set(set, |s| {
            let index = s
                .slot_index(slot)
                .ok_or_else(|| Error::slot_not_found(set.as_str(), slot.as_str()))?;
            let Some(target) = direction.step(index, s.slots().len()) else {
                return Ok(s.clone());
            };
            let slots = s
                .slots()
                .reposition(index, target)
                .ok_or_else(|| Error::slot_not_found(set.as_str(), slot.as_str()))?;
            Ok(s.with_slots(slots))
        })
    }

    /// Drops every set.
    #[must_use]
    pub fn clear(&self) -> Roster {
        Roster {
            sets: PVec::new(),
            ..self.clone()
        }
    }

    // --- Move Primitives ---

    /// Moves a pooled entity to the end of a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the set or slot does not exist, the entity is not
    /// in the catalog, or it is already placed.
    pub fn assign(&self, set: &SetId, entity: EntityId, slot: &SlotId) -> Result<Roster> {
        if !self.catalog.contains(entity) {
            return Err(Error::entity_not_found(entity));
        }
        self.map_set(set, |s| {
            if s.is_placed(entity) {
                return Err(Error::entity_not_placed(entity, format!("pool of {set}")));
            }
            s.map_slot(slot, |dest| Ok(dest.appended(entity)))
        })
    }

    /// Moves an entity from one slot to the end of another in the same set.
    ///
    /// Moving to the slot it is already in changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the set or either slot does not exist, or the
    /// entity is not in `from`.
    pub fn transfer(
        &self,
        set: &SetId,
        from: &SlotId,
        to: &SlotId,
        entity: EntityId,
    ) -> Result<Roster> {
        self.map_set(set, |s| {
            let source = s
                .slot(from)
                .ok_or_else(|| Error::slot_not_found(set.as_str(), from.as_str()))?;
            if s.slot(to).is_none() {
                return Err(Error::slot_not_found(set.as_str(), to.as_str()));
            }
            if !source.contains(entity) {
                return Err(Error::entity_not_placed(entity, format!("slot {from}")));
            }
            if from == to {
                return Ok(s.clone());
            }
            s.map_slot(to, |dest| Ok(dest.appended(entity)))
                .map(|s| s.without_elsewhere(entity, to))
        })
    }

    /// Returns an entity from a slot to the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the set or slot does not exist, or the entity is
    /// not in the slot.
    pub fn release(&self, set: &SetId, slot: &SlotId, entity: EntityId) -> Result<Roster> {
        self.map_set(set, |s| {
            s.map_slot(slot, |current| {
                if current.contains(entity) {
                    Ok(current.without(entity))
                } else {
                    Err(Error::entity_not_placed(entity, format!("slot {slot}")))
                }
            })
        })
    }

    /// Moves `entity` to the position currently held by `over` within one slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the set or slot does not exist, or either entity is
    /// missing from the slot.
    pub fn reorder(
        &self,
        set: &SetId,
        slot: &SlotId,
        entity: EntityId,
        over: EntityId,
    ) -> Result<Roster> {
        self.map_set(set, |s| {
            s.map_slot(slot, |current| {
                current.reordered(entity, over).ok_or_else(|| {
                    let missing = if current.contains(entity) { over } else { entity };
                    Error::entity_not_placed(missing, format!("slot {slot}"))
                })
            })
        })
    }

    // --- Helpers ---

    fn require_set_index(&self, id: &SetId) -> Result<usize> {
        self.set_index(id)
            .ok_or_else(|| Error::set_not_found(id.as_str()))
    }

    fn require_set(&self, id: &SetId) -> Result<&Set> {
        self.set(id).ok_or_else(|| Error::set_not_found(id.as_str()))
    }

    fn map_set<F>(&self, id: &SetId, f: F) -> Result<Roster>
    where
        F: FnOnce(&Set) -> Result<Set>,
    {
        let index = self.require_set_index(id)?;
        let current = self
            .sets
            .get(index)
            .ok_or_else(|| Error::set_not_found(id.as_str()))?;
        let updated = f(current)?;
        let sets = self
            .sets
            .update(index, updated)
            .ok_or_else(|| Error::set_not_found(id.as_str()))?;
        Ok(Roster {
            sets,
            ..self.clone()
        })
    }
}
