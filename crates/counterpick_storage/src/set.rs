//! A named set of slots with a derived pool.
//!
//! There is no stored pool: the pool is always the catalog minus everything
//! placed in the set's slots, in catalog order.

use std::collections::HashSet;

use counterpick_foundation::{Catalog, EntityId, Error, ErrorKind, PVec, Result};

use crate::ids::{SetId, SlotId};
use crate::labels::Labels;
use crate::slot::Slot;

/// A named, ordered group of slots.
///
/// Invariants, checked by [`Set::new`]: at least one slot, unique slot ids,
/// and no entity placed in more than one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Set {
    id: SetId,
    name: Option<String>,
    slots: PVec<Slot>,
}

impl Set {
    /// Creates a set from slots.
    ///
    /// # Errors
    ///
    /// Returns an error if `slots` is empty, two slots share an id, or an
    /// entity appears in more than one slot.
    pub fn new(id: SetId, name: Option<String>, slots: Vec<Slot>) -> Result<Self> {
        if slots.is_empty() {
            return Err(Error::new(ErrorKind::EmptySet(id.to_string())));
        }
        let mut slot_ids = HashSet::new();
        let mut placed = HashSet::new();
        for slot in &slots {
            if !slot_ids.insert(slot.id().clone()) {
                return Err(Error::new(ErrorKind::DuplicateIdentifier(
                    slot.id().to_string(),
                )));
            }
            for &entity in slot.members() {
                if !placed.insert(entity) {
                    return Err(Error::new(ErrorKind::DuplicateEntity(entity)));
                }
            }
        }
        Ok(Self {
            id,
            name,
            slots: PVec::from(slots),
        })
    }

    /// Creates an empty set with the default slots.
    ///
    /// Slot ids are numbered from `first_serial`.
    #[must_use]
    pub fn with_default_slots(id: SetId, labels: &Labels, first_serial: usize) -> Self {
        let slots = (0..labels.initial_slot_count())
            .map(|index| {
                Slot::new(
                    SlotId::within(&id, first_serial + index),
                    labels.slot_default(index),
                )
            })
            .collect::<Vec<_>>();
        Self {
            id,
            name: None,
            slots: PVec::from(slots),
        }
    }

    /// Returns the set id.
    #[must_use]
    pub fn id(&self) -> &SetId {
        &self.id
    }

    /// Returns the user-assigned name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the name to show for this set at `index`.
    #[must_use]
    pub fn display_name(&self, index: usize, labels: &Labels) -> String {
        self.name.clone().unwrap_or_else(|| labels.set_name(index))
    }

    /// Returns the slots in order.
    #[must_use]
    pub fn slots(&self) -> &PVec<Slot> {
        &self.slots
    }

    /// Looks up a slot by id.
    #[must_use]
    pub fn slot(&self, id: &SlotId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id() == id)
    }

    /// Returns the index of a slot.
    #[must_use]
    pub fn slot_index(&self, id: &SlotId) -> Option<usize> {
        self.slots.position(|s| s.id() == id)
    }

    /// Returns the slot holding `entity`, if it is placed.
    #[must_use]
    pub fn slot_of(&self, entity: EntityId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.contains(entity))
    }

    /// Returns true if `entity` is in any slot.
    #[must_use]
    pub fn is_placed(&self, entity: EntityId) -> bool {
        self.slot_of(entity).is_some()
    }

    /// Returns the unplaced catalog entities, in catalog order.
    #[must_use]
    pub fn pool(&self, catalog: &Catalog) -> Vec<EntityId> {
        let placed: HashSet<EntityId> = self
            .slots
            .iter()
            .flat_map(|s| s.members().iter().copied())
            .collect();
        catalog.complement(|id| placed.contains(&id))
    }

    /// Returns true if the set is unnamed and every slot is empty and carries
    /// its positional default label.
    ///
    /// Pristine sets are kept in memory but left out of the persisted form.
    #[must_use]
    pub fn is_pristine(&self, labels: &Labels) -> bool {
        self.name.is_none()
            && self.slots.iter().enumerate().all(|(index, slot)| {
                slot.is_empty() && labels.is_default_slot_label(index, slot.label())
            })
    }

    pub(crate) fn renamed(&self, name: Option<String>) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    pub(crate) fn with_slots(&self, slots: PVec<Slot>) -> Self {
        Self {
            slots,
            ..self.clone()
        }
    }

    /// Replaces the slot with id `slot` by `f(slot)`.
    pub(crate) fn map_slot<F>(&self, slot: &SlotId, f: F) -> Result<Self>
    where
        F: FnOnce(&Slot) -> Result<Slot>,
    {
        let index = self
            .slot_index(slot)
            .ok_or_else(|| Error::slot_not_found(self.id.as_str(), slot.as_str()))?;
        let current = self
            .slots
            .get(index)
            .ok_or_else(|| Error::slot_not_found(self.id.as_str(), slot.as_str()))?;
        let updated = f(current)?;
        let slots = self
            .slots
            .update(index, updated)
            .ok_or_else(|| Error::slot_not_found(self.id.as_str(), slot.as_str()))?;
        Ok(self.with_slots(slots))
    }

    /// Removes `entity` from every slot except `keep`.
    pub(crate) fn without_elsewhere(&self, entity: EntityId, keep: &SlotId) -> Self {
        let slots = self
            .slots
            .iter()
            .map(|s| {
                if s.id() == keep || !s.contains(entity) {
                    s.clone()
                } else {
                    s.without(entity)
                }
            })
            .collect();
        self.with_slots(slots)
    }
}
