//! Ordered, labeled containers of entity ids.

use counterpick_foundation::{EntityId, PVec};

use crate::ids::SlotId;

/// A labeled, ordered list of unique entity ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    id: SlotId,
    label: String,
    members: PVec<EntityId>,
}

impl Slot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new(id: SlotId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            members: PVec::new(),
        }
    }

    /// Returns a copy of this slot holding `members`, keeping the first
    /// occurrence of any repeated id.
    #[must_use]
    pub fn with_members<I>(&self, members: I) -> Self
    where
        I: IntoIterator<Item = EntityId>,
    {
        let mut seen = Vec::new();
        for id in members {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        Self {
            members: PVec::from(seen),
            ..self.clone()
        }
    }

    /// Returns the slot id.
    #[must_use]
    pub fn id(&self) -> &SlotId {
        &self.id
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the members in order.
    #[must_use]
    pub fn members(&self) -> &PVec<EntityId> {
        &self.members
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the slot has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if `entity` is a member.
    #[must_use]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.members.contains(&entity)
    }

    /// Returns the index of `entity` within the slot.
    #[must_use]
    pub fn position(&self, entity: EntityId) -> Option<usize> {
        self.members.position(|&m| m == entity)
    }

    pub(crate) fn relabeled(&self, label: String) -> Self {
        Self {
            label,
            ..self.clone()
        }
    }

    /// Appends `entity`, first dropping any copy already present.
    pub(crate) fn appended(&self, entity: EntityId) -> Self {
        Self {
            members: self.members.retain(|&m| m != entity).push_back(entity),
            ..self.clone()
        }
    }

    pub(crate) fn without(&self, entity: EntityId) -> Self {
        Self {
            members: self.members.retain(|&m| m != entity),
            ..self.clone()
        }
    }

    /// Moves `entity` to the index currently held by `over`.
    pub(crate) fn reordered(&self, entity: EntityId, over: EntityId) -> Option<Self> {
        let from = self.position(entity)?;
        let to = self.position(over)?;
        Some(Self {
            members: self.members.reposition(from, to)?,
            ..self.clone()
        })
    }
}
