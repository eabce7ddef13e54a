//! Drag transition rules.
//!
//! A drag ends with a source token and an optional destination token.
//! [`resolve_drag`] decides, from the tokens alone, which [`Move`] the pair
//! means; [`Move::apply`] then checks it against a roster snapshot. The rules
//! are tried in order and the first match wins:
//!
//! 1. No (or unparseable) destination, source in a slot: return to the pool.
//! 2. Slot entity over an entity of the same slot: reorder within the slot.
//! 3. Pool entity over a slot or a slot entity: place at the end of that slot.
//! 4. Slot entity over the pool or a pool entity: return to the pool.
//! 5. Slot entity over a different slot or its entity: move to the end of it.
//!
//! Identical tokens, an unparseable source, and any pair spanning two sets
//! resolve to nothing.

use std::fmt;

use counterpick_foundation::{EntityId, Result};
use counterpick_storage::{Roster, SetId, SlotId};

use crate::token::Token;

/// A single reassignment within one set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Dropped outside every zone; the entity leaves its slot.
    ReturnToPool {
        /// Owning set.
        set: SetId,
        /// Slot the entity leaves.
        slot: SlotId,
        /// The entity.
        entity: EntityId,
    },
    /// Reposition within one slot to the index held by `over`.
    Reorder {
        /// Owning set.
        set: SetId,
        /// The slot.
        slot: SlotId,
        /// The entity being moved.
        entity: EntityId,
        /// The entity whose index it takes.
        over: EntityId,
    },
    /// From the pool to the end of a slot.
    PoolToSlot {
        /// Owning set.
        set: SetId,
        /// Destination slot.
        slot: SlotId,
        /// The entity.
        entity: EntityId,
    },
    /// From a slot back into the pool.
    SlotToPool {
        /// Owning set.
        set: SetId,
        /// Slot the entity leaves.
        slot: SlotId,
        /// The entity.
        entity: EntityId,
    },
    /// From one slot to the end of another in the same set.
    SlotToSlot {
        /// Owning set.
        set: SetId,
        /// Source slot.
        from: SlotId,
        /// Destination slot.
        to: SlotId,
        /// The entity.
        entity: EntityId,
    },
}

/// Resolves a finished drag into a move.
///
/// `destination` is `None` when the drag ended outside every drop zone.
#[must_use]
pub fn resolve_drag(source: &str, destination: Option<&str>) -> Option<Move> {
    if destination == Some(source) {
        return None;
    }
    let source = Token::parse(source)?;
    let Some(destination) = destination.and_then(Token::parse) else {
        return match source {
            Token::SlotEntity { set, slot, entity } => {
                Some(Move::ReturnToPool { set, slot, entity })
            }
            _ => None,
        };
    };
    if source.set_id() != destination.set_id() {
        return None;
    }

    match (source, destination) {
        (
            Token::SlotEntity { set, slot, entity },
            Token::SlotEntity {
                slot: over_slot,
                entity: over,
                ..
            },
        ) if slot == over_slot => Some(Move::Reorder {
            set,
            slot,
            entity,
            over,
        }),
        (
            Token::PoolEntity { set, entity },
            Token::SlotZone { slot, .. } | Token::SlotEntity { slot, .. },
        ) => Some(Move::PoolToSlot { set, slot, entity }),
        (
            Token::SlotEntity { set, slot, entity },
            Token::PoolZone { .. } | Token::PoolEntity { .. },
        ) => Some(Move::SlotToPool { set, slot, entity }),
        (
            Token::SlotEntity {
                set,
                slot: from,
                entity,
            },
            Token::SlotZone { slot: to, .. } | Token::SlotEntity { slot: to, .. },
        ) if from != to => Some(Move::SlotToSlot {
            set,
            from,
            to,
            entity,
        }),
        _ => None,
    }
}

impl Move {
    /// Applies the move to a snapshot.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the snapshot does not match what the tokens
    /// claimed (entity not in the named slot or pool, missing set or slot,
    /// entity not in the catalog).
    pub fn apply(&self, roster: &Roster) -> Result<Roster> {
        match self {
            Move::ReturnToPool { set, slot, entity } | Move::SlotToPool { set, slot, entity } => {
                roster.release(set, slot, *entity)
            }
            Move::Reorder {
                set,
                slot,
                entity,
                over,
            } => roster.reorder(set, slot, *entity, *over),
            Move::PoolToSlot { set, slot, entity } => roster.assign(set, *entity, slot),
            Move::SlotToSlot {
                set,
                from,
                to,
                entity,
            } => roster.transfer(set, from, to, *entity),
        }
    }

    /// Returns the set the move happens in.
    #[must_use]
    pub fn set_id(&self) -> &SetId {
        match self {
            Move::ReturnToPool { set, .. }
            | Move::Reorder { set, .. }
            | Move::PoolToSlot { set, .. }
            | Move::SlotToPool { set, .. }
            | Move::SlotToSlot { set, .. } => set,
        }
    }

    /// Returns the entity being moved.
    #[must_use]
    pub fn entity(&self) -> EntityId {
        match self {
            Move::ReturnToPool { entity, .. }
            | Move::Reorder { entity, .. }
            | Move::PoolToSlot { entity, .. }
            | Move::SlotToPool { entity, .. }
            | Move::SlotToSlot { entity, .. } => *entity,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::ReturnToPool { set, slot, entity } => {
                write!(f, "{entity} {set}/{slot} -> pool (dropped outside)")
            }
            Move::Reorder {
                set,
                slot,
                entity,
                over,
            } => write!(f, "{entity} {set}/{slot} reorder over {over}"),
            Move::PoolToSlot { set, slot, entity } => {
                write!(f, "{entity} {set}/pool -> {set}/{slot}")
            }
            Move::SlotToPool { set, slot, entity } => {
                write!(f, "{entity} {set}/{slot} -> {set}/pool")
            }
            Move::SlotToSlot {
                set,
                from,
                to,
                entity,
            } => write!(f, "{entity} {set}/{from} -> {set}/{to}"),
        }
    }
}
