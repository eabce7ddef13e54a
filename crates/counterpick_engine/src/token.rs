//! Drag identifier tokens.
//!
//! Every draggable entity and every drop zone carries a string token. The
//! grammar, checked in this order:
//!
//! | Shape                     | Meaning                         |
//! |---------------------------|---------------------------------|
//! | `drop:{set}:{slot}`       | drop zone of a slot             |
//! | `pool-drop-{set}`         | drop zone of a set's pool       |
//! | `pool-{set}-{entity}`     | an entity shown in a pool       |
//! | `{set}-{slot}-{entity}`   | an entity placed in a slot      |
//!
//! Anything else carries no structured meaning. Set and slot ids never
//! contain `-` or `:`, and no set may be called `pool` or `drop`, so the
//! shapes cannot overlap.

use std::fmt;

use counterpick_foundation::EntityId;
use counterpick_storage::{SetId, SlotId};

/// A parsed drag or drop identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// Drop zone of a slot.
    SlotZone {
        /// Owning set.
        set: SetId,
        /// Target slot.
        slot: SlotId,
    },
    /// Drop zone of a set's pool.
    PoolZone {
        /// Owning set.
        set: SetId,
    },
    /// An entity displayed in a pool.
    PoolEntity {
        /// Owning set.
        set: SetId,
        /// The entity.
        entity: EntityId,
    },
    /// An entity placed in a slot.
    SlotEntity {
        /// Owning set.
        set: SetId,
        /// Holding slot.
        slot: SlotId,
        /// The entity.
        entity: EntityId,
    },
}

const DROP_PREFIX: &str = "drop:";
const POOL_DROP_PREFIX: &str = "pool-drop-";
const POOL_PREFIX: &str = "pool-";

fn parse_entity(s: &str) -> Option<EntityId> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl Token {
    /// Parses a token; returns `None` for strings with no structured meaning.
    #[must_use]
    pub fn parse(s: &str) -> Option<Token> {
        if let Some(rest) = s.strip_prefix(DROP_PREFIX) {
            let mut parts = rest.split(':');
            let (set, slot) = (parts.next()?, parts.next()?);
            if parts.next().is_some() {
                return None;
            }
            return Some(Token::SlotZone {
                set: SetId::new(set).ok()?,
                slot: SlotId::new(slot).ok()?,
            });
        }

        if let Some(set) = s.strip_prefix(POOL_DROP_PREFIX) {
            return Some(Token::PoolZone {
                set: SetId::new(set).ok()?,
            });
        }

        if let Some(rest) = s.strip_prefix(POOL_PREFIX) {
            let (set, entity) = rest.split_once('-')?;
            return Some(Token::PoolEntity {
                set: SetId::new(set).ok()?,
                entity: parse_entity(entity)?,
            });
        }

        let mut parts = s.split('-');
        let (set, slot, entity) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        Some(Token::SlotEntity {
            set: SetId::new(set).ok()?,
            slot: SlotId::new(slot).ok()?,
            entity: parse_entity(entity)?,
        })
    }

    /// Returns the set every token shape is scoped to.
    #[must_use]
    pub fn set_id(&self) -> &SetId {
        match self {
            Token::SlotZone { set, .. }
            | Token::PoolZone { set }
            | Token::PoolEntity { set, .. }
            | Token::SlotEntity { set, .. } => set,
        }
    }

    /// Returns the entity for entity-bearing tokens.
    #[must_use]
    pub fn entity(&self) -> Option<EntityId> {
        match self {
            Token::PoolEntity { entity, .. } | Token::SlotEntity { entity, .. } => Some(*entity),
            Token::SlotZone { .. } | Token::PoolZone { .. } => None,
        }
    }

    /// Returns the slot for slot-scoped tokens.
    #[must_use]
    pub fn slot_id(&self) -> Option<&SlotId> {
        match self {
            Token::SlotZone { slot, .. } | Token::SlotEntity { slot, .. } => Some(slot),
            Token::PoolZone { .. } | Token::PoolEntity { .. } => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::SlotZone { set, slot } => write!(f, "{DROP_PREFIX}{set}:{slot}"),
            Token::PoolZone { set } => write!(f, "{POOL_DROP_PREFIX}{set}"),
            Token::PoolEntity { set, entity } => write!(f, "{POOL_PREFIX}{set}-{}", entity.get()),
            Token::SlotEntity { set, slot, entity } => {
                write!(f, "{set}-{slot}-{}", entity.get())
            }
        }
    }
}
