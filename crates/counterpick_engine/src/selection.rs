//! Click-to-select modality.
//!
//! The first click on an entity selects it; a click on a container moves the
//! selected entity there. This is a separate decision layer from drag
//! resolution: it emits the same [`Move`]s but has its own ambiguity rules.
//!
//! ```text
//! Idle --click entity--> Selected
//! Selected --click same entity--> Idle
//! Selected --click other entity--> Selected (switched)
//! Selected --click slot not holding it--> move, Idle
//! Selected --click pool while in a slot--> move, Idle
//! Selected --click pool while in the pool--> unchanged
//! ```

use counterpick_foundation::EntityId;
use counterpick_storage::{Roster, SetId, SlotId};

use crate::transition::Move;

/// The currently selected entity and the set it was selected in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Set the entity was clicked in.
    pub set: SetId,
    /// The selected entity.
    pub entity: EntityId,
}

impl Selection {
    /// Creates a selection.
    #[must_use]
    pub fn new(set: SetId, entity: EntityId) -> Self {
        Self { set, entity }
    }
}

/// A clickable container inside a set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    /// One of the set's slots.
    Slot(SlotId),
    /// The set's pool.
    Pool,
}

/// Result of a click: the next selection and the move to attempt, if any.
///
/// When `movement` is set, the selection becomes `selection` only once the
/// move has been applied successfully.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Selection after the click.
    pub selection: Option<Selection>,
    /// Move requested by the click.
    pub movement: Option<Move>,
}

impl ClickOutcome {
    fn keep(current: Option<&Selection>) -> Self {
        Self {
            selection: current.cloned(),
            movement: None,
        }
    }

    fn select(selection: Option<Selection>) -> Self {
        Self {
            selection,
            movement: None,
        }
    }

    fn perform(movement: Move) -> Self {
        Self {
            selection: None,
            movement: Some(movement),
        }
    }
}

/// Handles a click on an entity, in a pool or a slot of `set`.
///
/// Clicking the selected entity again clears the selection; clicking any
/// other entity, in any container or set, switches to it.
#[must_use]
pub fn click_entity(current: Option<&Selection>, set: &SetId, entity: EntityId) -> ClickOutcome {
    let clicked = Selection::new(set.clone(), entity);
    if current == Some(&clicked) {
        ClickOutcome::select(None)
    } else {
        ClickOutcome::select(Some(clicked))
    }
}

/// Handles a click on a container of `set`.
///
/// Clicks with no selection, on a container of another set, or on the
/// container already holding the selection leave everything unchanged.
#[must_use]
pub fn click_container(
    roster: &Roster,
    current: Option<&Selection>,
    set: &SetId,
    container: &Container,
) -> ClickOutcome {
    let Some(selection) = current else {
        return ClickOutcome::keep(None);
    };
    if &selection.set != set {
        return ClickOutcome::keep(current);
    }
    let Some(target_set) = roster.set(set) else {
        return ClickOutcome::keep(current);
    };
    let entity = selection.entity;
    let holder = target_set.slot_of(entity).map(|s| s.id().clone());

    match (holder, container) {
        (Some(from), Container::Slot(to)) if &from == to => ClickOutcome::keep(current),
        (Some(from), Container::Slot(to)) => ClickOutcome::perform(Move::SlotToSlot {
            set: set.clone(),
            from,
            to: to.clone(),
            entity,
        }),
        (None, Container::Slot(to)) => ClickOutcome::perform(Move::PoolToSlot {
            set: set.clone(),
            slot: to.clone(),
            entity,
        }),
        (Some(from), Container::Pool) => ClickOutcome::perform(Move::SlotToPool {
            set: set.clone(),
            slot: from,
            entity,
        }),
        (None, Container::Pool) => ClickOutcome::keep(current),
    }
}
