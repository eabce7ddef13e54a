//! Serializable render model.
//!
//! A renderer that works from data gets everything it needs to draw the
//! roster and to emit drag events: display names, the derived pool, and the
//! token each draggable entity and drop zone carries.

use counterpick_engine::{Selection, Token};
use counterpick_foundation::{Catalog, EntityId, Error, ErrorKind, Result};
use counterpick_storage::{Roster, Set, SetId};
use serde::Serialize;

/// The whole roster as a renderer sees it.
#[derive(Clone, Debug, Serialize)]
pub struct RosterView {
    /// True while showing shared data that is not persisted.
    pub previewing: bool,
    /// The selected entity, if any.
    pub selection: Option<SelectionView>,
    /// Sets in display order.
    pub sets: Vec<SetView>,
}

/// The selected entity.
#[derive(Clone, Debug, Serialize)]
pub struct SelectionView {
    /// Set id.
    pub set: String,
    /// Entity id.
    pub entity: EntityId,
}

/// One set.
#[derive(Clone, Debug, Serialize)]
pub struct SetView {
    /// Set id.
    pub id: String,
    /// Name to display (user name or positional fallback).
    pub name: String,
    /// Slots in order.
    pub slots: Vec<SlotView>,
    /// Drop zone token of the pool.
    pub pool_token: String,
    /// Unplaced entities in catalog order.
    pub pool: Vec<EntityView>,
}

/// One slot.
#[derive(Clone, Debug, Serialize)]
pub struct SlotView {
    /// Slot id.
    pub id: String,
    /// Label.
    pub label: String,
    /// Drop zone token of the slot.
    pub token: String,
    /// Members in order.
    pub members: Vec<EntityView>,
}

/// One draggable entity.
#[derive(Clone, Debug, Serialize)]
pub struct EntityView {
    /// Entity id.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Category tag.
    pub category: &'static str,
    /// Image reference.
    pub image: String,
    /// Drag token.
    pub token: String,
    /// True if this is the selected entity.
    pub selected: bool,
}

impl RosterView {
    /// Builds the view of a snapshot.
    #[must_use]
    pub fn build(roster: &Roster, selection: Option<&Selection>, previewing: bool) -> Self {
        let sets = roster
            .sets()
            .iter()
            .enumerate()
            .map(|(index, set)| SetView::build(roster, index, set, selection))
            .collect();
        Self {
            previewing,
            selection: selection.map(|s| SelectionView {
                set: s.set.to_string(),
                entity: s.entity,
            }),
            sets,
        }
    }

    /// Serializes the view to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::new(ErrorKind::Internal(format!("failed to render view: {e}"))))
    }
}

impl SetView {
    fn build(roster: &Roster, index: usize, set: &Set, selection: Option<&Selection>) -> Self {
        let catalog = roster.catalog();
        let is_selected =
            |entity: EntityId| selection.is_some_and(|s| &s.set == set.id() && s.entity == entity);

        let slots = set
            .slots()
            .iter()
            .map(|slot| SlotView {
                id: slot.id().to_string(),
                label: slot.label().to_string(),
                token: Token::SlotZone {
                    set: set.id().clone(),
                    slot: slot.id().clone(),
                }
                .to_string(),
                members: slot
                    .members()
                    .iter()
                    .filter_map(|&entity| {
                        let token = Token::SlotEntity {
                            set: set.id().clone(),
                            slot: slot.id().clone(),
                            entity,
                        };
                        entity_view(catalog, entity, &token, is_selected(entity))
                    })
                    .collect(),
            })
            .collect();

        let pool = set
            .pool(catalog)
            .into_iter()
            .filter_map(|entity| {
                let token = Token::PoolEntity {
                    set: set.id().clone(),
                    entity,
                };
                entity_view(catalog, entity, &token, is_selected(entity))
            })
            .collect();

        Self {
            id: set.id().to_string(),
            name: set.display_name(index, roster.labels()),
            slots,
            pool_token: pool_token(set.id()),
            pool,
        }
    }
}

fn pool_token(set: &SetId) -> String {
    Token::PoolZone { set: set.clone() }.to_string()
}

fn entity_view(
    catalog: &Catalog,
    entity: EntityId,
    token: &Token,
    selected: bool,
) -> Option<EntityView> {
    let entry = catalog.get(entity)?;
    Some(EntityView {
        id: entity,
        name: entry.name.clone(),
        category: entry.category.as_str(),
        image: entry.image_ref.clone(),
        token: token.to_string(),
        selected,
    })
}
