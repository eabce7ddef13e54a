//! Persisted form of a roster.
//!
//! The persisted form is a JSON array of sets using one-letter keys:
//!
//! ```json
//! [{ "n": "対策", "i": [{ "p": [101, 203] }, { "n": "メモ", "p": [] }] }]
//! ```
//!
//! A set's `n` is omitted when it has no name, and a slot's `n` is omitted
//! when the label is the default for its position. Pools are never written,
//! and pristine sets (unnamed, every slot empty with a default label) are
//! left out.
//!
//! Decoding is tolerant of every format older builds wrote: long keys
//! (`name` / `items` / `pokemons`), members stored as English names or as
//! `{ "id": ... }` objects, and entries that no longer resolve. A single set
//! object at the top level reads as a one-set array. Only invalid JSON or a
//! top level that is neither an array nor an object is an error.

use std::collections::HashSet;
use std::sync::Arc;

use counterpick_foundation::{Catalog, EntityId, Error, ErrorKind, Result};
use counterpick_storage::{Labels, Roster, Set, SetId, Slot, SlotId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A set in the persisted form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSet {
    /// User-assigned name.
    #[serde(rename = "n", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Slots in order.
    #[serde(rename = "i", default)]
    pub slots: Vec<SavedSlot>,
}

/// A slot in the persisted form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSlot {
    /// Label, when it differs from the positional default.
    #[serde(rename = "n", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Member ids in order.
    #[serde(rename = "p", default)]
    pub members: Vec<EntityId>,
}

/// Converts a roster to its persisted form.
#[must_use]
pub fn encode(roster: &Roster) -> Vec<SavedSet> {
    let labels = roster.labels();
    roster
        .sets()
        .iter()
        .filter(|set| !set.is_pristine(labels))
        .map(|set| SavedSet {
            name: set.name().map(str::to_string),
            slots: set
                .slots()
                .iter()
                .enumerate()
                .map(|(index, slot)| SavedSlot {
                    label: (!labels.is_default_slot_label(index, slot.label()))
                        .then(|| slot.label().to_string()),
                    members: slot.members().iter().copied().collect(),
                })
                .collect(),
        })
        .collect()
}

/// Serializes a roster's persisted form to a JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(roster: &Roster) -> Result<String> {
    serde_json::to_string(&encode(roster))
        .map_err(|e| Error::new(ErrorKind::Internal(format!("failed to encode roster: {e}"))))
}

/// Parses a JSON document in any supported format into a roster.
///
/// # Errors
///
/// Returns a decode error if the text is not JSON, or its top level is
/// neither an array nor an object.
pub fn from_json(text: &str, catalog: Arc<Catalog>, labels: Arc<Labels>) -> Result<Roster> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| Error::decode(format!("invalid JSON: {e}")))?;
    decode(&value, catalog, labels)
}

/// Decodes a parsed document in any supported format.
///
/// Set and slot ids are regenerated from position among the entries that
/// are objects; entries of any other shape are skipped and not counted.
/// Unresolvable members and repeated placements are dropped, and a set
/// without slots gets the default ones.
///
/// # Errors
///
/// Returns a decode error if the document is neither an array nor an object.
pub fn decode(value: &Value, catalog: Arc<Catalog>, labels: Arc<Labels>) -> Result<Roster> {
    let raw_sets = match value {
        Value::Array(raw_sets) => raw_sets.as_slice(),
        Value::Object(_) => std::slice::from_ref(value),
        _ => return Err(Error::decode("expected an array of sets or a single set")),
    };

    let sets = raw_sets
        .iter()
        .filter(|raw| raw.is_object())
        .enumerate()
        .map(|(index, raw)| decode_set(index, raw, &catalog, &labels))
        .collect::<Result<Vec<_>>>()?;

    Roster::from_sets(catalog, labels, sets)
}

fn decode_set(index: usize, raw: &Value, catalog: &Catalog, labels: &Labels) -> Result<Set> {
    let id = SetId::positional(index);
    let name = field(raw, "n", "name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    let raw_slots = field(raw, "i", "items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut placed = HashSet::new();
    let slots = raw_slots
        .iter()
        .filter(|raw| raw.is_object())
        .enumerate()
        .map(|(item, raw)| decode_slot(index, item, raw, catalog, labels, &mut placed))
        .collect::<Vec<_>>();

    let slots = if slots.is_empty() {
        Set::with_default_slots(id.clone(), labels, 0)
            .slots()
            .iter()
            .cloned()
            .collect()
    } else {
        slots
    };
    Set::new(id, name, slots)
}

fn decode_slot(
    set: usize,
    item: usize,
    raw: &Value,
    catalog: &Catalog,
    labels: &Labels,
    placed: &mut HashSet<EntityId>,
) -> Slot {
    let label = field(raw, "n", "name")
        .and_then(Value::as_str)
        .map_or_else(|| labels.slot_default(item).to_string(), str::to_string);

    let members = field(raw, "p", "pokemons")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .filter_map(|m| resolve_member(m, catalog))
        .filter(|&id| placed.insert(id))
        .collect::<Vec<_>>();

    Slot::new(SlotId::positional(set, item), label).with_members(members)
}

/// Short key first, then the long key older builds used.
fn field<'a>(raw: &'a Value, short: &str, long: &str) -> Option<&'a Value> {
    raw.get(short).or_else(|| raw.get(long))
}

/// Resolves one stored member to a catalog id.
///
/// Accepts a numeric id, an English key (or numeric string), or an object
/// whose `id` field resolves by the same rules.
fn resolve_member(raw: &Value, catalog: &Catalog) -> Option<EntityId> {
    let id = match raw {
        Value::Number(n) => EntityId::new(u32::try_from(n.as_u64()?).ok()?),
        Value::String(s) => match catalog.find_by_legacy_name(s) {
            Some(entity) => entity.id,
            None => s.trim().parse().ok()?,
        },
        Value::Object(map) => return resolve_member(map.get("id")?, catalog),
        _ => return None,
    };
    catalog.contains(id).then_some(id)
}
