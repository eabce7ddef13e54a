//! Entity identifiers and catalog entries.

use std::fmt;
use std::str::FromStr;

/// Stable, catalog-assigned entity identifier.
///
/// Ids are grouped by category in hundreds (101.., 201.., ...) but nothing in
/// the engine relies on that; ordering is always taken from catalog position.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(u32);

impl EntityId {
    /// Creates an entity id from its raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl FromStr for EntityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Role tag of an entity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Category {
    /// Ranged damage dealers.
    Attacker,
    /// Frontline tanks.
    Defender,
    /// Mobile assassins.
    Speedster,
    /// Healers and utility.
    Support,
    /// Melee bruisers.
    AllRounder,
}

impl Category {
    /// Returns the category name as used in logs and views.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attacker => "attacker",
            Self::Defender => "defender",
            Self::Speedster => "speedster",
            Self::Support => "support",
            Self::AllRounder => "all-rounder",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    /// Stable identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// English key stored by the oldest persisted formats.
    pub legacy_name: String,
    /// Role tag.
    pub category: Category,
    /// Image reference for the rendering layer.
    pub image_ref: String,
}

impl Entity {
    /// Creates a catalog entry.
    #[must_use]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        legacy_name: impl Into<String>,
        category: Category,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(id),
            name: name.into(),
            legacy_name: legacy_name.into(),
            category,
            image_ref: image_ref.into(),
        }
    }
}
