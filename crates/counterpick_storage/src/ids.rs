//! Set and slot identifiers.
//!
//! Ids are session-scoped handles: every load regenerates them from array
//! position (`s{set}` and `s{set}_i{item}`), so they are never durable keys.
//! They are restricted to ASCII alphanumerics and `_` so that the separators
//! used by drag tokens (`-` and `:`) can never appear inside one.

use std::fmt;

use counterpick_foundation::{Error, Result};

/// Set ids that would make drag tokens ambiguous (`pool-...`, `drop:...`).
const RESERVED_SET_IDS: &[&str] = &["pool", "drop"];

fn is_token_safe(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Identifier of a set, unique within a roster.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetId(String);

impl SetId {
    /// Creates a set id after validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, contains characters other than
    /// ASCII alphanumerics and `_`, or is a reserved word.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if !is_token_safe(&id) || RESERVED_SET_IDS.contains(&id.as_str()) {
            return Err(Error::invalid_identifier(id));
        }
        Ok(Self(id))
    }

    /// Returns the id assigned to the set at `index` on load.
    #[must_use]
    pub fn positional(index: usize) -> Self {
        Self(format!("s{index}"))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a slot, unique within its set.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(String);

impl SlotId {
    /// Creates a slot id after validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or contains characters other than
    /// ASCII alphanumerics and `_`.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if !is_token_safe(&id) {
            return Err(Error::invalid_identifier(id));
        }
        Ok(Self(id))
    }

    /// Returns the id assigned to slot `item` of set `set` on load.
    #[must_use]
    pub fn positional(set: usize, item: usize) -> Self {
        Self(format!("s{set}_i{item}"))
    }

    /// Returns a fresh id for a slot inserted into `set` at runtime.
    #[must_use]
    pub fn within(set: &SetId, serial: usize) -> Self {
        Self(format!("{}_i{serial}", set.as_str()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! id_impls {
    ($ty:ident) => {
        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($ty), self.0)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl std::str::FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }
    };
}

id_impls!(SetId);
id_impls!(SlotId);
