//! Entity catalog, identifiers, errors, and persistent collections for counterpick.
//!
//! This crate provides:
//! - [`EntityId`], [`Entity`], [`Category`] - The immutable characters being arranged
//! - [`Catalog`] - The ordered entity list that defines canonical pool order
//! - [`Error`] - Rich error types with context
//! - [`PVec`] - Persistent vector used by every roster snapshot

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod builtin;
pub mod catalog;
pub mod collections;
pub mod entity;
pub mod error;

pub use catalog::Catalog;
pub use collections::PVec;
pub use entity::{Category, Entity, EntityId};
pub use error::{Error, ErrorContext, ErrorKind, Result};
