//! Sets, slots, and the immutable roster repository for counterpick.
//!
//! This crate provides:
//! - [`SetId`], [`SlotId`] - Validated, separator-free identifiers
//! - [`Labels`] - Positional default names for sets and slots
//! - [`Slot`], [`Set`] - The two-level container model
//! - [`Roster`] - Immutable snapshot of all sets with CRUD and move primitives

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ids;
pub mod labels;
pub mod roster;
pub mod set;
pub mod slot;

pub use ids::{SetId, SlotId};
pub use labels::Labels;
pub use roster::{Direction, Roster};
pub use set::Set;
pub use slot::Slot;
