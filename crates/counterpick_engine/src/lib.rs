//! Drag tokens, transition rules, and click selection for counterpick.
//!
//! This crate provides:
//! - [`Token`] - Parse and produce the identifiers carried by drag events
//! - [`resolve_drag`] / [`Move`] - Map a (source, destination) pair to a move
//! - [`click_entity`] / [`click_container`] - The click-to-select modality

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod selection;
pub mod token;
pub mod transition;

pub use selection::{ClickOutcome, Container, Selection, click_container, click_entity};
pub use token::Token;
pub use transition::{Move, resolve_drag};
