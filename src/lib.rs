//! counterpick - Roster builder core
//!
//! This crate re-exports all layers of the counterpick system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: counterpick_runtime    - Codecs, share links, session, REPL, CLI
//! Layer 2: counterpick_engine     - Drag tokens, transition rules, click selection
//! Layer 1: counterpick_storage    - Sets, slots, roster snapshots
//! Layer 0: counterpick_foundation - Catalog, EntityId, Error, PVec
//! ```

pub use counterpick_engine as engine;
pub use counterpick_foundation as foundation;
pub use counterpick_runtime as runtime;
pub use counterpick_storage as storage;
