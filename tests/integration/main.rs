//! Cross-layer integration tests for counterpick
//!
//! Tests that verify correct interaction between multiple crates.

mod round_trip;
