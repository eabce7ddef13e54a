//! Integration tests for drag tokens
//!
//! Tests the four token shapes and their textual inverse.

use counterpick_engine::Token;
use counterpick_foundation::EntityId;

use crate::fixtures::{set_id, slot_id};

#[test]
fn every_shape_parses() {
    assert_eq!(
        Token::parse("drop:s0:i0"),
        Some(Token::SlotZone { set: set_id("s0"), slot: slot_id("i0") })
    );
    assert_eq!(
        Token::parse("pool-drop-s0"),
        Some(Token::PoolZone { set: set_id("s0") })
    );
    assert_eq!(
        Token::parse("pool-s0-101"),
        Some(Token::PoolEntity { set: set_id("s0"), entity: EntityId::new(101) })
    );
    assert_eq!(
        Token::parse("s0-i0-101"),
        Some(Token::SlotEntity {
            set: set_id("s0"),
            slot: slot_id("i0"),
            entity: EntityId::new(101),
        })
    );
}

#[test]
fn malformed_tokens_have_no_meaning() {
    for raw in ["", "drop:s0", "drop:s0:i0:x", "pool-s0-abc", "s0-i0", "s0-i0-1-2", "101", "pool-"] {
        assert_eq!(Token::parse(raw), None, "{raw}");
    }
}

#[test]
fn display_is_the_inverse_of_parse() {
    for raw in ["drop:s0:s0_i1", "pool-drop-s3", "pool-s3-140", "s3-s3_i4-101"] {
        assert_eq!(Token::parse(raw).unwrap().to_string(), raw);
    }
}

#[test]
fn accessors() {
    let token = Token::parse("s0-i0-101").unwrap();
    assert_eq!(token.set_id(), &set_id("s0"));
    assert_eq!(token.slot_id(), Some(&slot_id("i0")));
    assert_eq!(token.entity(), Some(EntityId::new(101)));
    assert_eq!(Token::parse("pool-drop-s0").unwrap().entity(), None);
}
