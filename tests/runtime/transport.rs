//! Integration tests for transport payloads
//!
//! Tests the URL-safe compressed form and the plain-base64 form older share
//! links carry.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use counterpick_foundation::ErrorKind;
use counterpick_runtime::transport;
use proptest::prelude::*;

const JSON: &str = r#"[{"n":"対策","i":[{"p":[101,102]},{"n":"メモ","p":[]}]}]"#;

#[test]
fn payload_is_url_safe() {
    let payload = transport::encode(JSON).unwrap();
    assert!(payload.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    assert_eq!(transport::decode(&payload).unwrap(), JSON);
}

#[test]
fn compression_shrinks_repetitive_rosters() {
    let members: Vec<String> = (101..188).map(|id| id.to_string()).collect();
    let json = format!(r#"[{{"i":[{{"p":[{}]}}]}}]"#, members.join(","));
    let payload = transport::encode(&json).unwrap();
    assert!(payload.len() < json.len());
}

#[test]
fn uncompressed_links_still_open() {
    let standard = STANDARD.encode(JSON);
    assert_eq!(transport::decode(&standard).unwrap(), JSON);

    let url_safe = URL_SAFE_NO_PAD.encode(JSON);
    assert_eq!(transport::decode(&url_safe).unwrap(), JSON);
}

#[test]
fn empty_roster_round_trips() {
    let payload = transport::encode("[]").unwrap();
    assert_eq!(transport::decode(&payload).unwrap(), "[]");
}

#[test]
fn garbage_is_a_decode_error() {
    for payload in ["%%%", "a", "!!!!"] {
        let err = transport::decode(payload).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Decode(_)), "{payload}");
    }
}

proptest! {
    #[test]
    fn compress_round_trips(text in ".*") {
        let bytes = transport::compress(&text).unwrap();
        prop_assert_eq!(transport::decompress(&bytes).unwrap(), text);
    }
}
