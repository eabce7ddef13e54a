//! Integration tests for Error types
//!
//! Tests error construction, display, context, and the rejection split.

use counterpick_foundation::{EntityId, Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_messages_name_their_subject() {
    assert_eq!(Error::set_not_found("s9").to_string(), "set not found: s9");
    assert!(Error::slot_not_found("s0", "s0_i9").to_string().contains("s0_i9"));
    assert!(
        Error::entity_not_found(EntityId::new(7))
            .to_string()
            .contains("#7")
    );
    assert!(Error::cross_set("s0", "s1").to_string().contains("s1"));
    assert_eq!(Error::usage("try help").to_string(), "try help");
}

#[test]
fn error_with_context() {
    let err = Error::storage("disk full").with_context(
        ErrorContext::new()
            .with_operation("persist")
            .with_key("pokemon-unite-counter-pick")
            .with_note("roster kept in memory"),
    );
    let context = err.context.as_ref().unwrap().to_string();
    assert!(context.starts_with("during persist"));
    assert!(context.contains("pokemon-unite-counter-pick"));
    assert!(context.ends_with("; roster kept in memory"));
}

// =============================================================================
// Rejections vs Failures
// =============================================================================

#[test]
fn rejections_are_separated_from_failures() {
    let rejections = [
        Error::set_not_found("s1"),
        Error::slot_not_found("s0", "x"),
        Error::entity_not_found(EntityId::new(1)),
        Error::entity_not_placed(EntityId::new(101), "s0_i1"),
        Error::cross_set("s0", "s1"),
        Error::new(ErrorKind::LastSlot("s0".into())),
    ];
    assert!(rejections.iter().all(Error::is_rejection));

    let failures = [
        Error::decode("not an array"),
        Error::storage("disk full"),
        Error::invalid_identifier("a-b"),
        Error::new(ErrorKind::Share("no clipboard".into())),
    ];
    assert!(!failures.iter().any(Error::is_rejection));
}
