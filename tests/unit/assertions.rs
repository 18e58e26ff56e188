//! Tests for the development-only checks.

use crate::common::{capture_failure, expect_failure_in_development};
use devlop::{
    equal, ok, unreachable, Checks, Development, Message, Operator, Production, IS_DEVELOPMENT,
};

// ============================================================================
// OK
// ============================================================================

#[test]
fn test_ok_passes_on_true() {
    assert!(capture_failure(|| ok(true, Message::Auto)).is_none());
    assert!(capture_failure(|| ok(1 + 1 == 2, "arithmetic")).is_none());
}

#[test]
fn test_ok_default_message() {
    let Some(failure) = expect_failure_in_development(|| ok(false, Message::Auto)) else {
        return;
    };

    assert_eq!(failure.name, "Assertion");
    assert_eq!(failure.message, "Expected value to be truthy");
    assert_eq!(failure.code, "ERR_ASSERTION");
    assert_eq!(failure.operator, Operator::Ok);
    assert!(!failure.actual);
    assert!(failure.expected);
    assert!(failure.generated);
}

#[test]
fn test_ok_custom_message() {
    let Some(failure) = expect_failure_in_development(|| ok(false, "xxx")) else {
        return;
    };

    assert_eq!(failure.message, "xxx");
    assert!(failure.generated);
}

#[test]
fn test_ok_error_value_as_message() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    let message = Message::from_error("IoError", &io);
    let Some(failure) = expect_failure_in_development(move || ok(false, message)) else {
        return;
    };

    assert_eq!(failure.name, "IoError");
    assert_eq!(failure.message, "disk on fire");
    assert!(failure.generated);
}

#[test]
fn test_ok_empty_message_uses_default() {
    let Some(failure) = expect_failure_in_development(|| ok(false, "")) else {
        return;
    };

    assert_eq!(failure.message, "Expected value to be truthy");
    assert!(failure.generated);
}

// ============================================================================
// EQUAL
// ============================================================================

#[test]
fn test_equal_passes_on_equal_values() {
    assert!(capture_failure(|| equal(1, 1, Message::Auto)).is_none());
    assert!(capture_failure(|| equal("a", String::from("a"), Message::Auto)).is_none());
}

#[test]
fn test_equal_records_operands() {
    let Some(failure) = expect_failure_in_development(|| equal(1, 2, Message::Auto)) else {
        return;
    };

    assert_eq!(failure.message, "Expected values to be equal");
    assert_eq!(failure.operator, Operator::Equal);
    assert_eq!(failure.left.as_deref(), Some("1"));
    assert_eq!(failure.right.as_deref(), Some("2"));
}

#[test]
fn test_equal_custom_message() {
    let Some(failure) = expect_failure_in_development(|| equal(1, 2, "xxx")) else {
        return;
    };

    assert_eq!(failure.message, "xxx");
    assert_eq!(failure.to_string().lines().next(), Some("Assertion: xxx"));
}

// ============================================================================
// UNREACHABLE
// ============================================================================

#[test]
fn test_unreachable_default_message() {
    let Some(failure) = expect_failure_in_development(|| unreachable(Message::Auto)) else {
        return;
    };

    assert_eq!(failure.message, "Unreachable");
    assert!(failure.generated);
}

#[test]
fn test_unreachable_custom_message() {
    let Some(failure) = expect_failure_in_development(|| unreachable("xxx")) else {
        return;
    };

    assert_eq!(failure.message, "xxx");
}

#[test]
fn test_failure_reports_call_site() {
    let Some(failure) = expect_failure_in_development(|| ok(false, Message::Auto)) else {
        return;
    };

    let location = failure.location.unwrap_or_default();
    assert!(location.starts_with(file!()), "location was {:?}", location);
}

// ============================================================================
// MODES
// ============================================================================

#[test]
fn test_production_never_fails() {
    assert!(!Production::ACTIVE);
    assert!(Production::ok(false, "xxx").is_ok());
    assert!(Production::equal(1, 2, "xxx").is_ok());
    assert!(Production::unreachable(Message::Auto).is_ok());
}

#[test]
fn test_development_always_checks() {
    assert!(Development::ACTIVE);
    assert!(Development::ok(false, "xxx").is_err());
    assert!(Development::equal(1, 2, "xxx").is_err());
    assert!(Development::unreachable(Message::Auto).is_err());
}

#[test]
fn test_active_matches_build_mode() {
    assert_eq!(<devlop::Active as Checks>::ACTIVE, IS_DEVELOPMENT);
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
fn test_macros_skip_operands_in_production() {
    let evaluated = std::cell::Cell::new(false);
    let probe = || {
        evaluated.set(true);
        true
    };

    devlop::dev_ok!(probe());
    assert_eq!(evaluated.get(), IS_DEVELOPMENT);
}

#[test]
fn test_macros_format_message() {
    let Some(failure) =
        expect_failure_in_development(|| devlop::dev_equal!(2 + 2, 5, "sum was {}", 2 + 2))
    else {
        return;
    };

    assert_eq!(failure.message, "sum was 4");
}
