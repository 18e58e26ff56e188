//! Tests for the deprecated `includes` helper.

use devlop::demo::{includes, INCLUDES_NOTICE, STRING_INCLUDES};
use devlop::{Registry, IS_DEVELOPMENT};

#[test]
fn test_includes_through_wrapper() {
    assert!(STRING_INCLUDES.call(("devlop", "lop", None)));
    assert!(!STRING_INCLUDES.call(("devlop", "dev", Some(3))));
    assert!(STRING_INCLUDES.call(("naïve café", "café", Some(6))));
}

#[test]
fn test_wrapper_identity_recorded_once_called() {
    STRING_INCLUDES.call(("a", "a", None));

    assert_eq!(STRING_INCLUDES.message(), INCLUDES_NOTICE);
    assert!(STRING_INCLUDES.identity().as_named().is_none());
    assert_eq!(
        Registry::global().has_warned(STRING_INCLUDES.identity()),
        IS_DEVELOPMENT
    );
}

#[test]
fn test_position_past_end_is_clamped() {
    assert!(STRING_INCLUDES.call(("abc", "", Some(10))));
    assert!(!includes("short", "t", Some(99)));
}
