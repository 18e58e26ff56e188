//! Properties of the two check implementations.

use devlop::{Checks, Development, Message, Operator, Production};
use proptest::prelude::*;

proptest! {
    /// Production checks never report, whatever they are given.
    #[test]
    fn prop_production_always_ok(
        condition in any::<bool>(),
        left in any::<i64>(),
        right in any::<i64>(),
        text in ".{0,16}"
    ) {
        prop_assert!(Production::ok(condition, text.clone()).is_ok());
        prop_assert!(Production::equal(left, right, text.clone()).is_ok());
        prop_assert!(Production::unreachable(text).is_ok());
    }

    /// `ok` reports exactly when the condition is false.
    #[test]
    fn prop_development_ok_iff_condition(condition in any::<bool>()) {
        let outcome = Development::ok(condition, Message::Auto);
        prop_assert_eq!(outcome.is_ok(), condition);
        if let Err(failure) = outcome {
            prop_assert_eq!(failure.operator, Operator::Ok);
            prop_assert!(!failure.actual);
            prop_assert!(failure.expected);
            prop_assert!(failure.generated);
        }
    }

    /// `equal` reports exactly when the operands differ, and renders both.
    #[test]
    fn prop_development_equal_iff_equal(left in 0u8..8, right in 0u8..8) {
        let outcome = Development::equal(left, right, Message::Auto);
        prop_assert_eq!(outcome.is_ok(), left == right);
        if let Err(failure) = outcome {
            prop_assert_eq!(failure.left, Some(left.to_string()));
            prop_assert_eq!(failure.right, Some(right.to_string()));
        }
    }

    /// A caller-supplied message is kept verbatim; every failure is marked
    /// generated.
    #[test]
    fn prop_custom_message_kept(text in "[a-zA-Z0-9 ]{1,32}") {
        let failure = Development::unreachable(text.clone()).unwrap_err();
        prop_assert_eq!(failure.message, text);
        prop_assert!(failure.generated);
    }
}
