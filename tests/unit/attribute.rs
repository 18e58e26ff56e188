//! Tests for `#[warn_deprecated]`.

use devlop::{warn_deprecated, Identity, Registry, IS_DEVELOPMENT};

#[warn_deprecated(message = "use `a + b`", id = "tests:attribute:add")]
fn old_add(a: u32, b: u32) -> u32 {
    a + b
}

#[warn_deprecated(message = "use `a + b`", id = "tests:attribute:add")]
fn old_add_again(a: u32, b: u32) -> u32 {
    a + b
}

#[warn_deprecated("use `str::to_uppercase`")]
fn shout(input: &str) -> String {
    input.to_uppercase()
}

struct Meters(f64);

impl Meters {
    #[warn_deprecated(message = "use `Meters::from_km`", id = "tests:attribute:kilometers")]
    fn kilometers(km: f64) -> Meters {
        Meters(km * 1000.0)
    }
}

#[test]
fn test_body_unchanged() {
    assert_eq!(old_add(2, 3), 5);
    assert_eq!(old_add(4, 5), 9);
    assert_eq!(shout("quiet"), "QUIET");
    assert_eq!(Meters::kilometers(1.5).0, 1500.0);
}

#[test]
fn test_named_identity_recorded_in_development() {
    old_add_again(1, 1);
    assert_eq!(
        Registry::global().has_warned(&Identity::named("tests:attribute:add")),
        IS_DEVELOPMENT
    );
}

#[test]
fn test_methods_supported() {
    Meters::kilometers(2.0);
    Meters::kilometers(3.0);
    assert_eq!(
        Registry::global().has_warned(&Identity::named("tests:attribute:kilometers")),
        IS_DEVELOPMENT
    );
}
