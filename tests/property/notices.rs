//! Properties of deprecation notices.

use std::collections::HashSet;

use crate::common::{isolated_reporter, CallCounter};
use devlop::{deprecate, deprecate_with_id, Identity, Mode, Registry};
use proptest::prelude::*;

/// A small pool of ids, so generated sequences repeat them often.
fn id_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d", "e"]).prop_map(String::from)
}

proptest! {
    /// N calls forward N times and notify once.
    #[test]
    fn prop_calls_forward_and_notify_once(n in 1usize..64) {
        let (reporter, sink) = isolated_reporter(Mode::Development);
        let counter = CallCounter::new();
        let wrapped = deprecate(|| counter.hit(), "old").with_reporter(reporter);

        for _ in 0..n {
            wrapped.call(());
        }

        prop_assert_eq!(counter.count(), n);
        prop_assert_eq!(sink.len(), 1);
    }

    /// In production, N calls forward N times and notify never.
    #[test]
    fn prop_production_never_notifies(n in 0usize..64) {
        let (reporter, sink) = isolated_reporter(Mode::Production);
        let counter = CallCounter::new();
        let wrapped = deprecate(|| counter.hit(), "old").with_reporter(reporter);

        for _ in 0..n {
            wrapped.call(());
        }

        prop_assert_eq!(counter.count(), n);
        prop_assert!(sink.is_empty());
    }

    /// However wrappers are created and called, one notice goes out per
    /// distinct id that was actually called.
    #[test]
    fn prop_one_notice_per_distinct_id(ids in prop::collection::vec(id_strategy(), 1..40)) {
        let (reporter, sink) = isolated_reporter(Mode::Development);

        for id in &ids {
            deprecate_with_id(|| (), "old", Identity::named(id.clone()))
                .with_reporter(reporter.clone())
                .call(());
        }

        let distinct: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(sink.len(), distinct.len());
        prop_assert_eq!(reporter.registry().len(), distinct.len());
    }

    /// `mark_warned` succeeds exactly once per identity.
    #[test]
    fn prop_mark_warned_once(ids in prop::collection::vec(id_strategy(), 0..40)) {
        let registry = Registry::new();
        let fresh = ids
            .iter()
            .filter(|id| registry.mark_warned(&Identity::named((*id).clone())))
            .count();

        let distinct: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(fresh, distinct.len());
        prop_assert_eq!(registry.len(), distinct.len());
    }
}
