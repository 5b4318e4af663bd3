//! Property tests for priority ordering.

use std::cmp::Ordering;

use proptest::prelude::*;

use navtree::domain::value_objects::{Priority, SortMode};
use navtree::SortPolicy;

pub fn priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Absent),
        (-1000i64..1000).prop_map(Priority::from),
        (-1.0e6f64..1.0e6).prop_map(Priority::Number),
        "[0-9]{1,4}".prop_map(Priority::Text),
        "[0-9]{1,3}[a-z]{1,3}".prop_map(Priority::Text),
        "[A-Za-z ]{0,8}".prop_map(Priority::Text),
    ]
}

const PRIORITY_MODES: [SortMode; 3] = [
    SortMode::Priority,
    SortMode::PriorityNumeric,
    SortMode::PriorityLexical,
];

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every priority mode is antisymmetric.
    #[test]
    fn property_compare_is_antisymmetric(a in priority(), b in priority()) {
        for mode in PRIORITY_MODES {
            let ab = SortPolicy::compare_priority(&a, &b, mode).unwrap();
            let ba = SortPolicy::compare_priority(&b, &a, mode).unwrap();
            prop_assert_eq!(ab, ba.reverse(), "mode {} with {:?} / {:?}", mode, a, b);
        }
    }

    /// PROPERTY: every priority mode is transitive, so sorting never panics.
    #[test]
    fn property_compare_is_transitive(a in priority(), b in priority(), c in priority()) {
        for mode in PRIORITY_MODES {
            let cmp = |x: &Priority, y: &Priority| SortPolicy::compare_priority(x, y, mode).unwrap();
            if cmp(&a, &b) != Ordering::Greater && cmp(&b, &c) != Ordering::Greater {
                prop_assert_ne!(cmp(&a, &c), Ordering::Greater, "mode {}", mode);
            }
        }
    }

    /// PROPERTY: numeric mode orders by the coerced number.
    #[test]
    fn property_numeric_mode_follows_to_number(mut values in prop::collection::vec(priority(), 0..12)) {
        values.sort_by(|a, b| SortPolicy::compare_priority(a, b, SortMode::PriorityNumeric).unwrap());
        for pair in values.windows(2) {
            prop_assert!(pair[0].to_number() <= pair[1].to_number() || pair[0].to_number().is_nan());
        }
    }

    /// PROPERTY: lexical mode orders by the lower-cased rendering.
    #[test]
    fn property_lexical_mode_follows_to_lexical(mut values in prop::collection::vec(priority(), 0..12)) {
        values.sort_by(|a, b| SortPolicy::compare_priority(a, b, SortMode::PriorityLexical).unwrap());
        for pair in values.windows(2) {
            prop_assert!(pair[0].to_lexical() <= pair[1].to_lexical());
        }
    }

    /// PROPERTY: modes without a priority rule are rejected, never guessed.
    #[test]
    fn property_non_priority_modes_are_unsupported(a in priority(), b in priority()) {
        for mode in [SortMode::None, SortMode::Label] {
            prop_assert!(SortPolicy::compare_priority(&a, &b, mode).is_err());
        }
    }
}
