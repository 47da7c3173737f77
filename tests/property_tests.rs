//! Algebraic properties of the matcher combinators.

use proptest::prelude::*;
use verity::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..3).prop_map(Value::from),
        ]
    })
}

proptest! {
    #[test]
    fn equal_to_is_reflexive(v in value()) {
        prop_assert!(equal_to(v.clone()).matches(&v));
    }

    #[test]
    fn double_negation_is_identity(v in value(), probe in value()) {
        let m = equal_to(probe);
        prop_assert_eq!(not(not(m.clone())).matches(&v), m.matches(&v));
    }

    #[test]
    fn empty_conjunction_and_disjunction(v in value()) {
        prop_assert!(all_of![].matches(&v));
        prop_assert!(!any_of![].matches(&v));
    }

    #[test]
    fn any_order_accepts_every_permutation(items in prop::collection::vec(0i64..4, 0..6), seed in any::<u64>()) {
        let mut shuffled = items.clone();
        let len = shuffled.len();
        if len > 1 {
            let rotate = (seed % len as u64) as usize;
            shuffled.rotate_left(rotate);
            shuffled.reverse();
        }
        let m = contains_in_any_order(items.clone());
        prop_assert!(m.matches(&Value::from(shuffled)));
        prop_assert_eq!(contains(items.clone()).matches(&Value::from(items)), true);
    }

    #[test]
    fn has_item_agrees_with_membership(items in prop::collection::vec(0i64..5, 0..6), probe in 0i64..5) {
        let m = has_item(probe);
        prop_assert_eq!(m.matches(&Value::from(items.clone())), items.contains(&probe));
    }

    #[test]
    fn ordering_matchers_partition_numbers(a in -1000i64..1000, b in -1000i64..1000) {
        let actual = Value::from(a);
        let hits = [
            less_than(b).matches(&actual),
            compares_equal_to(b).matches(&actual),
            greater_than(b).matches(&actual),
        ];
        prop_assert_eq!(hits.iter().filter(|hit| **hit).count(), 1);
        prop_assert_eq!(less_than_or_equal_to(b).matches(&actual), a <= b);
        prop_assert_eq!(greater_than_or_equal_to(b).matches(&actual), a >= b);
    }
}
