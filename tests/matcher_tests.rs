//! Behavioural tests for the matcher catalogue, exercised through the public API.

mod common;

use common::{accepts, semver};
use verity::prelude::*;

#[cfg(test)]
mod equality_tests {
    use super::*;

    #[test]
    fn test_nested_lists_compare_deeply() {
        let m = equal_to(Value::list([Value::list([1, 2]), Value::list([3])]));
        assert!(accepts(&m, Value::list([Value::list([1, 2]), Value::list([3])])));
        assert!(!accepts(&m, Value::list([Value::list([1, 2]), Value::list([3, 4])])));
        assert!(!accepts(&m, Value::list([Value::list([1, 2])])));
    }

    #[test]
    fn test_capability_equality_is_tried_both_ways() {
        assert!(accepts(&equal_to("1.2.3"), semver(1, 2, 3)));
        assert!(accepts(&equal_to(semver(1, 2, 3)), "1.2.3"));
        assert!(!accepts(&equal_to(semver(1, 2, 3)), "1.2.4"));
        assert!(!accepts(&equal_to(semver(1, 2, 3)), 123));
    }

    #[test]
    fn test_variants_compare_by_tag_and_payload() {
        let ok = equal_to(Value::variant("Ok", [Value::list([1, 2])]));
        assert!(accepts(&ok, Value::variant("Ok", [Value::list([1, 2])])));
        assert!(!accepts(&ok, Value::variant("Err", [Value::list([1, 2])])));
        assert!(!accepts(&ok, Value::variant("Ok", [Value::list([2, 1])])));
    }

    #[test]
    fn test_serializable_structs_are_matched_structurally() -> Result<(), VerityError> {
        #[derive(serde::Serialize)]
        struct User {
            name: &'static str,
            roles: Vec<&'static str>,
        }

        let user = to_value(&User {
            name: "ada",
            roles: vec!["admin", "dev"],
        })?;
        assert!(accepts(&has_entry("name", "ada"), user.clone()));
        assert!(accepts(
            &has_entry("roles", contains_in_any_order(vec!["dev", "admin"])),
            user
        ));
        Ok(())
    }

    #[test]
    fn test_identity_for_objects() {
        let shared = semver(1, 0, 0);
        assert!(accepts(&same_instance(shared.clone()), shared.clone()));
        assert!(!accepts(&same_instance(shared), semver(1, 0, 0)));
    }
}

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn test_objects_order_through_their_capability() {
        assert!(accepts(&greater_than("1.2.0"), semver(1, 10, 0)));
        assert!(accepts(&less_than(semver(2, 0, 0)), "1.9.9"));
        assert!(!accepts(&less_than(semver(2, 0, 0)), "not a version"));
    }

    #[test]
    fn test_mismatch_explains_the_relation() {
        assert_eq!(
            explain_mismatch(&greater_than_or_equal_to(10), &Value::from(3)),
            "3 was less than 10"
        );
    }

    #[test]
    fn test_close_to_examples() -> Result<(), VerityError> {
        let m = close_to(5.0, 0.5)?;
        for ok in [5.4, 4.6] {
            assert!(accepts(&m, ok), "{ok}");
        }
        for bad in [5.6, 4.4] {
            assert!(!accepts(&m, bad), "{bad}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod combinator_tests {
    use super::*;

    #[test]
    fn test_is_wraps_bare_values_and_passes_matchers() {
        assert!(accepts(&*is(5), 5));
        assert_eq!(describe(&*is(5)), "5");
        assert_eq!(describe(&*is(starts_with("x"))), "a string starting with \"x\"");
    }

    #[test]
    fn test_macros_accept_mixed_arguments() {
        let m = all_of![instance_of(ValueKind::Int), greater_than(0), not(13)];
        assert!(accepts(&m, 7));
        assert!(!accepts(&m, 13));
        assert!(!accepts(&m, 7.0));
        assert!(accepts(&any_of![1, "one", nil_value()], Value::Nil));
        assert!(!accepts(&any_of![], 1));
        assert!(accepts(&all_of![], 1));
    }

    #[test]
    fn test_all_of_mismatch_comes_from_first_failure_in_order() {
        let m = all_of![contains_string("a"), ends_with("z")];
        assert_eq!(explain_mismatch(&m, &Value::from("xyz")), "was \"xyz\"");
        let m = all_of![has_size(3), every_item(greater_than(0))];
        assert_eq!(
            explain_mismatch(&m, &Value::list([1, -1, 2])),
            "an item -1 was less than 0"
        );
    }

    #[test]
    fn test_described_as_keeps_behaviour() -> Result<(), VerityError> {
        let m = described_as("an adult aged over %0", greater_than(17), [17])?;
        assert_eq!(describe(&m), "an adult aged over 17");
        assert!(accepts(&m, 18));
        assert_eq!(explain_mismatch(&m, &Value::from(12)), "12 was less than 17");
        Ok(())
    }
}

#[cfg(test)]
mod container_tests {
    use super::*;

    #[test]
    fn test_in_order_and_any_order() {
        let ab = Value::list(["a", "b"]);
        let ba = Value::list(["b", "a"]);
        assert!(accepts(&contains!["a", "b"], ab.clone()));
        assert!(!accepts(&contains!["a", "b"], ba.clone()));
        assert!(accepts(&contains_in_any_order!["a", "b"], ba));
        assert!(!accepts(&contains_in_any_order!["a", "b"], Value::list(["a", "a"])));
        assert!(accepts(&array_containing(vec![starts_with("a"), starts_with("b")]), ab));
    }

    #[test]
    fn test_any_order_with_overlapping_matchers() {
        let m = contains_in_any_order![starts_with("a"), equal_to("ab")];
        assert!(accepts(&m, Value::list(["ab", "ac"])));
        assert!(!accepts(&m, Value::list(["ac", "ad"])));
    }

    #[test]
    fn test_membership() {
        assert!(accepts(&has_item(equal_to(3)), Value::list([1, 2, 3])));
        assert!(!accepts(&has_item(equal_to(3)), Value::list([1, 2, 4])));
        assert!(accepts(&has_items![3, greater_than(1)], Value::list([1, 2, 3])));
        assert!(accepts(&one_of(["red", "green"]), "green"));
    }

    #[test]
    fn test_maps() {
        let config = Value::map([("retries", Value::from(3)), ("host", Value::from("db"))]);
        assert!(accepts(&has_entry("retries", less_than(5)), config.clone()));
        assert!(accepts(&has_key(ends_with("st")), config.clone()));
        assert!(accepts(&has_value("db"), config.clone()));
        assert!(!accepts(&has_entry("host", 3), config));
    }
}
