//! Equality, identity, nil and kind checks.

use crate::{
    description::Description,
    matcher::Matcher,
    value::{equivalent, Value, ValueKind},
};

/// Matches values structurally equal to an operand.
///
/// Lists are compared element by element, recursively. See
/// [`crate::value::equivalent`] for the full dispatch order.
#[derive(Debug, Clone)]
pub struct IsEqual {
    expected: Value,
}

impl IsEqual {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Matcher for IsEqual {
    fn matches(&self, actual: &Value) -> bool {
        equivalent(actual, &self.expected)
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_value(&self.expected);
    }

    fn expected_value(&self) -> Option<&Value> {
        Some(&self.expected)
    }
}

/// ```rust
/// use verity::prelude::*;
/// assert!(equal_to(Value::list([1, 2])).matches(&Value::list([1, 2])));
/// ```
pub fn equal_to(expected: impl Into<Value>) -> IsEqual {
    IsEqual::new(expected)
}

/// Matches the very same instance: objects by pointer, lists and maps by
/// shared storage, primitives by value.
#[derive(Debug, Clone)]
pub struct IsSame {
    expected: Value,
}

impl Matcher for IsSame {
    fn matches(&self, actual: &Value) -> bool {
        actual.same_instance(&self.expected)
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("same instance as ")
            .append_value(&self.expected);
    }
}

pub fn same_instance(expected: impl Into<Value>) -> IsSame {
    IsSame {
        expected: expected.into(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IsNil;

impl Matcher for IsNil {
    fn matches(&self, actual: &Value) -> bool {
        actual.is_nil()
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("null");
    }
}

pub fn nil_value() -> IsNil {
    IsNil
}

#[derive(Debug, Clone, Copy)]
pub struct IsNotNil;

impl Matcher for IsNotNil {
    fn matches(&self, actual: &Value) -> bool {
        !actual.is_nil()
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("not null");
    }
}

pub fn not_nil_value() -> IsNotNil {
    IsNotNil
}

/// Matches values of one [`ValueKind`].
#[derive(Debug, Clone, Copy)]
pub struct IsInstanceOf {
    kind: ValueKind,
}

impl Matcher for IsInstanceOf {
    fn matches(&self, actual: &Value) -> bool {
        actual.kind() == self.kind
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("an instance of ")
            .append_text(self.kind.as_str());
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        description
            .append_text("was ")
            .append_value(actual)
            .append_text(", a ")
            .append_text(actual.type_name());
    }
}

pub fn instance_of(kind: ValueKind) -> IsInstanceOf {
    IsInstanceOf { kind }
}

/// Matches everything.
#[derive(Debug, Clone)]
pub struct IsAnything {
    text: String,
}

impl Matcher for IsAnything {
    fn matches(&self, _actual: &Value) -> bool {
        true
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text(&self.text);
    }
}

pub fn anything() -> IsAnything {
    anything_described("ANYTHING")
}

pub fn anything_described(text: impl Into<String>) -> IsAnything {
    IsAnything { text: text.into() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{describe, explain_mismatch};

    #[test]
    fn test_equal_to_is_reflexive_for_each_kind() {
        for value in [
            Value::Nil,
            Value::from(true),
            Value::from(1),
            Value::from(1.5),
            Value::from("s"),
            Value::list([1, 2]),
            Value::map([("k", 1)]),
            Value::variant("Some", [1]),
        ] {
            assert!(equal_to(value.clone()).matches(&value), "{value}");
        }
    }

    #[test]
    fn test_equal_to_describes_operand_canonically() {
        assert_eq!(describe(&equal_to("abc")), "\"abc\"");
        assert_eq!(describe(&equal_to(Value::Nil)), "null");
        assert_eq!(explain_mismatch(&equal_to(2), &Value::from(1)), "was 1");
    }

    #[test]
    fn test_equal_to_rejects_other_kinds_without_error() {
        assert!(!equal_to(1).matches(&Value::from("1")));
        assert!(!equal_to(Value::list([1])).matches(&Value::from(1)));
    }

    #[test]
    fn test_nil_checks() {
        assert!(nil_value().matches(&Value::Nil));
        assert!(!nil_value().matches(&Value::from(0)));
        assert!(not_nil_value().matches(&Value::from(0)));
        assert_eq!(describe(&not_nil_value()), "not null");
    }

    #[test]
    fn test_instance_of() {
        let m = instance_of(ValueKind::String);
        assert!(m.matches(&Value::from("x")));
        assert!(!m.matches(&Value::from(1)));
        assert_eq!(describe(&m), "an instance of String");
        assert_eq!(explain_mismatch(&m, &Value::from(1)), "was 1, a Int");
    }

    #[test]
    fn test_same_instance_on_primitives() {
        assert!(same_instance(3).matches(&Value::from(3)));
        assert!(!same_instance(3).matches(&Value::from(4)));
        assert_eq!(describe(&same_instance("a")), "same instance as \"a\"");
    }

    #[test]
    fn test_same_instance_on_lists() {
        let empty = Value::list(Vec::<i64>::new());
        assert!(same_instance(empty.clone()).matches(&empty));

        let single = Value::list([1]);
        assert!(same_instance(single.clone()).matches(&single));

        let many = Value::list(0..100);
        assert!(same_instance(many.clone()).matches(&many));
        assert!(!same_instance(Value::list(0..100)).matches(&many));
        assert!(!same_instance(many).matches(&empty));
    }

    #[test]
    fn test_same_instance_on_maps() {
        let empty = Value::map(Vec::<(String, i64)>::new());
        assert!(same_instance(empty.clone()).matches(&empty));

        let roles = Value::map([("admin", true), ("dev", false)]);
        assert!(same_instance(roles.clone()).matches(&roles));
        assert!(!same_instance(Value::map([("admin", true), ("dev", false)])).matches(&roles));
        assert!(!same_instance(roles).matches(&empty));
    }

    #[test]
    fn test_anything() {
        assert!(anything().matches(&Value::Nil));
        assert_eq!(describe(&anything()), "ANYTHING");
        assert_eq!(describe(&anything_described("whatever")), "whatever");
    }
}
