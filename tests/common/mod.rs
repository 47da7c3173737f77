//! Shared fixtures for verity integration tests.

use std::{cmp::Ordering, fmt};

use verity::{Matcher, Object, Value};

/// A semantic version that exposes both equality and ordering to matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Semver(pub u32, pub u32, pub u32);

impl Semver {
    fn from_value(value: &Value) -> Option<Semver> {
        let text = value.as_str()?;
        let mut parts = text.split('.').map(|p| p.parse::<u32>().ok());
        let semver = Semver(parts.next()??, parts.next()??, parts.next()??);
        parts.next().is_none().then_some(semver)
    }
}

impl Object for Semver {
    fn type_name(&self) -> &str {
        "Semver"
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0, self.1, self.2)
    }

    fn equals(&self, other: &Value) -> Option<bool> {
        Semver::from_value(other).map(|v| v == *self)
    }

    fn compare(&self, other: &Value) -> Option<Ordering> {
        Semver::from_value(other).map(|v| self.cmp(&v))
    }
}

pub fn semver(major: u32, minor: u32, patch: u32) -> Value {
    Value::object(Semver(major, minor, patch))
}

/// Evaluates a matcher against anything convertible into a value.
pub fn accepts(matcher: &dyn Matcher, actual: impl Into<Value>) -> bool {
    matcher.matches(&actual.into())
}
