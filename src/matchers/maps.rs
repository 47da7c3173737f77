//! Map matchers. Keys are presented to key matchers as `Value::String`.

use crate::{
    description::Description,
    matcher::{IntoMatcher, Matcher, SharedMatcher},
    matchers::primitives::anything,
    value::Value,
};

/// Matches maps with at least one entry whose key and value both satisfy
/// their matchers.
#[derive(Clone)]
pub struct IsMapContaining {
    key: SharedMatcher,
    value: SharedMatcher,
}

impl Matcher for IsMapContaining {
    fn matches(&self, actual: &Value) -> bool {
        actual.as_map().is_some_and(|map| {
            map.iter().any(|(key, value)| {
                self.key.matches(&Value::String(key.clone())) && self.value.matches(value)
            })
        })
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("map containing [")
            .append_description_of(&self.key)
            .append_text("->")
            .append_description_of(&self.value)
            .append_text("]");
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        let label = if actual.as_map().is_some() { "map was " } else { "was " };
        description.append_text(label).append_value(actual);
    }
}

pub fn has_entry(key: impl IntoMatcher, value: impl IntoMatcher) -> IsMapContaining {
    IsMapContaining {
        key: key.into_matcher(),
        value: value.into_matcher(),
    }
}

/// ```rust
/// use verity::prelude::*;
/// let m = has_key(starts_with("user."));
/// assert!(m.matches(&Value::map([("user.name", "ada")])));
/// ```
pub fn has_key(key: impl IntoMatcher) -> IsMapContaining {
    has_entry(key, anything())
}

pub fn has_value(value: impl IntoMatcher) -> IsMapContaining {
    has_entry(anything(), value)
}
