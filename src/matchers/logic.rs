//! Logical combinators.
//!
//! `all_of` and `any_of` evaluate their children in order and stop as soon as
//! the outcome is known. That order is part of the contract: `all_of` reports
//! the mismatch of the first child that failed, and nothing else.

use crate::{
    description::Description,
    matcher::{IntoMatcher, Matcher, SharedMatcher},
    value::Value,
};

/// Conjunction. Vacuously true when empty.
#[derive(Clone)]
pub struct AllOf {
    matchers: Vec<SharedMatcher>,
}

impl AllOf {
    fn first_failure(&self, actual: &Value) -> Option<&SharedMatcher> {
        self.matchers.iter().find(|matcher| !matcher.matches(actual))
    }
}

impl Matcher for AllOf {
    fn matches(&self, actual: &Value) -> bool {
        self.first_failure(actual).is_none()
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_list("(", " and ", ")", &self.matchers);
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        match self.first_failure(actual) {
            Some(matcher) => matcher.describe_mismatch(actual, description),
            None => {
                description.append_text("was ").append_value(actual);
            }
        }
    }
}

/// ```rust
/// use verity::prelude::*;
/// let between = all_of(vec![greater_than(1), less_than(5)]);
/// assert!(between.matches(&Value::from(3)));
/// assert!(all_of(Vec::<SharedMatcher>::new()).matches(&Value::Nil));
/// ```
pub fn all_of<I>(matchers: I) -> AllOf
where
    I: IntoIterator,
    I::Item: IntoMatcher,
{
    AllOf {
        matchers: matchers.into_iter().map(IntoMatcher::into_matcher).collect(),
    }
}

/// Disjunction. Vacuously false when empty.
#[derive(Clone)]
pub struct AnyOf {
    matchers: Vec<SharedMatcher>,
}

impl Matcher for AnyOf {
    fn matches(&self, actual: &Value) -> bool {
        self.matchers.iter().any(|matcher| matcher.matches(actual))
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_list("(", " or ", ")", &self.matchers);
    }
}

pub fn any_of<I>(matchers: I) -> AnyOf
where
    I: IntoIterator,
    I::Item: IntoMatcher,
{
    AnyOf {
        matchers: matchers.into_iter().map(IntoMatcher::into_matcher).collect(),
    }
}

/// Logical negation.
#[derive(Clone)]
pub struct IsNot {
    matcher: SharedMatcher,
}

impl Matcher for IsNot {
    fn matches(&self, actual: &Value) -> bool {
        !self.matcher.matches(actual)
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("not ")
            .append_description_of(&self.matcher);
    }

    // The failure here is that the wrapped matcher did match.
    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        description
            .append_text("was ")
            .append_value(actual)
            .append_text(", which matches ")
            .append_description_of(&self.matcher);
    }
}

pub fn not(matcher: impl IntoMatcher) -> IsNot {
    IsNot {
        matcher: matcher.into_matcher(),
    }
}

/// Fluent pairwise chaining started by [`both`] or [`either`].
///
/// Every `and`/`or` wraps the chain built so far in a new two-child
/// conjunction or disjunction, so `both(a).and(b).and(c)` behaves like
/// `all_of([all_of([a, b]), c])`.
#[derive(Clone)]
pub struct CombinableMatcher {
    matcher: SharedMatcher,
}

impl CombinableMatcher {
    pub fn and(self, other: impl IntoMatcher) -> CombinableMatcher {
        CombinableMatcher {
            matcher: all_of([self.matcher, other.into_matcher()]).into_matcher(),
        }
    }

    pub fn or(self, other: impl IntoMatcher) -> CombinableMatcher {
        CombinableMatcher {
            matcher: any_of([self.matcher, other.into_matcher()]).into_matcher(),
        }
    }
}

impl Matcher for CombinableMatcher {
    fn matches(&self, actual: &Value) -> bool {
        self.matcher.matches(actual)
    }

    fn describe_to(&self, description: &mut Description) {
        self.matcher.describe_to(description);
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        self.matcher.describe_mismatch(actual, description);
    }
}

/// ```rust
/// use verity::prelude::*;
/// let m = both(greater_than(1)).and(less_than(5));
/// assert!(m.matches(&Value::from(2)));
/// assert!(!m.matches(&Value::from(7)));
/// ```
pub fn both(matcher: impl IntoMatcher) -> CombinableMatcher {
    CombinableMatcher {
        matcher: matcher.into_matcher(),
    }
}

pub fn either(matcher: impl IntoMatcher) -> CombinableMatcher {
    CombinableMatcher {
        matcher: matcher.into_matcher(),
    }
}
