//! The matcher contract.
//!
//! Every matcher answers three questions about itself:
//!
//! - does a value satisfy it (`matches`),
//! - what would a satisfying value look like (`describe_to`),
//! - what was wrong with a value that did not satisfy it (`describe_mismatch`).
//!
//! Matchers hold only immutable state, so they are `Send + Sync` and may be
//! shared between any number of combinators through [`SharedMatcher`].

use std::sync::Arc;

use crate::{description::Description, matchers::equal_to, value::Value};

pub trait Matcher: Send + Sync {
    /// Pure predicate over the examined value. Values of a kind the matcher
    /// does not understand simply do not match.
    fn matches(&self, actual: &Value) -> bool;

    /// Describes what a passing value looks like.
    fn describe_to(&self, description: &mut Description);

    /// Describes what was found, given that `matches(actual)` was false.
    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        description.append_text("was ").append_value(actual);
    }

    /// The operand of an equality check, if this matcher is one. Used by the
    /// assertion entry point to attach a diff to failures.
    fn expected_value(&self) -> Option<&Value> {
        None
    }

    /// Converts this matcher into a shareable handle without re-wrapping
    /// handles that are already shared.
    fn into_shared(self) -> SharedMatcher
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

/// A reference-counted matcher, the form combinators store their children in.
pub type SharedMatcher = Arc<dyn Matcher>;

impl Matcher for Arc<dyn Matcher> {
    fn matches(&self, actual: &Value) -> bool {
        (**self).matches(actual)
    }

    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description)
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        (**self).describe_mismatch(actual, description)
    }

    fn expected_value(&self) -> Option<&Value> {
        (**self).expected_value()
    }

    fn into_shared(self) -> SharedMatcher {
        self
    }
}

impl Matcher for Box<dyn Matcher> {
    fn matches(&self, actual: &Value) -> bool {
        (**self).matches(actual)
    }

    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description)
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        (**self).describe_mismatch(actual, description)
    }

    fn expected_value(&self) -> Option<&Value> {
        (**self).expected_value()
    }

    fn into_shared(self) -> SharedMatcher {
        Arc::from(self)
    }
}

/// The adapter applied wherever a matcher is expected: matchers pass through
/// unchanged, bare values become [`equal_to`] matchers.
pub trait IntoMatcher {
    fn into_matcher(self) -> SharedMatcher;
}

impl<M: Matcher + 'static> IntoMatcher for M {
    fn into_matcher(self) -> SharedMatcher {
        self.into_shared()
    }
}

macro_rules! impl_into_matcher_for_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoMatcher for $ty {
                fn into_matcher(self) -> SharedMatcher {
                    Arc::new(equal_to(self))
                }
            }
        )*
    };
}

impl_into_matcher_for_values!(
    Value, bool, char, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, String,
);

impl<'a> IntoMatcher for &'a str {
    fn into_matcher(self) -> SharedMatcher {
        Arc::new(equal_to(self))
    }
}

/// Renders a matcher's description.
pub fn describe(matcher: &dyn Matcher) -> String {
    let mut description = Description::new();
    matcher.describe_to(&mut description);
    description.into_string()
}

/// Renders a matcher's mismatch description for `actual`.
pub fn explain_mismatch(matcher: &dyn Matcher, actual: &Value) -> String {
    let mut description = Description::new();
    matcher.describe_mismatch(actual, &mut description);
    description.into_string()
}
