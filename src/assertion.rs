//! The assertion entry point.
//!
//! A failure report always has the same three-line shape:
//!
//! ```text
//! {reason}
//! Expected: {matcher description}
//!      but: {mismatch description}
//! ```
//!
//! The first line is empty when no reason is given. Tooling parses this
//! layout, so nothing else is ever added to the message; extras such as
//! string diffs travel in the diagnostic help.
//!
//! `check_*` functions return the failure as a [`VerityError`]; `assert_*`
//! functions and the [`assert_that!`](crate::assert_that!) macro panic with it.

use crate::{
    description::Description,
    diagnostics::{VerityError, VerityResult},
    matcher::{IntoMatcher, Matcher},
    report::string_diff,
    settings::settings,
    value::Value,
};

/// Evaluates `matcher` against `actual`, building the failure report on
/// mismatch.
pub fn verify(reason: &str, actual: &Value, matcher: &dyn Matcher) -> VerityResult<()> {
    if matcher.matches(actual) {
        return Ok(());
    }
    let mut description = Description::new();
    description
        .append_text(reason)
        .append_text("\nExpected: ")
        .append_description_of(matcher)
        .append_text("\n     but: ");
    matcher.describe_mismatch(actual, &mut description);
    let message = description.into_string();
    tracing::debug!(%message, "assertion failed");
    Err(VerityError::AssertionFailed {
        message,
        help: string_diff(matcher.expected_value(), actual, settings()),
        source: None,
    })
}

pub fn check_that(actual: impl Into<Value>, matcher: impl IntoMatcher) -> VerityResult<()> {
    check_that_because("", actual, matcher)
}

pub fn check_that_because(
    reason: &str,
    actual: impl Into<Value>,
    matcher: impl IntoMatcher,
) -> VerityResult<()> {
    verify(reason, &actual.into(), &*matcher.into_matcher())
}

/// Boolean form: `actual` must be truthy.
pub fn check_true(reason: &str, actual: impl Into<Value>) -> VerityResult<()> {
    let actual = actual.into();
    if actual.is_truthy() {
        return Ok(());
    }
    let mut description = Description::new();
    description
        .append_text(reason)
        .append_text("\nExpected: true\n     but: was ")
        .append_value(&actual);
    let message = description.into_string();
    tracing::debug!(%message, "assertion failed");
    Err(VerityError::AssertionFailed {
        message,
        help: None,
        source: None,
    })
}

#[track_caller]
fn fail(result: VerityResult<()>) {
    if let Err(err) = result {
        panic!("{}", err);
    }
}

/// Panics with the failure report if `actual` does not satisfy `matcher`.
///
/// ```rust
/// use verity::prelude::*;
/// assert_that(Value::list([1, 2, 3]), has_item(3));
/// ```
#[track_caller]
pub fn assert_that(actual: impl Into<Value>, matcher: impl IntoMatcher) {
    fail(check_that(actual, matcher));
}

#[track_caller]
pub fn assert_that_because(reason: &str, actual: impl Into<Value>, matcher: impl IntoMatcher) {
    fail(check_that_because(reason, actual, matcher));
}

#[track_caller]
pub fn assert_true(reason: &str, actual: impl Into<Value>) {
    fail(check_true(reason, actual));
}

/// Asserts with a matcher, optionally followed by a reason, or asserts that a
/// single value is truthy.
///
/// ```rust
/// use verity::prelude::*;
/// assert_that!(5, greater_than(3));
/// assert_that!("abc", starts_with("a"), "prefix should be kept");
/// assert_that!(true);
/// ```
#[macro_export]
macro_rules! assert_that {
    ($actual:expr, $matcher:expr, $reason:expr $(,)?) => {
        $crate::assert_that_because($reason, $actual, $matcher)
    };
    ($actual:expr, $matcher:expr $(,)?) => {
        $crate::assert_that($actual, $matcher)
    };
    ($actual:expr $(,)?) => {
        $crate::assert_true("", $actual)
    };
}
