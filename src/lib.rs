//! # Verity
//!
//! Composable, self-describing matchers for test assertions.
//!
//! A [`Matcher`] is a predicate over a dynamic [`Value`] that can also
//! describe what it expects and explain why a value failed. Matchers compose
//! through combinators (`all_of`, `any_of`, `not`, `both`/`either`,
//! `described_as`), and the assertion entry point turns a failed match into a
//! report of the form:
//!
//! ```text
//! {reason}
//! Expected: {description}
//!      but: {mismatch}
//! ```
//!
//! ```rust
//! use verity::prelude::*;
//!
//! let words = Value::list(["beta", "alpha"]);
//! assert_that!(&words, contains_in_any_order(vec!["alpha", "beta"]));
//! assert_that!(&words, every_item(instance_of(ValueKind::String)));
//!
//! let err = check_that(1, equal_to(2)).unwrap_err();
//! assert_eq!(err.to_string(), "\nExpected: 2\n     but: was 1");
//! ```

pub use crate::assertion::{
    assert_that, assert_that_because, assert_true, check_that, check_that_because, check_true,
    verify,
};
pub use crate::description::Description;
pub use crate::diagnostics::{ErrorType, VerityError, VerityResult};
pub use crate::matcher::{describe, explain_mismatch, IntoMatcher, Matcher, SharedMatcher};
pub use crate::value::{to_value, Object, Value, ValueKind};

pub mod assertion;
pub mod description;
pub mod diagnostics;
pub mod matcher;
pub mod matchers;
pub mod prelude;
mod report;
pub mod settings;
pub mod value;
