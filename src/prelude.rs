//! Everything a test module usually needs: `use verity::prelude::*;`

pub use crate::{
    all_of, any_of, assert_that, contains, contains_in_any_order, has_items,
    assertion::{
        assert_that_because, assert_true, check_that, check_that_because, check_true,
    },
    description::Description,
    diagnostics::{ErrorType, VerityError, VerityResult},
    matcher::{describe, explain_mismatch, IntoMatcher, Matcher, SharedMatcher},
    matchers::*,
    value::{to_value, Object, Value, ValueKind},
};
