//! The matcher catalogue.
//!
//! Every matcher here implements [`crate::Matcher`] over [`crate::Value`]. Each
//! submodule pairs the matcher types with the factory functions that build
//! them; the factories are what test code normally calls.
//!
//! - **Primitives**: `equal_to`, `same_instance`, `nil_value`, `instance_of`, `anything`
//! - **Text**: `contains_string`, `starts_with`, `ends_with`, `matches_pattern`, ...
//! - **Ordering**: `greater_than`, `less_than`, `compares_equal_to`, `close_to`, ...
//! - **Collections**: `contains`, `contains_in_any_order`, `has_item`, `has_size`, ...
//! - **Maps**: `has_entry`, `has_key`, `has_value`
//! - **Logic**: `all_of`, `any_of`, `not`, `both`, `either`
//! - **Decorators**: `is`, `described_as`

pub mod collections;
pub mod decorators;
pub mod logic;
pub mod maps;
pub mod ordering;
pub mod primitives;
pub mod text;

pub use collections::*;
pub use decorators::*;
pub use logic::*;
pub use maps::*;
pub use ordering::*;
pub use primitives::*;
pub use text::*;

/// Builds an `all_of` matcher from heterogeneous arguments.
///
/// ```rust
/// use verity::prelude::*;
/// let m = all_of![greater_than(1), less_than(5)];
/// assert!(m.matches(&Value::from(3)));
/// ```
#[macro_export]
macro_rules! all_of {
    ($($matcher:expr),* $(,)?) => {{
        let matchers: Vec<$crate::SharedMatcher> =
            vec![$($crate::IntoMatcher::into_matcher($matcher)),*];
        $crate::matchers::all_of(matchers)
    }};
}

/// Builds an `any_of` matcher from heterogeneous arguments.
#[macro_export]
macro_rules! any_of {
    ($($matcher:expr),* $(,)?) => {{
        let matchers: Vec<$crate::SharedMatcher> =
            vec![$($crate::IntoMatcher::into_matcher($matcher)),*];
        $crate::matchers::any_of(matchers)
    }};
}

/// Builds an in-order `contains` matcher from heterogeneous arguments.
#[macro_export]
macro_rules! contains {
    ($($matcher:expr),* $(,)?) => {{
        let matchers: Vec<$crate::SharedMatcher> =
            vec![$($crate::IntoMatcher::into_matcher($matcher)),*];
        $crate::matchers::contains(matchers)
    }};
}

/// Builds a `contains_in_any_order` matcher from heterogeneous arguments.
#[macro_export]
macro_rules! contains_in_any_order {
    ($($matcher:expr),* $(,)?) => {{
        let matchers: Vec<$crate::SharedMatcher> =
            vec![$($crate::IntoMatcher::into_matcher($matcher)),*];
        $crate::matchers::contains_in_any_order(matchers)
    }};
}

/// Builds a `has_items` matcher from heterogeneous arguments.
#[macro_export]
macro_rules! has_items {
    ($($matcher:expr),* $(,)?) => {{
        let matchers: Vec<$crate::SharedMatcher> =
            vec![$($crate::IntoMatcher::into_matcher($matcher)),*];
        $crate::matchers::has_items(matchers)
    }};
}
