//! Ordering comparison and numeric tolerance.

use std::cmp::Ordering;

use crate::{
    description::Description,
    diagnostics::VerityResult,
    err_msg,
    matcher::Matcher,
    value::{compare, Value},
};

fn relation(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less than",
        Ordering::Equal => "equal to",
        Ordering::Greater => "greater than",
    }
}

/// Matches when the three-way comparison of the examined value against the
/// operand falls within `[min, max]`.
#[derive(Debug, Clone)]
pub struct OrderingComparison {
    operand: Value,
    min: Ordering,
    max: Ordering,
}

impl OrderingComparison {
    fn new(operand: impl Into<Value>, min: Ordering, max: Ordering) -> Self {
        Self {
            operand: operand.into(),
            min,
            max,
        }
    }
}

impl Matcher for OrderingComparison {
    fn matches(&self, actual: &Value) -> bool {
        compare(actual, &self.operand).is_some_and(|ordering| self.min <= ordering && ordering <= self.max)
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("a value ").append_text(relation(self.min));
        if self.min != self.max {
            description.append_text(" or ").append_text(relation(self.max));
        }
        description.append_text(" ").append_value(&self.operand);
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        match compare(actual, &self.operand) {
            Some(ordering) => {
                description
                    .append_value(actual)
                    .append_text(" was ")
                    .append_text(relation(ordering))
                    .append_text(" ")
                    .append_value(&self.operand);
            }
            None => {
                description
                    .append_text("was ")
                    .append_value(actual)
                    .append_text(", which cannot be compared with ")
                    .append_value(&self.operand);
            }
        }
    }
}

pub fn greater_than(operand: impl Into<Value>) -> OrderingComparison {
    OrderingComparison::new(operand, Ordering::Greater, Ordering::Greater)
}

pub fn greater_than_or_equal_to(operand: impl Into<Value>) -> OrderingComparison {
    OrderingComparison::new(operand, Ordering::Equal, Ordering::Greater)
}

pub fn less_than(operand: impl Into<Value>) -> OrderingComparison {
    OrderingComparison::new(operand, Ordering::Less, Ordering::Less)
}

pub fn less_than_or_equal_to(operand: impl Into<Value>) -> OrderingComparison {
    OrderingComparison::new(operand, Ordering::Less, Ordering::Equal)
}

/// Matches values that compare as equal, which may differ from structural
/// equality (`1` and `1.0`, or objects with their own ordering).
pub fn compares_equal_to(operand: impl Into<Value>) -> OrderingComparison {
    OrderingComparison::new(operand, Ordering::Equal, Ordering::Equal)
}

/// Matches numbers within `tolerance` of `operand`, inclusive.
#[derive(Debug, Clone, Copy)]
pub struct CloseTo {
    operand: f64,
    tolerance: f64,
}

impl CloseTo {
    fn difference(&self, actual: &Value) -> Option<f64> {
        actual
            .as_f64()
            .map(|n| (n - self.operand).abs())
            .filter(|d| !d.is_nan())
    }
}

impl Matcher for CloseTo {
    fn matches(&self, actual: &Value) -> bool {
        self.difference(actual).is_some_and(|d| d <= self.tolerance)
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a numeric value within ")
            .append_value(&Value::Float(self.tolerance))
            .append_text(" of ")
            .append_value(&Value::Float(self.operand));
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        let Some(difference) = self.difference(actual) else {
            description.append_text("was ").append_value(actual);
            return;
        };
        description
            .append_value(actual)
            .append_text(" differed by ")
            .append_value(&Value::Float(difference));
    }
}

/// Fails with a configuration error for a negative or NaN tolerance, or an
/// operand that is not finite.
///
/// ```rust
/// use verity::prelude::*;
/// let m = close_to(5.0, 0.5).unwrap();
/// assert!(m.matches(&Value::from(5.4)));
/// assert!(!m.matches(&Value::from(5.6)));
/// ```
pub fn close_to(operand: f64, tolerance: f64) -> VerityResult<CloseTo> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(err_msg!(
            Configuration,
            "tolerance must be a non-negative number, got {}",
            tolerance
        ));
    }
    if !operand.is_finite() {
        return Err(err_msg!(
            Configuration,
            "operand must be a finite number, got {}",
            operand
        ));
    }
    Ok(CloseTo { operand, tolerance })
}
