//! `is` and `described_as`.

use crate::{
    description::Description,
    diagnostics::VerityResult,
    err_msg,
    matcher::{IntoMatcher, Matcher, SharedMatcher},
    value::Value,
};

/// Syntactic sugar: a matcher is returned unchanged, a bare value becomes an
/// equality matcher.
///
/// ```rust
/// use verity::prelude::*;
/// assert!(is(3).matches(&Value::from(3)));
/// assert_eq!(describe(&*is(greater_than(2))), "a value greater than 2");
/// ```
pub fn is(matcher: impl IntoMatcher) -> SharedMatcher {
    matcher.into_matcher()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Placeholder(usize),
}

/// Splits a template on `%<digits>` placeholders. A `%` not followed by a
/// digit is literal text.
fn parse_template(template: &str) -> VerityResult<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut chars = template.char_indices().peekable();
    while let Some((_, c)) = chars.next() {
        if c != '%' || !chars.peek().is_some_and(|(_, next)| next.is_ascii_digit()) {
            text.push(c);
            continue;
        }
        let mut digits = String::new();
        while let Some((_, d)) = chars.peek().copied().filter(|(_, d)| d.is_ascii_digit()) {
            digits.push(d);
            chars.next();
        }
        let index = digits.parse::<usize>().map_err(|e| {
            err_msg!(Configuration, "placeholder %{} in {:?} is out of range", digits, template)
                .with_source(e)
        })?;
        if !text.is_empty() {
            segments.push(Segment::Text(std::mem::take(&mut text)));
        }
        segments.push(Segment::Placeholder(index));
    }
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    Ok(segments)
}

/// Overrides a matcher's description; matching and mismatch reporting are
/// delegated unchanged.
#[derive(Clone)]
pub struct DescribedAs {
    segments: Vec<Segment>,
    values: Vec<Value>,
    matcher: SharedMatcher,
}

impl DescribedAs {
    /// A description with no placeholders.
    pub(crate) fn fixed(text: &str, matcher: impl IntoMatcher) -> Self {
        Self {
            segments: vec![Segment::Text(text.to_string())],
            values: Vec::new(),
            matcher: matcher.into_matcher(),
        }
    }
}

impl Matcher for DescribedAs {
    fn matches(&self, actual: &Value) -> bool {
        self.matcher.matches(actual)
    }

    fn describe_to(&self, description: &mut Description) {
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => {
                    description.append_text(text);
                }
                Segment::Placeholder(index) => {
                    if let Some(value) = self.values.get(*index) {
                        description.append_value(value);
                    }
                }
            }
        }
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        self.matcher.describe_mismatch(actual, description);
    }

    fn expected_value(&self) -> Option<&Value> {
        self.matcher.expected_value()
    }
}

/// Fails with a configuration error if the template refers to a value that
/// was not supplied.
///
/// ```rust
/// use verity::prelude::*;
/// let m = described_as("value was %0", equal_to(5), [5]).unwrap();
/// assert_eq!(describe(&m), "value was 5");
/// ```
pub fn described_as<I>(template: &str, matcher: impl IntoMatcher, values: I) -> VerityResult<DescribedAs>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let segments = parse_template(template)?;
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    let missing = segments.iter().find_map(|segment| match segment {
        Segment::Placeholder(index) if *index >= values.len() => Some(*index),
        _ => None,
    });
    if let Some(index) = missing {
        return Err(err_msg!(
            Configuration,
            "template {:?} refers to %{} but only {} value(s) were given",
            template,
            index,
            values.len()
        )
        .with_help("placeholders are numbered from %0"));
    }
    Ok(DescribedAs {
        segments,
        values,
        matcher: matcher.into_matcher(),
    })
}
