//! String matchers. Values that are not strings never match.

use regex::Regex;

use crate::{
    description::Description, diagnostics::VerityResult, err_msg, matcher::Matcher, value::Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Anywhere,
    Start,
    End,
}

impl Position {
    fn relationship(&self) -> &'static str {
        match self {
            Position::Anywhere => "containing",
            Position::Start => "starting with",
            Position::End => "ending with",
        }
    }
}

/// Substring, prefix or suffix matching.
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    substring: String,
    position: Position,
}

impl Matcher for SubstringMatcher {
    fn matches(&self, actual: &Value) -> bool {
        let Some(text) = actual.as_str() else {
            return false;
        };
        match self.position {
            Position::Anywhere => text.contains(&self.substring),
            Position::Start => text.starts_with(&self.substring),
            Position::End => text.ends_with(&self.substring),
        }
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a string ")
            .append_text(self.position.relationship())
            .append_text(" ")
            .append_quoted(&self.substring);
    }
}

/// ```rust
/// use verity::prelude::*;
/// assert!(contains_string("ell").matches(&Value::from("hello")));
/// ```
pub fn contains_string(substring: impl Into<String>) -> SubstringMatcher {
    SubstringMatcher {
        substring: substring.into(),
        position: Position::Anywhere,
    }
}

pub fn starts_with(prefix: impl Into<String>) -> SubstringMatcher {
    SubstringMatcher {
        substring: prefix.into(),
        position: Position::Start,
    }
}

pub fn ends_with(suffix: impl Into<String>) -> SubstringMatcher {
    SubstringMatcher {
        substring: suffix.into(),
        position: Position::End,
    }
}

#[derive(Debug, Clone)]
pub struct IsEqualIgnoringCase {
    expected: String,
}

impl Matcher for IsEqualIgnoringCase {
    fn matches(&self, actual: &Value) -> bool {
        actual
            .as_str()
            .is_some_and(|text| text.to_lowercase() == self.expected.to_lowercase())
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a string equal to ")
            .append_quoted(&self.expected)
            .append_text(" ignoring case");
    }
}

pub fn equal_to_ignoring_case(expected: impl Into<String>) -> IsEqualIgnoringCase {
    IsEqualIgnoringCase {
        expected: expected.into(),
    }
}

/// Compares strings after trimming and collapsing runs of white space.
#[derive(Debug, Clone)]
pub struct IsEqualIgnoringWhiteSpace {
    expected: String,
}

fn collapse_white_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Matcher for IsEqualIgnoringWhiteSpace {
    fn matches(&self, actual: &Value) -> bool {
        actual
            .as_str()
            .is_some_and(|text| collapse_white_space(text) == collapse_white_space(&self.expected))
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a string equal to ")
            .append_quoted(&self.expected)
            .append_text(" ignoring white space");
    }
}

pub fn equal_to_ignoring_white_space(expected: impl Into<String>) -> IsEqualIgnoringWhiteSpace {
    IsEqualIgnoringWhiteSpace {
        expected: expected.into(),
    }
}

/// Matches strings containing a match of a regular expression. Anchor the
/// pattern to require a whole-string match.
#[derive(Debug, Clone)]
pub struct MatchesPattern {
    pattern: Regex,
}

impl Matcher for MatchesPattern {
    fn matches(&self, actual: &Value) -> bool {
        actual
            .as_str()
            .is_some_and(|text| self.pattern.is_match(text))
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a string matching the pattern ")
            .append_quoted(self.pattern.as_str());
    }
}

/// Fails with a configuration error when `pattern` is not a valid regular
/// expression.
pub fn matches_pattern(pattern: &str) -> VerityResult<MatchesPattern> {
    let pattern = Regex::new(pattern).map_err(|e| {
        err_msg!(Configuration, "invalid pattern {:?}", pattern)
            .with_help("the pattern must be a valid regular expression")
            .with_source(e)
    })?;
    Ok(MatchesPattern { pattern })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diagnostics::ErrorType, matcher::describe};

    #[test]
    fn test_substring_positions() {
        let hello = Value::from("hello world");
        assert!(contains_string("o w").matches(&hello));
        assert!(starts_with("hello").matches(&hello));
        assert!(!starts_with("world").matches(&hello));
        assert!(ends_with("world").matches(&hello));
        assert!(!ends_with("hello").matches(&hello));
    }

    #[test]
    fn test_substring_descriptions() {
        assert_eq!(describe(&contains_string("abc")), "a string containing \"abc\"");
        assert_eq!(describe(&starts_with("a")), "a string starting with \"a\"");
        assert_eq!(describe(&ends_with("z")), "a string ending with \"z\"");
    }

    #[test]
    fn test_non_strings_do_not_match() {
        assert!(!contains_string("1").matches(&Value::from(1)));
        assert!(!equal_to_ignoring_case("a").matches(&Value::Nil));
    }

    #[test]
    fn test_ignoring_case_and_white_space() {
        assert!(equal_to_ignoring_case("HeLLo").matches(&Value::from("hello")));
        assert!(equal_to_ignoring_white_space("a  b\tc").matches(&Value::from(" a b c ")));
        assert!(!equal_to_ignoring_white_space("a b").matches(&Value::from("ab")));
    }

    #[test]
    fn test_pattern() -> Result<(), crate::VerityError> {
        let m = matches_pattern(r"^\d{3}-\d{4}$")?;
        assert!(m.matches(&Value::from("555-1234")));
        assert!(!m.matches(&Value::from("5551234")));
        assert_eq!(describe(&m), "a string matching the pattern \"^\\\\d{3}-\\\\d{4}$\"");
        Ok(())
    }

    #[test]
    fn test_invalid_pattern_is_a_configuration_error() {
        let err = matches_pattern("(unclosed").unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Configuration);
    }
}
