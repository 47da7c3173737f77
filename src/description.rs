//! The description sink matchers write their explanations into.
//!
//! A `Description` is an append-only buffer. Matchers receive it by `&mut` in
//! `describe_to` and `describe_mismatch`; every helper returns `&mut Self` so
//! calls chain.

use std::fmt;

use crate::{matcher::Matcher, value::Value};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    buffer: String,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends literal text.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Appends a value using canonical stringification.
    ///
    /// ```rust
    /// use verity::{Description, Value};
    /// let mut d = Description::new();
    /// d.append_text("was ").append_value(&Value::from("a"));
    /// assert_eq!(d.as_str(), "was \"a\"");
    /// ```
    pub fn append_value(&mut self, value: &Value) -> &mut Self {
        self.buffer.push_str(&value.to_string());
        self
    }

    /// Appends text as a quoted, escaped string literal.
    pub fn append_quoted(&mut self, text: &str) -> &mut Self {
        self.append_value(&Value::from(text))
    }

    /// Appends values in canonical form, framed by `start`/`end` and joined
    /// by `separator`.
    pub fn append_value_list<'a, I>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        values: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        self.append_text(start);
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                self.append_text(separator);
            }
            self.append_value(value);
        }
        self.append_text(end)
    }

    /// Appends the description of a matcher.
    pub fn append_description_of(&mut self, matcher: &dyn Matcher) -> &mut Self {
        matcher.describe_to(self);
        self
    }

    /// Appends the descriptions of several matchers, framed and joined like
    /// [`Description::append_value_list`].
    pub fn append_list<'a, I, M>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        matchers: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = &'a M>,
        M: Matcher + ?Sized + 'a,
    {
        self.append_text(start);
        for (i, matcher) in matchers.into_iter().enumerate() {
            if i > 0 {
                self.append_text(separator);
            }
            matcher.describe_to(self);
        }
        self.append_text(end)
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
