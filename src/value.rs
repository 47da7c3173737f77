use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
    fmt,
    sync::Arc,
};

use im::{OrdMap, Vector};
use serde::Serialize;

use crate::{diagnostics::VerityResult, err_msg};

/// A host value that can take part in matching without being converted into
/// one of the structural variants.
///
/// Both capabilities are optional: returning `None` means the object does not
/// expose that operation, and matchers fall back to identity (for equality) or
/// treat the value as uncomparable (for ordering).
pub trait Object: fmt::Debug + Send + Sync + 'static {
    /// Name used when a description mentions the value's kind.
    fn type_name(&self) -> &str;

    /// Natural textual representation, used by canonical stringification.
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    fn equals(&self, _other: &Value) -> Option<bool> {
        None
    }

    fn compare(&self, _other: &Value) -> Option<Ordering> {
        None
    }
}

/// The kind tag of a [`Value`], used by `instance_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
    Variant,
    Object,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Nil => "Nil",
            ValueKind::Bool => "Bool",
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::String => "String",
            ValueKind::List => "List",
            ValueKind::Map => "Map",
            ValueKind::Variant => "Variant",
            ValueKind::Object => "Object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a value examined by matchers.
///
/// # Examples
///
/// ```rust
/// use verity::{Value, ValueKind};
/// let n = Value::from(3.5);
/// assert_eq!(n.kind(), ValueKind::Float);
/// let s = Value::from("hello");
/// assert_eq!(s.type_name(), "String");
/// let nil = Value::default();
/// assert!(nil.is_nil());
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vector<Value>),
    Map(OrdMap<String, Value>),
    /// An enumerated value: a constructor tag with positional payload.
    Variant {
        tag: String,
        payload: Vector<Value>,
    },
    Object(Arc<dyn Object>),
}

impl Value {
    /// Builds a list value from anything convertible into values.
    ///
    /// ```rust
    /// use verity::Value;
    /// let v = Value::list([1, 2, 3]);
    /// assert_eq!(v.len(), Some(3));
    /// ```
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map value from key/value pairs.
    pub fn map<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds a tagged variant.
    ///
    /// ```rust
    /// use verity::Value;
    /// let some = Value::variant("Some", [1]);
    /// assert_eq!(some.to_string(), "Some(1)");
    /// assert_eq!(Value::variant("None", Vec::<i64>::new()).to_string(), "None");
    /// ```
    pub fn variant<I, T>(tag: impl Into<String>, payload: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Variant {
            tag: tag.into(),
            payload: payload.into_iter().map(Into::into).collect(),
        }
    }

    /// Wraps a host object.
    pub fn object<O: Object>(object: O) -> Self {
        Value::Object(Arc::new(object))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Nil,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::Variant { .. } => ValueKind::Variant,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns the type name of the value. Objects report their own name.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Object(object) => object.type_name(),
            other => other.kind().as_str(),
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns the value as a float if it is numeric.
    ///
    /// ```rust
    /// use verity::Value;
    /// assert_eq!(Value::from(2).as_f64(), Some(2.0));
    /// assert_eq!(Value::from("nope").as_f64(), None);
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vector<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&OrdMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Materialized length of a list, map or string (in chars).
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::List(items) => Some(items.len()),
            Value::Map(map) => Some(map.len()),
            Value::String(s) => Some(s.chars().count()),
            _ => None,
        }
    }

    /// Truthiness used by the boolean form of the assertion entry point.
    ///
    /// `Nil`, `false`, `0`, `0.0`, `NaN` and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Identity comparison: objects by pointer, lists and maps by shared
    /// storage, variants by payload-less tag, everything else by value.
    pub fn same_instance(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            // Empty collections hold no shared node to compare.
            (Value::List(a), Value::List(b)) => a.ptr_eq(b) || (a.is_empty() && b.is_empty()),
            (Value::Map(a), Value::Map(b)) => a.ptr_eq(b) || (a.is_empty() && b.is_empty()),
            (
                Value::Variant { tag: a, payload: pa },
                Value::Variant { tag: b, payload: pb },
            ) => a == b && pa.is_empty() && pb.is_empty(),
            _ => primitive_equality(self, other),
        }
    }

    // ------------------------------------------------------------------------
    // Canonical formatting helpers
    // ------------------------------------------------------------------------

    fn fmt_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        write!(f, "\"")?;
        for c in text.chars() {
            match c {
                '"' => write!(f, "\\\"")?,
                '\\' => write!(f, "\\\\")?,
                '\n' => write!(f, "\\n")?,
                '\r' => write!(f, "\\r")?,
                '\t' => write!(f, "\\t")?,
                other => write!(f, "{}", other)?,
            }
        }
        write!(f, "\"")
    }

    fn fmt_sequence<'a, I>(f: &mut fmt::Formatter<'_>, start: &str, items: I, end: &str) -> fmt::Result
    where
        I: IntoIterator<Item = &'a Value>,
    {
        write!(f, "{}", start)?;
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "{}", end)
    }

    fn fmt_map(f: &mut fmt::Formatter<'_>, map: &OrdMap<String, Value>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            Value::fmt_quoted(f, k)?;
            write!(f, ": {}", v)?;
        }
        write!(f, "}}")
    }
}

/// Canonical stringification: strings quoted and escaped, `Nil` as `null`,
/// lists bracketed, everything else in its natural form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => Value::fmt_quoted(f, s),
            Value::List(items) => Value::fmt_sequence(f, "[", items, "]"),
            Value::Map(map) => Value::fmt_map(f, map),
            Value::Variant { tag, payload } if payload.is_empty() => write!(f, "{}", tag),
            Value::Variant { tag, payload } => {
                write!(f, "{}", tag)?;
                Value::fmt_sequence(f, "(", payload, ")")
            }
            Value::Object(object) => object.fmt_value(f),
        }
    }
}

/// Structural equality, see [`equivalent`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        equivalent(self, other)
    }
}

// ============================================================================
// EQUALITY AND ORDERING
// ============================================================================

/// Decides whether `actual` equals `expected`.
///
/// Lists compare element-wise and recursively, maps by key set and values,
/// variants by tag and payload. Otherwise an object exposing equality decides
/// (the examined value first, then the expected one), and failing that
/// primitive equality applies: numbers across int/float, objects by identity.
pub fn equivalent(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::List(a), Value::List(e)) => {
            a.len() == e.len() && a.iter().zip(e.iter()).all(|(a, e)| equivalent(a, e))
        }
        (Value::Map(a), Value::Map(e)) => {
            a.len() == e.len()
                && e.iter()
                    .all(|(k, ev)| a.get(k).is_some_and(|av| equivalent(av, ev)))
        }
        (
            Value::Variant { tag, payload },
            Value::Variant {
                tag: expected_tag,
                payload: expected_payload,
            },
        ) => {
            tag == expected_tag
                && payload.len() == expected_payload.len()
                && payload
                    .iter()
                    .zip(expected_payload.iter())
                    .all(|(a, e)| equivalent(a, e))
        }
        (_, Value::Variant { .. }) => false,
        _ => object_equality(actual, expected)
            .unwrap_or_else(|| primitive_equality(actual, expected)),
    }
}

fn object_equality(actual: &Value, expected: &Value) -> Option<bool> {
    if let Value::Object(object) = actual {
        if let Some(result) = object.equals(expected) {
            return Some(result);
        }
    }
    match expected {
        Value::Object(object) => object.equals(actual),
        _ => None,
    }
}

fn primitive_equality(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
        (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
            compare_int_float(*a, *b) == Some(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

/// Exact ordering of an integer against a float, without rounding the
/// integer through `f64`.
fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63, the first float past `i64::MAX`.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if float.is_nan() {
        return None;
    }
    if float >= LIMIT {
        return Some(Ordering::Less);
    }
    if float < -LIMIT {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&float),
        ordering => Some(ordering),
    }
}

/// Three-way comparison of `actual` against `operand`.
///
/// Objects exposing ordering are consulted first (the examined value, then the
/// operand with the result reversed). Numbers compare across int/float,
/// strings lexicographically, booleans with `false < true`. Anything else,
/// including NaN, is uncomparable.
pub fn compare(actual: &Value, operand: &Value) -> Option<Ordering> {
    if let Value::Object(object) = actual {
        if let Some(ordering) = object.compare(operand) {
            return Some(ordering);
        }
    }
    if let Value::Object(object) = operand {
        if let Some(ordering) = object.compare(actual) {
            return Some(ordering.reverse());
        }
    }
    match (actual, operand) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Float(b)) => compare_int_float(*a, *b),
        (Value::Float(a), Value::Int(b)) => compare_int_float(*b, *a).map(Ordering::reverse),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! impl_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Int)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Int)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::list(items)
    }
}

impl From<Vector<Value>> for Value {
    fn from(items: Vector<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(map: BTreeMap<String, T>) -> Self {
        Value::map(map)
    }
}

impl<T: Into<Value>> From<HashMap<String, T>> for Value {
    fn from(map: HashMap<String, T>) -> Self {
        Value::map(map)
    }
}

impl From<OrdMap<String, Value>> for Value {
    fn from(map: OrdMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Nil, Value::Float),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::list(items),
            serde_json::Value::Object(map) => Value::map(map),
        }
    }
}

/// Converts any serializable host value into a [`Value`] through its JSON
/// data model.
///
/// ```rust
/// use serde::Serialize;
/// use verity::{to_value, Value};
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let v = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(v, Value::map([("x", 1), ("y", 2)]));
/// ```
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> VerityResult<Value> {
    serde_json::to_value(value)
        .map(Value::from)
        .map_err(|e| err_msg!(Conversion, "value is not representable: {}", e).with_source(e))
}
