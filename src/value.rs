//! Dynamic form-field values.
//!
//! UI form components hand us loosely typed data: text inputs, numbers,
//! toggles, repeated groups, nested objects, and the occasional callback.
//! [`FieldValue`] is the closed set of shapes a validator can receive,
//! discriminated by tag rather than by downcasting.

use std::borrow::Cow;

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A dynamically typed form-field value.
///
/// `Null` covers both "absent" and "explicitly null". `Number` is always an
/// `f64` and may be NaN. `Object` keeps its enumerable keys in insertion
/// order. `Callable` is a marker for a callable member (e.g. the `then` of a
/// promise-shaped object); the library only ever asks *whether* something is
/// callable, never calls it.
///
/// # Examples
///
/// ```
/// use formcheck::value::FieldValue;
///
/// let v = FieldValue::from("hello");
/// assert!(v.as_str().is_some());
/// assert!(v.is_truthy());
/// assert!(!FieldValue::Null.is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Null or absent.
    Null,
    /// A boolean toggle.
    Bool(bool),
    /// A number; may be NaN or infinite.
    Number(f64),
    /// A text value.
    Str(String),
    /// An ordered sequence of values.
    Array(Vec<FieldValue>),
    /// A key-value mapping with insertion-ordered enumerable keys.
    Object(Vec<(String, FieldValue)>),
    /// A callable member.
    Callable,
}

impl FieldValue {
    /// Returns a short name for the value's shape.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Number(_) => "number",
            FieldValue::Str(_) => "string",
            FieldValue::Array(_) => "array",
            FieldValue::Object(_) => "object",
            FieldValue::Callable => "callable",
        }
    }

    /// Returns the string slice if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the number if this is a numeric value.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number as a non-negative integer, if it is one exactly.
    #[must_use]
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            FieldValue::Number(n)
                if n.is_finite() && *n >= 0.0 && n.fract() == 0.0 && *n <= usize::MAX as f64 =>
            {
                Some(*n as usize)
            }
            _ => None,
        }
    }

    /// Looks up a member of an object by key. First match wins.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        match self {
            FieldValue::Object(pairs) => {
                pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// Script-style truthiness: `Null`, `false`, `0`, `NaN`, and the empty
    /// string are falsy; every array, object, and callable is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Str(s) => !s.is_empty(),
            FieldValue::Array(_) | FieldValue::Object(_) | FieldValue::Callable => true,
        }
    }

    /// Script-style string coercion for the primitive shapes.
    ///
    /// Strings pass through, numbers render the way a UI would print them
    /// (`5`, not `5.0`), booleans become `true`/`false`. Containers and
    /// callables have no meaningful string form here and yield `None`.
    #[must_use]
    pub fn coerced_string(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Str(s) => Some(Cow::Borrowed(s.as_str())),
            FieldValue::Number(n) => Some(Cow::Owned(display_number(*n))),
            FieldValue::Bool(true) => Some(Cow::Borrowed("true")),
            FieldValue::Bool(false) => Some(Cow::Borrowed("false")),
            _ => None,
        }
    }

    /// Builds an object value from key-value pairs.
    pub fn object<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldValue)>,
    {
        FieldValue::Object(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds an object shaped like a promise: callable `then` and `catch`.
    #[must_use]
    pub fn promise_shaped() -> Self {
        FieldValue::object([("then", FieldValue::Callable), ("catch", FieldValue::Callable)])
    }
}

/// Renders a number the way script runtimes stringify it: integral values
/// without a fractional part, negative zero as `0`, NaN and infinities by
/// name.
fn display_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    format!("{n}")
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => FieldValue::Str(s),
            serde_json::Value::Array(items) => {
                FieldValue::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                FieldValue::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl serde::Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Str(s) => serializer.serialize_str(s),
            FieldValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            FieldValue::Object(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (k, v) in pairs {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            // Callables are opaque; serialize a marker so error payloads
            // stay representable.
            FieldValue::Callable => serializer.serialize_str("[callable]"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
