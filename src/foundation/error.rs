//! Validation failure type.
//!
//! A failed check reports a machine-readable code, a human-readable message,
//! and optional key-value params for message templating. All string fields
//! are `Cow<'static, str>` so the common case of static codes and messages
//! allocates nothing.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

type Param = (Cow<'static, str>, Cow<'static, str>);

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```
/// use formcheck::foundation::ValidationError;
///
/// let error = ValidationError::new("sms_code", "code must be 6 digits")
///     .with_param("expected_len", "6");
/// assert_eq!(error.code, "sms_code");
/// assert_eq!(error.param("expected_len"), Some("6"));
/// ```
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Ordered key-value params (typically 0-2 entries).
    pub params: SmallVec<[Param; 2]>,
}

impl ValidationError {
    /// Creates an error from a code and a message.
    ///
    /// Static strings are borrowed; `format!`-built strings are moved in.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a param to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a param value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Serializes the error to a JSON value for transport to a UI layer.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        Self::new("type_mismatch", format!("Expected {expected}, got {actual}"))
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// Creates an "out_of_range" error.
    pub fn out_of_range<T: fmt::Display>(min: T, max: T, actual: T) -> Self {
        Self::new(
            "out_of_range",
            format!("Value must be between {min} and {max}"),
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
