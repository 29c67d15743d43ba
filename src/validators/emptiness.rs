//! Emptiness check over dynamic form values.

use crate::foundation::ValidationError;
use crate::value::FieldValue;

crate::validator! {
    /// Validates that a value is empty.
    ///
    /// Empty means: null; `false`; the number 0 or NaN; a string that is
    /// blank after trimming spaces, tabs, and line breaks; or an array or
    /// object with no elements or keys. `true`, non-zero numbers, and
    /// callables are never empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::prelude::*;
    ///
    /// assert!(empty().validate(&FieldValue::from("   ")).is_ok());
    /// assert!(empty().validate(&FieldValue::Number(f64::NAN)).is_ok());
    /// assert!(empty().validate(&FieldValue::from("x")).is_err());
    /// ```
    pub Empty for FieldValue;
    rule(input) { is_empty_value(input) }
    error(input) {
        ValidationError::new("not_empty", "Value is not empty")
            .with_param("actual", input.type_name())
    }
    fn empty();
}

fn is_empty_value(value: &FieldValue) -> bool {
    match value {
        FieldValue::Null => true,
        FieldValue::Bool(b) => !b,
        FieldValue::Number(n) => *n == 0.0 || n.is_nan(),
        FieldValue::Str(s) => s.trim_matches([' ', '\t', '\n', '\r']).is_empty(),
        FieldValue::Array(items) => items.is_empty(),
        FieldValue::Object(pairs) => pairs.is_empty(),
        FieldValue::Callable => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    fn is_empty(value: impl Into<FieldValue>) -> bool {
        Empty.validate(&value.into()).is_ok()
    }

    #[test]
    fn blank_values_are_empty() {
        assert!(is_empty(FieldValue::Null));
        assert!(is_empty(""));
        assert!(is_empty("   "));
        assert!(is_empty(" \t\r\n "));
        assert!(is_empty(false));
        assert!(is_empty(0i64));
        assert!(is_empty(-0.0));
        assert!(is_empty(f64::NAN));
        assert!(is_empty(FieldValue::Array(vec![])));
        assert!(is_empty(FieldValue::Object(vec![])));
    }

    #[test]
    fn meaningful_values_are_not_empty() {
        assert!(!is_empty("x"));
        assert!(!is_empty(" x "));
        assert!(!is_empty(true));
        assert!(!is_empty(1i64));
        assert!(!is_empty(-1.5));
        assert!(!is_empty(vec![1i64]));
        assert!(!is_empty(FieldValue::object([("a", FieldValue::Number(1.0))])));
        assert!(!is_empty(FieldValue::Callable));
    }

    #[test]
    fn zero_is_empty_but_other_small_numbers_are_not() {
        assert!(is_empty(0.0));
        assert!(!is_empty(0.001));
        assert!(!is_empty(f64::MIN_POSITIVE));
    }
}
