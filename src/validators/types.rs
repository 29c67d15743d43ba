//! Shape checks over dynamic form values.
//!
//! Each validator discriminates on the [`FieldValue`] tag. `IsObject` is
//! deliberately strict: arrays, null, and callables are not objects.

use crate::foundation::ValidationError;
use crate::value::FieldValue;

crate::validator! {
    /// Validates that a value is a text value.
    pub IsString for FieldValue;
    rule(input) { matches!(input, FieldValue::Str(_)) }
    error(input) { ValidationError::type_mismatch("string", input.type_name()) }
    fn is_string();
}

crate::validator! {
    /// Validates that a value is an array.
    pub IsArray for FieldValue;
    rule(input) { matches!(input, FieldValue::Array(_)) }
    error(input) { ValidationError::type_mismatch("array", input.type_name()) }
    fn is_array();
}

crate::validator! {
    /// Validates that a value is a key-value object.
    ///
    /// Arrays, null, and callables do not count.
    pub IsObject for FieldValue;
    rule(input) { matches!(input, FieldValue::Object(_)) }
    error(input) { ValidationError::type_mismatch("object", input.type_name()) }
    fn is_object();
}

crate::validator! {
    /// Validates that a value is callable.
    pub IsCallable for FieldValue;
    rule(input) { matches!(input, FieldValue::Callable) }
    error(input) { ValidationError::type_mismatch("callable", input.type_name()) }
    fn is_callable();
}

crate::validator! {
    /// Validates that a value is shaped like a promise: an object whose
    /// `then` and `catch` members are callable.
    ///
    /// The check is structural, not nominal — any object carrying the two
    /// callable members qualifies.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::prelude::*;
    ///
    /// assert!(promise_like().validate(&FieldValue::promise_shaped()).is_ok());
    /// assert!(promise_like().validate(&FieldValue::Object(vec![])).is_err());
    /// ```
    pub PromiseLike for FieldValue;
    rule(input) {
        matches!(input, FieldValue::Object(_))
            && matches!(input.get("then"), Some(FieldValue::Callable))
            && matches!(input.get("catch"), Some(FieldValue::Callable))
    }
    error(input) { ValidationError::type_mismatch("promise-shaped object", input.type_name()) }
    fn promise_like();
}

// ============================================================================
// TESTS
// ============================================================================
