//! Containment check over dynamic form values.

use crate::foundation::ValidationError;
use crate::value::FieldValue;

crate::validator! {
    /// Validates that a value contains a needle.
    ///
    /// String haystacks use substring search, with the needle coerced to its
    /// string form. Array haystacks use strict element equality, so a NaN
    /// needle never matches — the same contract as an index-of search.
    /// Other haystack shapes always fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::prelude::*;
    ///
    /// let v = contains(FieldValue::from("ell"));
    /// assert!(v.validate(&FieldValue::from("hello")).is_ok());
    ///
    /// let v = contains(FieldValue::Number(2.0));
    /// assert!(v.validate(&FieldValue::from(vec![1i64, 2, 3])).is_ok());
    /// assert!(v.validate(&FieldValue::from(vec![1i64, 3])).is_err());
    /// ```
    pub Contains { needle: FieldValue } for FieldValue;
    rule(self, input) {
        match input {
            FieldValue::Str(haystack) => self
                .needle
                .coerced_string()
                .is_some_and(|needle| haystack.contains(needle.as_ref())),
            FieldValue::Array(items) => items.iter().any(|item| *item == self.needle),
            _ => false,
        }
    }
    error(self, input) {
        ValidationError::new("not_contained", "Needle not found in value")
            .with_param("haystack", input.type_name())
    }
    fn contains(needle: FieldValue);
}

// ============================================================================
// TESTS
// ============================================================================
