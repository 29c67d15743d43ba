//! Numeric validators: decimal grammar and inclusive ranges.

use std::fmt::Display;
use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

// Optional sign; digits with optional fractional part, leading-dot fraction,
// or the `d.de+d` exponential form.
static DECIMAL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+|[0-9]\.[0-9]+e\+[0-9]+)$").unwrap()
});

/// Whether a string matches the decimal-number grammar.
///
/// Shared with the date validator, which treats numeric-looking input as an
/// epoch-millisecond timestamp.
#[must_use]
pub fn is_decimal_str(input: &str) -> bool {
    DECIMAL_REGEX.is_match(input)
}

// ============================================================================
// DECIMAL
// ============================================================================

crate::validator! {
    /// Validates that a string is a decimal number.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::prelude::*;
    ///
    /// assert!(decimal().validate("3.14").is_ok());
    /// assert!(decimal().validate("-5").is_ok());
    /// assert!(decimal().validate(".5").is_ok());
    /// assert!(decimal().validate("abc").is_err());
    /// ```
    pub Decimal for str;
    rule(input) { is_decimal_str(input) }
    error(input) { ValidationError::invalid_format("decimal number") }
    fn decimal();
}

// ============================================================================
// IN RANGE
// ============================================================================

/// Validates that a value lies within an inclusive `[min, max]` range.
///
/// # Examples
///
/// ```
/// use formcheck::prelude::*;
///
/// let v = in_range(1.0, 10.0);
/// assert!(v.validate(&5.0).is_ok());
/// assert!(v.validate(&11.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InRange<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Display + Copy> InRange<T> {
    /// Creates a new inclusive range validator.
    #[must_use]
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: PartialOrd + Display + Copy> Validate for InRange<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if *input >= self.min && *input <= self.max {
            Ok(())
        } else {
            Err(ValidationError::out_of_range(self.min, self.max, *input))
        }
    }
}

/// Creates an [`InRange`] validator.
#[must_use]
pub fn in_range<T: PartialOrd + Display + Copy>(min: T, max: T) -> InRange<T> {
    InRange::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_accepts_number_forms() {
        let v = decimal();
        assert!(v.validate("3.14").is_ok());
        assert!(v.validate("-5").is_ok());
        assert!(v.validate("+5").is_ok());
        assert!(v.validate(".5").is_ok());
        assert!(v.validate("-.5").is_ok());
        assert!(v.validate("10.").is_ok());
        assert!(v.validate("1.5e+3").is_ok());
    }

    #[test]
    fn decimal_rejects_non_numbers() {
        let v = decimal();
        assert!(v.validate("abc").is_err());
        assert!(v.validate("").is_err());
        assert!(v.validate(".").is_err());
        assert!(v.validate("1.5e-3").is_err()); // negative exponents not in grammar
        assert!(v.validate("12.3.4").is_err());
        assert!(v.validate("1,000").is_err());
    }

    #[test]
    fn in_range_is_inclusive() {
        let v = in_range(1.0, 10.0);
        assert!(v.validate(&1.0).is_ok());
        assert!(v.validate(&10.0).is_ok());
        assert!(v.validate(&5.5).is_ok());
        assert!(v.validate(&0.9).is_err());
        assert!(v.validate(&10.1).is_err());
    }

    #[test]
    fn in_range_rejects_nan() {
        let v = in_range(1.0, 10.0);
        assert!(v.validate(&f64::NAN).is_err());
    }

    #[test]
    fn in_range_works_for_integers() {
        let v = in_range(1i64, 10i64);
        assert!(v.validate(&5).is_ok());
        assert!(v.validate(&11).is_err());
    }

    #[test]
    fn out_of_range_error_reports_bounds() {
        let err = in_range(1, 10).validate(&11).unwrap_err();
        assert_eq!(err.code, "out_of_range");
        assert_eq!(err.param("min"), Some("1"));
        assert_eq!(err.param("max"), Some("10"));
        assert_eq!(err.param("actual"), Some("11"));
    }
}
