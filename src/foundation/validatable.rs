//! Input conversion for `validate_any`.
//!
//! A GAT-based conversion trait lets one validator accept several input
//! representations: `String` where `str` is expected, or a dynamic
//! [`FieldValue`] in front of any typed validator. Conversions that cannot
//! succeed return a `type_mismatch` error instead of panicking.

use std::borrow::Borrow;

use crate::foundation::ValidationError;
use crate::value::FieldValue;

// ============================================================================
// AS VALIDATABLE
// ============================================================================

/// Types convertible to a validator's input type.
///
/// The GAT output can be a borrowed reference or an owned value; the two are
/// unified through [`Borrow`].
pub trait AsValidatable<T: ?Sized> {
    /// The converted form, borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts `self` for validation.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

// ============================================================================
// REFLEXIVE AND STD CONVERSIONS
// ============================================================================

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<str> for std::borrow::Cow<'_, str> {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_ref())
    }
}

impl AsValidatable<f64> for f64 {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        Ok(*self)
    }
}

impl AsValidatable<f64> for i64 {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        Ok(*self as f64)
    }
}

impl AsValidatable<f64> for i32 {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        Ok(f64::from(*self))
    }
}

impl AsValidatable<bool> for bool {
    type Output<'a> = bool;

    #[inline]
    fn as_validatable(&self) -> Result<bool, ValidationError> {
        Ok(*self)
    }
}

impl<T> AsValidatable<[T]> for Vec<T> {
    type Output<'a>
        = &'a [T]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[T], ValidationError> {
        Ok(self.as_slice())
    }
}

impl<T> AsValidatable<[T]> for [T] {
    type Output<'a>
        = &'a [T]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[T], ValidationError> {
        Ok(self)
    }
}

// ============================================================================
// FIELD VALUE CONVERSIONS
// ============================================================================

impl AsValidatable<FieldValue> for FieldValue {
    type Output<'a>
        = &'a FieldValue
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&FieldValue, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for FieldValue {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        match self {
            FieldValue::Str(s) => Ok(s.as_str()),
            other => Err(ValidationError::type_mismatch("string", other.type_name())),
        }
    }
}

impl AsValidatable<f64> for FieldValue {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        match self {
            FieldValue::Number(n) => Ok(*n),
            other => Err(ValidationError::type_mismatch("number", other.type_name())),
        }
    }
}

impl AsValidatable<bool> for FieldValue {
    type Output<'a> = bool;

    #[inline]
    fn as_validatable(&self) -> Result<bool, ValidationError> {
        match self {
            FieldValue::Bool(b) => Ok(*b),
            other => Err(ValidationError::type_mismatch("boolean", other.type_name())),
        }
    }
}

impl AsValidatable<[FieldValue]> for FieldValue {
    type Output<'a>
        = &'a [FieldValue]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[FieldValue], ValidationError> {
        match self {
            FieldValue::Array(items) => Ok(items.as_slice()),
            other => Err(ValidationError::type_mismatch("array", other.type_name())),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
