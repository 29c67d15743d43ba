//! Core validation traits.

use std::borrow::Borrow;

use crate::foundation::ValidationError;
use crate::foundation::validatable::AsValidatable;

// ============================================================================
// VALIDATE
// ============================================================================

/// The trait every validator implements.
///
/// Validators are generic over their input type. `Input` may be unsized
/// (`str`, `[T]`), so checks borrow rather than take ownership.
///
/// # Examples
///
/// ```
/// use formcheck::foundation::{Validate, ValidationError};
///
/// struct ExactLen(usize);
///
/// impl Validate for ExactLen {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().count() == self.0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("exact_len", "wrong length"))
///         }
///     }
/// }
///
/// assert!(ExactLen(2).validate("ab").is_ok());
/// ```
pub trait Validate {
    /// The type being validated.
    type Input: ?Sized;

    /// Checks the input, returning a structured error on failure.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Validates any value convertible to `Self::Input`.
    ///
    /// This is how `str` validators run against dynamic [`FieldValue`]s: the
    /// conversion itself can fail with a `type_mismatch` error, which counts
    /// as a validation failure.
    ///
    /// [`FieldValue`]: crate::value::FieldValue
    fn validate_any<S>(&self, value: &S) -> Result<(), ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let converted = value.as_validatable()?;
        self.validate(converted.borrow())
    }
}

// ============================================================================
// VALIDATE EXT
// ============================================================================

/// Combinator methods, implemented for every validator.
///
/// # Examples
///
/// ```
/// use formcheck::prelude::*;
///
/// let numeric_code = decimal().and(sms_code(4));
/// assert!(numeric_code.validate("1234").is_ok());
/// assert!(numeric_code.validate("12345").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one validator must pass. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================
