//! NOT combinator.

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator.
///
/// Succeeds when the inner validator fails and vice versa.
///
/// # Examples
///
/// ```
/// use formcheck::combinators::not;
/// use formcheck::prelude::*;
///
/// let non_numeric = not(decimal());
/// assert!(non_numeric.validate("abc").is_ok());
/// assert!(non_numeric.validate("42").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "inner validator unexpectedly passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a [`Not`] combinator.
pub fn not<V: Validate>(inner: V) -> Not<V> {
    Not::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    struct Blank;

    impl Validate for Blank {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.trim().is_empty() {
                Ok(())
            } else {
                Err(ValidationError::new("blank", "not blank"))
            }
        }
    }

    #[test]
    fn inverts_result() {
        let v = not(Blank);
        assert!(v.validate("text").is_ok());
        assert!(v.validate("   ").is_err());
    }

    #[test]
    fn double_negation_agrees_with_inner() {
        let v = Blank.not().not();
        assert!(v.validate("  ").is_ok());
        assert!(v.validate("text").is_err());
    }
}
