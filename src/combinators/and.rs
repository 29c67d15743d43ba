//! AND combinator.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both must pass; the error of the first failing validator is returned.
///
/// # Examples
///
/// ```
/// use formcheck::combinators::And;
/// use formcheck::prelude::*;
///
/// let v = And::new(decimal(), sms_code(6));
/// assert!(v.validate("123456").is_ok());
/// assert!(v.validate("12345").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the two validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an [`And`] combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    struct MinChars(usize);

    impl Validate for MinChars {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.chars().count() >= self.0 {
                Ok(())
            } else {
                Err(ValidationError::new("min_chars", "too short"))
            }
        }
    }

    struct MaxChars(usize);

    impl Validate for MaxChars {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.chars().count() <= self.0 {
                Ok(())
            } else {
                Err(ValidationError::new("max_chars", "too long"))
            }
        }
    }

    #[test]
    fn both_pass() {
        let v = And::new(MinChars(2), MaxChars(5));
        assert!(v.validate("abc").is_ok());
    }

    #[test]
    fn left_failure_short_circuits() {
        let v = And::new(MinChars(5), MaxChars(2));
        let err = v.validate("abc").unwrap_err();
        assert_eq!(err.code, "min_chars");
    }

    #[test]
    fn chains_through_ext_trait() {
        let v = MinChars(1).and(MaxChars(4)).and(MinChars(2));
        assert!(v.validate("abc").is_ok());
        assert!(v.validate("a").is_err());
    }
}
