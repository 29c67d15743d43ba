//! OR combinator.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one must pass; validation short-circuits on the first success.
/// When both fail, a combined error names both underlying codes.
///
/// # Examples
///
/// ```
/// use formcheck::combinators::Or;
/// use formcheck::prelude::*;
///
/// let media = Or::new(image_path(), video_path());
/// assert!(media.validate("a.png").is_ok());
/// assert!(media.validate("a.mkv").is_ok());
/// assert!(media.validate("a.txt").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the two validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let left_err = match self.left.validate(input) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };
        let right_err = match self.right.validate(input) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };
        Err(ValidationError::new("or_failed", "no alternative matched")
            .with_param("left", left_err.code)
            .with_param("right", right_err.code))
    }
}

/// Creates an [`Or`] combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
