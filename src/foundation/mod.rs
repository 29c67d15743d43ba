//! Core validation types and traits.
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`AsValidatable`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type and compose with
//! `.and()` / `.or()` / `.not()`. Dynamic [`FieldValue`]s flow into typed
//! validators through [`AsValidatable`] via [`Validate::validate_any`].
//!
//! [`FieldValue`]: crate::value::FieldValue

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
pub use validatable::AsValidatable;

/// A validation result.
pub type ValidationResult = Result<(), ValidationError>;
