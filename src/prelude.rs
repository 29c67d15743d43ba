//! Convenient imports.
//!
//! ```
//! use formcheck::prelude::*;
//!
//! assert!(email().validate("a@b.com").is_ok());
//! assert!(Rule::Empty.check(&FieldValue::Null, None));
//! ```

pub use crate::foundation::{AsValidatable, Validate, ValidateExt, ValidationError};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::combinators::{And, Not, Or, and, not, or};

pub use crate::rules::{Rule, UnknownRuleError, check};

pub use crate::value::FieldValue;
