//! # formcheck
//!
//! Value validators for UI form fields.
//!
//! Every check is a pure, deterministic predicate over a single value. Two
//! surfaces are exposed:
//!
//! - Typed validators implementing [`Validate`](foundation::Validate), which
//!   compose with `.and()` / `.or()` / `.not()` and report structured
//!   [`ValidationError`](foundation::ValidationError)s.
//! - The [`Rule`](rules::Rule) table: the name → predicate mapping form
//!   components drive from their schemas, evaluated over dynamic
//!   [`FieldValue`](value::FieldValue)s and returning plain booleans.
//!
//! ## Quick Start
//!
//! ```
//! use formcheck::prelude::*;
//!
//! // Typed layer
//! assert!(email().validate("a@b.com").is_ok());
//! let media = image_path().or(video_path());
//! assert!(media.validate("clip.mp4").is_ok());
//!
//! // Rule table
//! assert_eq!(check("mobile", &FieldValue::from("13812345678"), None), Ok(true));
//! assert_eq!(check("empty", &FieldValue::from("   "), None), Ok(true));
//! ```

// ValidationError is the error type of every validate() call; boxing it
// would put an allocation on the failure path of each check.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validators;
pub mod value;
