//! Macros for declaring validators with minimal boilerplate.
//!
//! - [`validator!`] — struct definition + `Validate` impl + factory fn
//! - [`compose!`] — AND-chain multiple validators
//! - [`any_of!`] — OR-chain multiple validators

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Declares a complete validator: the struct, its `Validate` implementation,
/// a constructor for field structs, and an optional factory function.
///
/// `#[derive(Debug, Clone)]` is always applied; unit validators additionally
/// get `Copy`, `PartialEq`, `Eq`, and `Hash`.
///
/// # Variants
///
/// **Unit validator** (zero-sized):
/// ```
/// use formcheck::validator;
/// use formcheck::foundation::{Validate, ValidationError};
///
/// validator! {
///     /// Rejects empty input.
///     pub NonBlank for str;
///     rule(input) { !input.trim().is_empty() }
///     error(input) { ValidationError::new("non_blank", "must not be blank") }
///     fn non_blank();
/// }
///
/// assert!(non_blank().validate("x").is_ok());
/// assert!(non_blank().validate("  ").is_err());
/// ```
///
/// **Struct with fields** (constructor generated from the fields):
/// ```
/// use formcheck::validator;
/// use formcheck::foundation::{Validate, ValidationError};
///
/// validator! {
///     pub MaxChars { max: usize } for str;
///     rule(self, input) { input.chars().count() <= self.max }
///     error(self, input) { ValidationError::new("max_chars", "too long") }
///     fn max_chars(max: usize);
/// }
///
/// assert!(max_chars(3).validate("abc").is_ok());
/// assert!(MaxChars::new(3).validate("abcd").is_err());
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + factory fn ──────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields, no factory ───────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSITION MACROS
// ============================================================================

/// Composes validators with AND logic.
///
/// ```
/// use formcheck::compose;
/// use formcheck::prelude::*;
///
/// let v = compose![decimal(), sms_code(4)];
/// assert!(v.validate("0042").is_ok());
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        use $crate::foundation::ValidateExt as _;
        $first$(.and($rest))+
    }};
}

/// Composes validators with OR logic.
///
/// ```
/// use formcheck::any_of;
/// use formcheck::prelude::*;
///
/// let v = any_of![image_path(), video_path()];
/// assert!(v.validate("clip.mp4").is_ok());
/// assert!(v.validate("photo.png").is_ok());
/// assert!(v.validate("doc.pdf").is_err());
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        use $crate::foundation::ValidateExt as _;
        $first$(.or($rest))+
    }};
}

// ============================================================================
// TESTS
// ============================================================================
