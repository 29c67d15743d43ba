//! The named rule table consumed by form components.
//!
//! A form schema refers to validators by name (`"email"`, `"range"`, ...);
//! [`Rule`] is that mapping. Every rule evaluates to a plain boolean over a
//! dynamic [`FieldValue`] plus an optional parameter, never panicking:
//! unsupported value shapes and malformed params simply fail the check.

use thiserror::Error;

use crate::foundation::Validate;
use crate::validators::{
    ChineseMobile, ChineseOnly, Contains, DateLike, Email, Empty, ImagePath, IsArray, IsCallable,
    IsObject, IsString, PromiseLike, SmsCode, Url, VideoPath, in_range, is_decimal_str,
};
use crate::value::FieldValue;

/// Default SMS code length when the `code` rule gets no param.
const DEFAULT_CODE_LEN: usize = 6;

// ============================================================================
// RULE
// ============================================================================

/// A named validation rule.
///
/// # Examples
///
/// ```
/// use formcheck::rules::Rule;
/// use formcheck::value::FieldValue;
///
/// assert!(Rule::Email.check(&FieldValue::from("a@b.com"), None));
/// assert!(!Rule::Email.check(&FieldValue::from("not-an-email"), None));
///
/// let bounds = FieldValue::from(vec![1i64, 10]);
/// assert!(Rule::Range.check(&FieldValue::Number(5.0), Some(&bounds)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Email address format.
    Email,
    /// Mainland-China mobile number.
    Mobile,
    /// Full URL.
    Url,
    /// Timestamp or calendar date.
    Date,
    /// Decimal number grammar, applied to the value's string form.
    Number,
    /// String shape.
    String,
    /// CJK-only text.
    Chinese,
    /// Substring or array-element containment; param is the needle.
    Contains,
    /// Inclusive numeric range; param is a `[min, max]` pair.
    Range,
    /// Empty value (also reachable by the name `isEmpty`).
    Empty,
    /// Object shape.
    Object,
    /// Array shape.
    Array,
    /// SMS code; param is the expected digit count, default 6.
    Code,
    /// Callable shape.
    Func,
    /// Promise-shaped object.
    Promise,
    /// Image filename.
    Image,
    /// Video filename.
    Video,
}

/// Lookup failure for [`Rule::from_name`] and [`check`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown validation rule `{0}`")]
pub struct UnknownRuleError(pub String);

impl Rule {
    /// Every rule, once, in table order.
    pub const ALL: [Rule; 17] = [
        Rule::Email,
        Rule::Mobile,
        Rule::Url,
        Rule::Date,
        Rule::Number,
        Rule::String,
        Rule::Chinese,
        Rule::Contains,
        Rule::Range,
        Rule::Empty,
        Rule::Object,
        Rule::Array,
        Rule::Code,
        Rule::Func,
        Rule::Promise,
        Rule::Image,
        Rule::Video,
    ];

    /// Resolves a rule by name. `"isEmpty"` is an alias for `"empty"`.
    pub fn from_name(name: &str) -> Result<Self, UnknownRuleError> {
        match name {
            "email" => Ok(Rule::Email),
            "mobile" => Ok(Rule::Mobile),
            "url" => Ok(Rule::Url),
            "date" => Ok(Rule::Date),
            "number" => Ok(Rule::Number),
            "string" => Ok(Rule::String),
            "chinese" => Ok(Rule::Chinese),
            "contains" => Ok(Rule::Contains),
            "range" => Ok(Rule::Range),
            "empty" | "isEmpty" => Ok(Rule::Empty),
            "object" => Ok(Rule::Object),
            "array" => Ok(Rule::Array),
            "code" => Ok(Rule::Code),
            "func" => Ok(Rule::Func),
            "promise" => Ok(Rule::Promise),
            "image" => Ok(Rule::Image),
            "video" => Ok(Rule::Video),
            other => Err(UnknownRuleError(other.to_string())),
        }
    }

    /// The rule's canonical name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Email => "email",
            Rule::Mobile => "mobile",
            Rule::Url => "url",
            Rule::Date => "date",
            Rule::Number => "number",
            Rule::String => "string",
            Rule::Chinese => "chinese",
            Rule::Contains => "contains",
            Rule::Range => "range",
            Rule::Empty => "empty",
            Rule::Object => "object",
            Rule::Array => "array",
            Rule::Code => "code",
            Rule::Func => "func",
            Rule::Promise => "promise",
            Rule::Image => "image",
            Rule::Video => "video",
        }
    }

    /// Evaluates the rule against a value.
    ///
    /// Rules over string input reject non-string values rather than raising;
    /// `number` additionally accepts numbers and booleans through string
    /// coercion. `contains` requires a param, `range` a `[min, max]` numeric
    /// pair, and `code` takes an optional integer length.
    #[must_use]
    pub fn check(&self, value: &FieldValue, param: Option<&FieldValue>) -> bool {
        match self {
            Rule::Email => Email.validate_any(value).is_ok(),
            Rule::Mobile => ChineseMobile.validate_any(value).is_ok(),
            Rule::Url => Url.validate_any(value).is_ok(),
            Rule::Date => DateLike.validate(value).is_ok(),
            Rule::Number => value
                .coerced_string()
                .is_some_and(|s| is_decimal_str(&s)),
            Rule::String => IsString.validate(value).is_ok(),
            Rule::Chinese => ChineseOnly.validate_any(value).is_ok(),
            Rule::Contains => match param {
                Some(needle) => Contains::new(needle.clone()).validate(value).is_ok(),
                None => false,
            },
            Rule::Range => check_range(value, param),
            Rule::Empty => Empty.validate(value).is_ok(),
            Rule::Object => IsObject.validate(value).is_ok(),
            Rule::Array => IsArray.validate(value).is_ok(),
            Rule::Code => check_code(value, param),
            Rule::Func => IsCallable.validate(value).is_ok(),
            Rule::Promise => PromiseLike.validate(value).is_ok(),
            Rule::Image => ImagePath.validate_any(value).is_ok(),
            Rule::Video => VideoPath.validate_any(value).is_ok(),
        }
    }
}

fn check_range(value: &FieldValue, param: Option<&FieldValue>) -> bool {
    let Some(n) = value.as_f64() else {
        return false;
    };
    let Some(FieldValue::Array(bounds)) = param else {
        return false;
    };
    let lo = bounds.first().and_then(FieldValue::as_f64);
    let hi = bounds.get(1).and_then(FieldValue::as_f64);
    match (lo, hi) {
        (Some(lo), Some(hi)) => in_range(lo, hi).validate(&n).is_ok(),
        _ => false,
    }
}

fn check_code(value: &FieldValue, param: Option<&FieldValue>) -> bool {
    let len = match param {
        None => DEFAULT_CODE_LEN,
        Some(p) => match p.as_usize() {
            Some(len) => len,
            None => return false,
        },
    };
    SmsCode::new(len).validate_any(value).is_ok()
}

// ============================================================================
// NAME-INDEXED ENTRY POINT
// ============================================================================

/// Evaluates a rule by name.
///
/// This is the single call surface a form component needs: a rule name from
/// its schema, the field's current value, and an optional param.
///
/// # Errors
///
/// Returns [`UnknownRuleError`] when no rule carries the given name.
///
/// # Examples
///
/// ```
/// use formcheck::rules::check;
/// use formcheck::value::FieldValue;
///
/// assert_eq!(check("mobile", &FieldValue::from("13812345678"), None), Ok(true));
/// assert_eq!(check("isEmpty", &FieldValue::from("   "), None), Ok(true));
/// assert!(check("no-such-rule", &FieldValue::Null, None).is_err());
/// ```
pub fn check(
    name: &str,
    value: &FieldValue,
    param: Option<&FieldValue>,
) -> Result<bool, UnknownRuleError> {
    Ok(Rule::from_name(name)?.check(value, param))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_resolves_by_its_canonical_name() {
        for rule in Rule::ALL {
            assert_eq!(Rule::from_name(rule.name()), Ok(rule));
        }
    }

    #[test]
    fn is_empty_aliases_empty() {
        assert_eq!(Rule::from_name("isEmpty"), Ok(Rule::Empty));
        assert_eq!(Rule::from_name("empty"), Ok(Rule::Empty));
    }

    #[test]
    fn unknown_names_error() {
        let err = Rule::from_name("isempty").unwrap_err();
        assert_eq!(err, UnknownRuleError("isempty".to_string()));
        assert!(Rule::from_name("EMAIL").is_err());
    }

    #[test]
    fn string_rules_reject_non_string_values() {
        assert!(!Rule::Email.check(&FieldValue::Number(1.0), None));
        assert!(!Rule::Mobile.check(&FieldValue::Null, None));
        assert!(!Rule::Image.check(&FieldValue::Array(vec![]), None));
    }

    #[test]
    fn number_rule_coerces_numbers_and_strings() {
        assert!(Rule::Number.check(&FieldValue::Number(3.14), None));
        assert!(Rule::Number.check(&FieldValue::from("-5"), None));
        assert!(!Rule::Number.check(&FieldValue::Number(f64::NAN), None));
        assert!(!Rule::Number.check(&FieldValue::from("abc"), None));
        assert!(!Rule::Number.check(&FieldValue::Bool(true), None));
        assert!(!Rule::Number.check(&FieldValue::Array(vec![]), None));
    }

    #[test]
    fn contains_requires_a_param() {
        let value = FieldValue::from("hello");
        assert!(!Rule::Contains.check(&value, None));
        assert!(Rule::Contains.check(&value, Some(&FieldValue::from("ell"))));
    }

    #[test]
    fn range_needs_a_numeric_pair() {
        let five = FieldValue::Number(5.0);
        assert!(Rule::Range.check(&five, Some(&FieldValue::from(vec![1i64, 10]))));
        assert!(!Rule::Range.check(&five, None));
        assert!(!Rule::Range.check(&five, Some(&FieldValue::from(vec![1i64]))));
        assert!(!Rule::Range.check(&five, Some(&FieldValue::from("1..10"))));
        assert!(!Rule::Range.check(
            &FieldValue::from("5"),
            Some(&FieldValue::from(vec![1i64, 10]))
        ));
    }

    #[test]
    fn range_ignores_extra_bounds_entries() {
        let bounds = FieldValue::from(vec![1i64, 10, 99]);
        assert!(Rule::Range.check(&FieldValue::Number(5.0), Some(&bounds)));
    }

    #[test]
    fn code_len_param_overrides_default() {
        let code = FieldValue::from("1234");
        assert!(!Rule::Code.check(&code, None));
        assert!(Rule::Code.check(&code, Some(&FieldValue::Number(4.0))));
        assert!(!Rule::Code.check(&code, Some(&FieldValue::Number(4.5))));
        assert!(!Rule::Code.check(&code, Some(&FieldValue::from("4"))));
    }

    #[test]
    fn check_by_name_matches_direct_calls() {
        let value = FieldValue::from("photo.jpg?x=1");
        assert_eq!(check("image", &value, None), Ok(true));
        assert_eq!(check("video", &value, None), Ok(false));
        assert!(check("no-such-rule", &value, None).is_err());
    }
}
