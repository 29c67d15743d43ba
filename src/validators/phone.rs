//! Phone-related validators: mainland-China mobile numbers and SMS codes.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// 11 digits: leading 1, a constrained second/third digit pair, then 8 more.
// Second-digit prefixes follow the carrier allocations: 13x/15x/18x/19x in
// full, 145-149, 161-162/164-167, 170-178.
static MOBILE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^1([3589][0-9]|4[5-9]|6[1-2,4-7]|7[0-8])[0-9]{8}$").unwrap()
});

// ============================================================================
// CHINESE MOBILE
// ============================================================================

crate::validator! {
    /// Validates an 11-digit mainland-China mobile number.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::prelude::*;
    ///
    /// assert!(chinese_mobile().validate("13812345678").is_ok());
    /// assert!(chinese_mobile().validate("12345").is_err());
    /// ```
    pub ChineseMobile for str;
    rule(input) { MOBILE_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("mobile") }
    fn chinese_mobile();
}

// ============================================================================
// SMS CODE
// ============================================================================

crate::validator! {
    /// Validates an SMS verification code: exactly `len` ASCII digits.
    ///
    /// The expected length is configurable per instance; [`Default`] uses the
    /// common 6-digit form.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::prelude::*;
    ///
    /// assert!(SmsCode::default().validate("123456").is_ok());
    /// assert!(sms_code(4).validate("1234").is_ok());
    /// assert!(sms_code(4).validate("123456").is_err());
    /// ```
    pub SmsCode { len: usize } for str;
    rule(self, input) {
        input.len() == self.len && input.bytes().all(|b| b.is_ascii_digit())
    }
    error(self, input) {
        ValidationError::new("sms_code", format!("Code must be exactly {} digits", self.len))
            .with_param("expected_len", self.len.to_string())
    }
    fn sms_code(len: usize);
}

impl Default for SmsCode {
    fn default() -> Self {
        Self::new(6)
    }
}

// ============================================================================
// TESTS
// ============================================================================
