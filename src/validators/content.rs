//! String content validators: email, URL, CJK-only text.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// Local part: word chars, groups separated by a single `-` or `.`.
// Domain: alphanumeric labels separated by `.` or `-`, alphanumeric TLD.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[0-9A-Za-z_]+((-[0-9A-Za-z_]+)|(\.[0-9A-Za-z_]+))*@[A-Za-z0-9]+((\.|-)[A-Za-z0-9]+)*\.[A-Za-z0-9]+$",
    )
    .unwrap()
});

// Full URL grammar: scheme, optional userinfo, dotted-quad or domain-label
// host, optional port, optional path/query fragment.
static URL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^((https|http|ftp|rtsp|mms)://)(([0-9a-zA-Z_!~*'().&=+$%-]+: )?[0-9a-zA-Z_!~*'().&=+$%-]+@)?(([0-9]{1,3}.){3}[0-9]{1,3}|([0-9a-zA-Z_!~*'()-]+.)*([0-9a-zA-Z][0-9a-zA-Z-]{0,61})?[0-9a-zA-Z].[a-zA-Z]{2,6})(:[0-9]{1,4})?((/?)|(/[0-9a-zA-Z_!~*'().;?:@&=+$,%#-]+)+/?)$",
    )
    .unwrap()
});

// CJK Unified Ideographs, U+4E00..=U+9FA5.
static CHINESE_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[\x{4e00}-\x{9fa5}]+$").unwrap());

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Validates email address format.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::prelude::*;
    ///
    /// assert!(email().validate("a@b.com").is_ok());
    /// assert!(email().validate("not-an-email").is_err());
    /// ```
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email") }
    fn email();
}

// ============================================================================
// URL
// ============================================================================

crate::validator! {
    /// Validates full URLs with http, https, ftp, rtsp, or mms schemes.
    pub Url for str;
    rule(input) { URL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("url") }
    fn url();
}

// ============================================================================
// CHINESE-ONLY TEXT
// ============================================================================

crate::validator! {
    /// Validates that a string consists entirely of common Chinese ideographs.
    pub ChineseOnly for str;
    rule(input) { CHINESE_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("chinese") }
    fn chinese_only();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn email_accepts_plain_addresses() {
        let v = email();
        assert!(v.validate("a@b.com").is_ok());
        assert!(v.validate("first.last@example.co").is_ok());
        assert!(v.validate("user-name@my-host.org").is_ok());
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        let v = email();
        assert!(v.validate("not-an-email").is_err());
        assert!(v.validate("@example.com").is_err());
        assert!(v.validate("user@").is_err());
        assert!(v.validate("user@host").is_err()); // no tld
        assert!(v.validate("us er@host.com").is_err());
    }

    #[test]
    fn url_accepts_common_forms() {
        let v = url();
        assert!(v.validate("http://example.com").is_ok());
        assert!(v.validate("https://example.com/path/to/page").is_ok());
        assert!(v.validate("ftp://files.example.org:2121/dir").is_ok());
        assert!(v.validate("rtsp://10.0.0.1/stream").is_ok());
        assert!(v.validate("https://user@example.com/").is_ok());
    }

    #[test]
    fn url_rejects_missing_or_unknown_scheme() {
        let v = url();
        assert!(v.validate("example.com").is_err());
        assert!(v.validate("gopher://example.com").is_err());
        assert!(v.validate("http://").is_err());
    }

    #[test]
    fn chinese_only_accepts_ideographs() {
        let v = chinese_only();
        assert!(v.validate("中文").is_ok());
        assert!(v.validate("汉字测试").is_ok());
    }

    #[test]
    fn chinese_only_rejects_mixed_and_empty() {
        let v = chinese_only();
        assert!(v.validate("中文abc").is_err());
        assert!(v.validate("abc").is_err());
        assert!(v.validate("").is_err());
        assert!(v.validate("中 文").is_err());
    }
}
