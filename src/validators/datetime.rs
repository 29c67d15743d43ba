//! Date validator over dynamic form values.
//!
//! Mirrors how script runtimes build a `Date` from loosely typed input:
//! numeric-looking values (numbers *and* numeric strings) are
//! epoch-millisecond timestamps; everything else must be a calendar date
//! string.

use crate::foundation::ValidationError;
use crate::validators::numeric::is_decimal_str;
use crate::value::FieldValue;

/// Largest representable timestamp magnitude: 100 million days in
/// milliseconds either side of the epoch.
const MAX_EPOCH_MS: f64 = 8.64e15;

// ============================================================================
// DATE-LIKE
// ============================================================================

crate::validator! {
    /// Validates that a value represents a date.
    ///
    /// Falsy values (null, `false`, 0, NaN, the empty string) fail. Input
    /// whose string form matches the decimal grammar is treated as an
    /// epoch-millisecond timestamp, so `"1700000000000"` is a timestamp and
    /// not a literal date string. Other strings must be calendar dates such
    /// as `2024-06-01`, `2024/6/1`, or `2024-06-01T10:30:00+08:00`.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::prelude::*;
    ///
    /// let v = date_like();
    /// assert!(v.validate(&FieldValue::Number(1_700_000_000_000.0)).is_ok());
    /// assert!(v.validate(&FieldValue::from("2024-02-29")).is_ok());
    /// assert!(v.validate(&FieldValue::from("invalid-date-string")).is_err());
    /// assert!(v.validate(&FieldValue::from("")).is_err());
    /// ```
    pub DateLike for FieldValue;
    rule(input) { represents_date(input) }
    error(input) { ValidationError::invalid_format("date") }
    fn date_like();
}

fn represents_date(input: &FieldValue) -> bool {
    if !input.is_truthy() {
        return false;
    }
    if let Some(s) = input.coerced_string() {
        if is_decimal_str(&s) {
            // Epoch-millisecond timestamp.
            return matches!(s.parse::<f64>(), Ok(ms) if ms.abs() <= MAX_EPOCH_MS);
        }
    }
    match input {
        FieldValue::Str(s) => is_calendar_date(s),
        // `true` coerces to the 1 ms timestamp.
        FieldValue::Bool(_) => true,
        _ => false,
    }
}

// ============================================================================
// CALENDAR PARSING
// ============================================================================

/// Whether a string is a calendar date, optionally followed by a `T` or
/// space separated time-of-day with fractional seconds and a `Z`/`±HH:MM`
/// offset.
fn is_calendar_date(s: &str) -> bool {
    let (date_part, time_part) = match s.find(['T', ' ']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };

    let Some((year, month, day)) = parse_date_fields(date_part) else {
        return false;
    };
    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return false;
    }

    time_part.is_none_or(is_time_of_day)
}

/// Parses `YYYY-MM[-DD]` or `YYYY/MM[/DD]` with 1-2 digit month and day.
/// A missing day defaults to the first of the month.
fn parse_date_fields(s: &str) -> Option<(u32, u32, u32)> {
    let sep = if s.contains('/') { '/' } else { '-' };
    let mut fields = s.split(sep);

    let year = fields.next()?;
    let month = fields.next()?;
    let day = fields.next();
    if fields.next().is_some() {
        return None;
    }

    let year = parse_digits(year, 4, 4)?;
    let month = parse_digits(month, 1, 2)?;
    let day = match day {
        Some(d) => parse_digits(d, 1, 2)?,
        None => 1,
    };
    Some((year, month, day))
}

/// Whether a string is `HH:MM[:SS[.fff]]` with an optional trailing `Z` or
/// `±HH:MM` offset.
fn is_time_of_day(s: &str) -> bool {
    let base = strip_utc_offset(s);

    let (clock, fraction) = match base.split_once('.') {
        Some((clock, frac)) => (clock, Some(frac)),
        None => (base, None),
    };
    if let Some(frac) = fraction {
        if frac.is_empty() || frac.len() > 3 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }

    let mut fields = clock.split(':');
    let (Some(hour), Some(minute)) = (fields.next(), fields.next()) else {
        return false;
    };
    let second = fields.next();
    if fields.next().is_some() {
        return false;
    }

    let Some(hour) = parse_digits(hour, 2, 2) else {
        return false;
    };
    let Some(minute) = parse_digits(minute, 2, 2) else {
        return false;
    };
    let second = match second {
        Some(sec) => match parse_digits(sec, 2, 2) {
            Some(sec) => sec,
            None => return false,
        },
        None => 0,
    };

    hour <= 23 && minute <= 59 && second <= 59
}

/// Strips a trailing `Z` or `±HH:MM` offset, if present.
fn strip_utc_offset(s: &str) -> &str {
    if let Some(rest) = s.strip_suffix('Z') {
        return rest;
    }
    if s.len() >= 6 {
        if let Some((head, tail)) = s.split_at_checked(s.len() - 6) {
            let b = tail.as_bytes();
            if (b[0] == b'+' || b[0] == b'-')
                && b[1].is_ascii_digit()
                && b[2].is_ascii_digit()
                && b[3] == b':'
                && b[4].is_ascii_digit()
                && b[5].is_ascii_digit()
            {
                return head;
            }
        }
    }
    s
}

/// Parses an all-digit field whose length is within `[min_len, max_len]`.
fn parse_digits(s: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if s.len() < min_len || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    fn check(value: impl Into<FieldValue>) -> bool {
        DateLike.validate(&value.into()).is_ok()
    }

    #[test]
    fn numeric_timestamps_are_dates() {
        assert!(check(1_700_000_000_000i64));
        assert!(check(0.5)); // 0 itself is falsy, but any other in-range number works
        assert!(check(-86_400_000i64));
    }

    #[test]
    fn numeric_strings_are_timestamps_not_literals() {
        assert!(check("1700000000000"));
        assert!(check("2020")); // epoch ms, not a year string
    }

    #[test]
    fn timestamps_beyond_the_date_range_fail() {
        assert!(!check(8.65e15));
        assert!(!check(f64::INFINITY));
        assert!(!check("9000000000000000000"));
    }

    #[test]
    fn falsy_values_fail() {
        assert!(!check(FieldValue::Null));
        assert!(!check(""));
        assert!(!check(0i64));
        assert!(!check(f64::NAN));
        assert!(!check(false));
    }

    #[test]
    fn true_is_the_one_millisecond_timestamp() {
        assert!(check(true));
    }

    #[test]
    fn calendar_dates_parse() {
        assert!(check("2024-06-01"));
        assert!(check("2024/6/1"));
        assert!(check("2024-02"));
        assert!(check("2024-06-01 10:30"));
        assert!(check("2024-06-01T10:30:00"));
        assert!(check("2024-06-01T10:30:00.123Z"));
        assert!(check("2024-06-01T10:30:00+08:00"));
    }

    #[test]
    fn impossible_dates_fail() {
        assert!(!check("invalid-date-string"));
        assert!(!check("2024-13-01"));
        assert!(!check("2024-00-01"));
        assert!(!check("2024-04-31"));
        assert!(!check("2023-02-29")); // not a leap year
        assert!(!check("2024-06-01T24:00:00"));
        assert!(!check("2024-06-01T10:61:00"));
    }

    #[test]
    fn leap_years_respect_century_rule() {
        assert!(check("2024-02-29"));
        assert!(check("2000-02-29"));
        assert!(!check("1900-02-29"));
    }

    #[test]
    fn containers_and_callables_fail() {
        assert!(!check(FieldValue::Array(vec![FieldValue::Number(2020.0)])));
        assert!(!check(FieldValue::object([("year", FieldValue::Number(2020.0))])));
        assert!(!check(FieldValue::Callable));
    }
}
