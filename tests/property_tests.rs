//! Property-based tests.

use formcheck::prelude::*;
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCE: check(x) == check(x)
// ============================================================================

proptest! {
    #[test]
    fn email_idempotent(s in ".*") {
        let v = FieldValue::from(s);
        prop_assert_eq!(Rule::Email.check(&v, None), Rule::Email.check(&v, None));
    }

    #[test]
    fn number_idempotent(s in ".*") {
        let v = FieldValue::from(s);
        prop_assert_eq!(Rule::Number.check(&v, None), Rule::Number.check(&v, None));
    }

    #[test]
    fn date_idempotent_over_numbers(n in any::<f64>()) {
        let v = FieldValue::Number(n);
        prop_assert_eq!(Rule::Date.check(&v, None), Rule::Date.check(&v, None));
    }

    #[test]
    fn empty_idempotent(s in ".*") {
        let v = FieldValue::from(s);
        prop_assert_eq!(Rule::Empty.check(&v, None), Rule::Empty.check(&v, None));
    }
}

// ============================================================================
// TOTALITY: every rule answers for arbitrary strings and numbers
// ============================================================================

proptest! {
    #[test]
    fn all_rules_total_over_strings(s in ".*") {
        let v = FieldValue::from(s);
        for rule in Rule::ALL {
            let _ = rule.check(&v, None);
        }
    }

    #[test]
    fn all_rules_total_over_numbers(n in any::<f64>()) {
        let v = FieldValue::Number(n);
        for rule in Rule::ALL {
            let _ = rule.check(&v, None);
        }
    }
}

// ============================================================================
// AGREEMENT BETWEEN THE TWO LAYERS
// ============================================================================

proptest! {
    #[test]
    fn rule_table_agrees_with_typed_email(s in ".*") {
        let by_rule = Rule::Email.check(&FieldValue::from(s.as_str()), None);
        let by_validator = email().validate(&s).is_ok();
        prop_assert_eq!(by_rule, by_validator);
    }

    #[test]
    fn rule_table_agrees_with_typed_code(s in "[0-9]{0,10}") {
        let by_rule = Rule::Code.check(&FieldValue::from(s.as_str()), None);
        let by_validator = SmsCode::default().validate(&s).is_ok();
        prop_assert_eq!(by_rule, by_validator);
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,12}") {
        let a = decimal();
        let b = sms_code(6);
        let a_ok = a.validate(&s).is_ok();
        let b_ok = b.validate(&s).is_ok();
        prop_assert_eq!(a.and(b).validate(&s).is_ok(), a_ok && b_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(s in ".{0,12}") {
        let a = image_path();
        let b = video_path();
        let a_ok = a.validate(&s).is_ok();
        let b_ok = b.validate(&s).is_ok();
        prop_assert_eq!(a.or(b).validate(&s).is_ok(), a_ok || b_ok);
    }

    #[test]
    fn double_negation_agrees(s in ".{0,12}") {
        let v = decimal();
        prop_assert_eq!(
            v.not().not().validate(&s).is_ok(),
            v.validate(&s).is_ok()
        );
    }
}

// ============================================================================
// RANGE SEMANTICS
// ============================================================================

proptest! {
    #[test]
    fn range_matches_direct_comparison(n in any::<f64>(), lo in -1000.0..1000.0f64, hi in -1000.0..1000.0f64) {
        let bounds = FieldValue::from(vec![lo, hi]);
        let by_rule = Rule::Range.check(&FieldValue::Number(n), Some(&bounds));
        prop_assert_eq!(by_rule, n >= lo && n <= hi);
    }
}
