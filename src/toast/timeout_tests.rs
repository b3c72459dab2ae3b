//! Tests for toast/timeout

use std::time::Duration;

use super::*;
use proptest::prelude::*;

#[test]
fn test_parse_plain_integer() {
    assert_eq!(Timeout::parse("100"), Timeout::Millis(100));
    assert_eq!(Timeout::parse("0"), Timeout::Millis(0));
}

#[test]
fn test_parse_ignores_trailing_garbage() {
    assert_eq!(Timeout::parse("250ms"), Timeout::Millis(250));
    assert_eq!(Timeout::parse("1.9"), Timeout::Millis(1));
    assert_eq!(Timeout::parse("3 seconds"), Timeout::Millis(3));
}

#[test]
fn test_parse_leading_whitespace_and_sign() {
    assert_eq!(Timeout::parse("   42"), Timeout::Millis(42));
    assert_eq!(Timeout::parse("+7"), Timeout::Millis(7));
    assert_eq!(Timeout::parse("-5"), Timeout::Millis(-5));
}

#[test]
fn test_parse_hex_prefix() {
    assert_eq!(Timeout::parse("0x1A"), Timeout::Millis(26));
    assert_eq!(Timeout::parse("0X10"), Timeout::Millis(16));
    assert_eq!(Timeout::parse("-0x10"), Timeout::Millis(-16));
}

#[test]
fn test_parse_non_numeric_is_nan() {
    assert_eq!(Timeout::parse("soon"), Timeout::NotANumber);
    assert_eq!(Timeout::parse(""), Timeout::NotANumber);
    assert_eq!(Timeout::parse("-"), Timeout::NotANumber);
    assert_eq!(Timeout::parse("0x"), Timeout::NotANumber);
    assert_eq!(Timeout::parse("ms100"), Timeout::NotANumber);
}

#[test]
fn test_parse_overflow_saturates() {
    assert_eq!(
        Timeout::parse("99999999999999999999999"),
        Timeout::Millis(i64::MAX)
    );
}

#[test]
fn test_from_value_coerces_numbers_and_floats() {
    assert_eq!(Timeout::from_value(100), Timeout::Millis(100));
    assert_eq!(Timeout::from_value(1.5), Timeout::Millis(1));
    assert_eq!(Timeout::from_value(f64::NAN), Timeout::NotANumber);
}

#[test]
fn test_delay_clamps_negative_to_zero() {
    assert_eq!(Timeout::Millis(-20).delay(), Some(Duration::ZERO));
    assert_eq!(Timeout::Millis(150).delay(), Some(Duration::from_millis(150)));
    assert_eq!(Timeout::NotANumber.delay(), None);
}

#[test]
fn test_display() {
    assert_eq!(Timeout::Millis(3000).to_string(), "3000ms");
    assert_eq!(Timeout::NotANumber.to_string(), "NaN");
    assert!(Timeout::NotANumber.is_nan());
    assert!(!Timeout::Millis(1).is_nan());
}

// Any integer rendered as text parses back to the same number of milliseconds,
// with or without a unit suffix.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_integer_text_parses_to_same_value(
        ms in any::<i64>(),
        suffix in prop::sample::select(vec!["", "ms", " ", "px", ".25"])
    ) {
        let input = format!("{}{}", ms, suffix);
        prop_assert_eq!(Timeout::parse(&input), Timeout::Millis(ms));
    }

    #[test]
    fn prop_alphabetic_input_is_nan(input in "[a-zA-Z][a-zA-Z0-9]*") {
        prop_assert_eq!(Timeout::parse(&input), Timeout::NotANumber);
    }
}
