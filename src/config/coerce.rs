//! Type coercion for textual configuration values

use crate::domain::ConfigValue;
use once_cell::sync::Lazy;
use regex::Regex;

/// Optionally signed decimal literal: `12`, `-3`, `+0.5`, `.75`, `5.`.
/// No exponents, no surrounding whitespace.
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("valid number regex")
});

/// Infer the value kind of `raw`. First match wins:
/// boolean (case-insensitive `true`/`false`), then number, then the string as-is.
pub fn coerce_value(raw: &str) -> ConfigValue {
    if raw.eq_ignore_ascii_case("true") {
        return ConfigValue::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return ConfigValue::Bool(false);
    }
    if let Some(number) = parse_number(raw) {
        return number;
    }
    ConfigValue::String(raw.to_string())
}

fn parse_number(raw: &str) -> Option<ConfigValue> {
    if !NUMBER_RE.is_match(raw) {
        return None;
    }
    if !raw.contains('.') {
        if let Ok(i) = raw.parse::<i64>() {
            return Some(ConfigValue::from(i));
        }
        if let Ok(u) = raw.parse::<u64>() {
            return Some(ConfigValue::from(u));
        }
    }
    // Digit strings long enough to overflow f64 parse to infinity; those stay strings.
    raw.parse::<f64>().ok().and_then(ConfigValue::from_f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booleans_are_case_insensitive() {
        assert_eq!(coerce_value("true"), ConfigValue::Bool(true));
        assert_eq!(coerce_value("FALSE"), ConfigValue::Bool(false));
        assert_eq!(coerce_value("True"), ConfigValue::Bool(true));
        assert_eq!(coerce_value("yes").kind(), "string");
        assert_eq!(coerce_value(" true").kind(), "string");
    }

    #[test]
    fn test_integers() {
        assert_eq!(coerce_value("3000"), ConfigValue::from(3000));
        assert_eq!(coerce_value("-42"), ConfigValue::from(-42));
        assert_eq!(coerce_value("+7"), ConfigValue::from(7));
        assert_eq!(coerce_value("007"), ConfigValue::from(7));
        assert_eq!(coerce_value("18446744073709551615"), ConfigValue::from(u64::MAX));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(coerce_value("0.75").as_f64(), Some(0.75));
        assert_eq!(coerce_value(".5").as_f64(), Some(0.5));
        assert_eq!(coerce_value("-1.25").as_f64(), Some(-1.25));
        assert_eq!(coerce_value("5."), ConfigValue::from(5));
        assert_eq!(coerce_value("2.0"), ConfigValue::from(2));
    }

    #[test]
    fn test_partial_numbers_stay_strings() {
        for raw in ["12abc", "1.2.3", "1e5", "-", ".", "", " 5", "0x10", "1_000", "١٢"] {
            assert_eq!(coerce_value(raw), ConfigValue::String(raw.to_string()), "raw = {raw:?}");
        }
    }

    #[test]
    fn test_strings_are_verbatim() {
        assert_eq!(coerce_value("\"quoted\""), ConfigValue::from("\"quoted\""));
        assert_eq!(coerce_value("a\\nb"), ConfigValue::from("a\\nb"));
        assert_eq!(coerce_value("0.0.0.0"), ConfigValue::from("0.0.0.0"));
    }

    #[test]
    fn test_overflowing_digits_stay_strings() {
        let huge = "9".repeat(400);
        assert_eq!(coerce_value(&huge).kind(), "string");
    }
}
