//! Scalar configuration values and source-tagged entries

use super::SourceTag;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;
use std::fmt;

/// A scalar configuration value.
///
/// Numbers follow JSON semantics: a float with no fractional part is stored
/// as an integer, so `3000` and `3000.0` compare equal and serialize the
/// same. Non-finite floats cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Number(Number),
    String(String),
}

/// Shape accepted on the wire before number normalisation.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireValue {
    Bool(bool),
    Number(Number),
    String(String),
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match WireValue::deserialize(deserializer)? {
            WireValue::Bool(b) => ConfigValue::Bool(b),
            WireValue::Number(n) => ConfigValue::Number(normalize_number(n)),
            WireValue::String(s) => ConfigValue::String(s),
        })
    }
}

impl ConfigValue {
    /// Build a number from a float. Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(|n| ConfigValue::Number(normalize_number(n)))
    }

    /// Name of the value kind, as used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Number(_) => "number",
            ConfigValue::String(_) => "string",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Collapse integral floats into integers so equal numbers compare equal.
fn normalize_number(n: Number) -> Number {
    if !n.is_f64() {
        return n;
    }
    match n.as_f64() {
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Number::from(f as i64)
        }
        _ => n,
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Number(n) => write!(f, "{n}"),
            ConfigValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Number(Number::from(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Number(Number::from(value))
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        ConfigValue::Number(Number::from(value))
    }
}

impl From<u64> for ConfigValue {
    fn from(value: u64) -> Self {
        ConfigValue::Number(Number::from(value))
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

/// One configuration setting together with the layer that supplied it.
///
/// Entries are immutable; re-tagging produces a new entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueEntry {
    value: ConfigValue,
    source: SourceTag,
}

impl ValueEntry {
    pub fn new(value: impl Into<ConfigValue>, source: SourceTag) -> Self {
        Self { value: value.into(), source }
    }

    pub fn value(&self) -> &ConfigValue {
        &self.value
    }

    pub fn source(&self) -> SourceTag {
        self.source
    }

    pub(crate) fn retagged(&self, source: SourceTag) -> Self {
        Self { value: self.value.clone(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_float_equals_integer() {
        let from_float = ConfigValue::from_f64(3000.0).expect("finite");
        assert_eq!(from_float, ConfigValue::from(3000));
        assert_eq!(serde_json::to_string(&from_float).expect("serialize"), "3000");
    }

    #[test]
    fn test_fractional_float_is_kept() {
        let value = ConfigValue::from_f64(0.75).expect("finite");
        assert_eq!(value.as_f64(), Some(0.75));
        assert_eq!(value.as_i64(), None);
        assert_eq!(serde_json::to_string(&value).expect("serialize"), "0.75");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(ConfigValue::from_f64(f64::NAN).is_none());
        assert!(ConfigValue::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn test_deserialize_each_kind() {
        let values: Vec<ConfigValue> =
            serde_json::from_str(r#"[true, 8080, 30.0, 0.5, "localhost"]"#).expect("parse");
        assert_eq!(values[0], ConfigValue::Bool(true));
        assert_eq!(values[1], ConfigValue::from(8080));
        assert_eq!(values[2], ConfigValue::from(30));
        assert_eq!(values[3].as_f64(), Some(0.5));
        assert_eq!(values[4].as_str(), Some("localhost"));
    }

    #[test]
    fn test_deserialize_rejects_non_scalars() {
        assert!(serde_json::from_str::<ConfigValue>("null").is_err());
        assert!(serde_json::from_str::<ConfigValue>("[1, 2]").is_err());
        assert!(serde_json::from_str::<ConfigValue>(r#"{"a": 1}"#).is_err());
    }

    #[test]
    fn test_string_that_looks_numeric_stays_string() {
        let value: ConfigValue = serde_json::from_str(r#""8080""#).expect("parse");
        assert_eq!(value.kind(), "string");
        assert_ne!(value, ConfigValue::from(8080));
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = ValueEntry::new(3000, SourceTag::Cli);
        assert_eq!(
            serde_json::to_string(&entry).expect("serialize"),
            r#"{"value":3000,"source":"cli"}"#
        );
        let back: ValueEntry = serde_json::from_str(r#"{"value":"0.0.0.0","source":"cli"}"#)
            .expect("deserialize");
        assert_eq!(back.value().as_str(), Some("0.0.0.0"));
        assert_eq!(back.source(), SourceTag::Cli);
    }

    #[test]
    fn test_retagged_keeps_value() {
        let entry = ValueEntry::new("x", SourceTag::Env);
        let moved = entry.retagged(SourceTag::File);
        assert_eq!(moved.value(), entry.value());
        assert_eq!(moved.source(), SourceTag::File);
        assert_eq!(entry.source(), SourceTag::Env);
    }
}
