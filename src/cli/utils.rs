//! Shared CLI utilities.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Decode the JSON given to `flag`. Returns `None` when `value` is `None`.
pub fn parse_json_arg<T: DeserializeOwned>(flag: &str, value: &Option<String>) -> Result<Option<T>> {
    value
        .as_deref()
        .map(|raw| serde_json::from_str(raw).with_context(|| format!("Invalid JSON for {flag}")))
        .transpose()
}

/// Render `value` as pretty JSON, or single-line when `compact` is set.
pub fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.context("Failed to serialize output")
}
