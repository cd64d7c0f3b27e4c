//! Parser for compact `key=value,key=value` command-line overrides

use super::coerce::coerce_value;
use crate::domain::{LayerMap, SourceTag, ValueEntry};
use crate::error::{ConfigMergeError, Result};
use tracing::debug;

/// How the parser treats a segment with no `=` or an empty key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Drop malformed segments and keep going.
    #[default]
    Permissive,
    /// Fail on the first malformed segment.
    Strict,
}

/// Parse `input` into a cli-tagged layer, skipping malformed segments.
///
/// Empty segments (from leading, trailing or doubled commas) are ignored.
/// Each segment splits on its first `=`; the value is coerced with
/// [`coerce_value`]. A repeated key keeps its last occurrence.
pub fn parse_cli_args(input: &str) -> LayerMap {
    let mut layer = LayerMap::new();
    for (position, segment) in segments(input) {
        match split_segment(segment) {
            Some((key, raw)) => insert_pair(&mut layer, key, raw),
            None => debug!(position, segment, "skipping malformed CLI segment"),
        }
    }
    layer
}

/// Parse with an explicit [`ParseMode`].
pub fn parse_cli_args_with(input: &str, mode: ParseMode) -> Result<LayerMap> {
    if mode == ParseMode::Permissive {
        return Ok(parse_cli_args(input));
    }

    let mut layer = LayerMap::new();
    for (position, segment) in segments(input) {
        let (key, raw) = split_segment(segment).ok_or_else(|| {
            ConfigMergeError::MalformedSegment { segment: segment.to_string(), position }
        })?;
        insert_pair(&mut layer, key, raw);
    }
    Ok(layer)
}

/// Non-empty segments with their 1-based position in the comma-split input.
fn segments(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .split(',')
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(index, segment)| (index + 1, segment))
}

fn split_segment(segment: &str) -> Option<(&str, &str)> {
    match segment.split_once('=') {
        Some((key, raw)) if !key.is_empty() => Some((key, raw)),
        _ => None,
    }
}

fn insert_pair(layer: &mut LayerMap, key: &str, raw: &str) {
    let entry = ValueEntry::new(coerce_value(raw), SourceTag::Cli);
    if let Some(previous) = layer.insert(key, entry) {
        debug!(key, previous = %previous.value(), "duplicate CLI key, last value wins");
    }
}
