//! Layered merge with provenance
//!
//! Layers are applied lowest precedence first:
//! defaults, then file, then env, then cli.
//! - Scalars only: a later layer replaces value and source wholesale
//! - Keys are matched exactly (case-sensitive, no normalisation)
//! - Keys present only in an override layer are added

use crate::domain::{MergeOptions, MergedConfig, SourceTag, ValueEntry};
use std::collections::BTreeMap;
use tracing::debug;

/// Merge `options` into a single configuration.
///
/// Every key from every supplied layer appears in the result, tagged with
/// the highest-precedence layer that defines it. The caller's structures
/// are only read.
pub fn merge_config(options: &MergeOptions) -> MergedConfig {
    let mut merged: BTreeMap<String, ValueEntry> = options
        .defaults
        .iter()
        .map(|(key, value)| (key.clone(), ValueEntry::new(value.clone(), SourceTag::Default)))
        .collect();

    let mut applied = 0usize;
    for (source, layer) in options.layers() {
        for (key, entry) in layer {
            apply(&mut merged, key, entry, source);
        }
        applied += 1;
    }

    debug!(
        defaults = options.defaults.len(),
        layers = applied,
        keys = merged.len(),
        "merged configuration"
    );
    MergedConfig::from_entries(merged)
}

/// Overwrite `key` with `entry`, stamped with the layer it was applied from.
fn apply(merged: &mut BTreeMap<String, ValueEntry>, key: &str, entry: &ValueEntry, layer: SourceTag) {
    let entry = if entry.source() == layer {
        entry.clone()
    } else {
        debug!(key, tagged = %entry.source(), layer = %layer, "re-tagging entry to its layer");
        entry.retagged(layer)
    };
    merged.insert(key.to_string(), entry);
}
