//! Core data model for layered configuration merging
//!
//! Every merged value carries the [`SourceTag`] of the layer that supplied it.
//! All key-indexed maps are ordered by key, so equality ignores insertion
//! order and serialization is byte-stable across runs.

mod layer;
mod source;
mod value;

pub use layer::{LayerMap, MergeOptions, MergedConfig, RawDefaults};
pub use source::SourceTag;
pub use value::{ConfigValue, ValueEntry};
