//! Error types for the merge engine.
//!
//! Parsing and merging are total in their default modes; these variants
//! cover the opt-in strict parser and the edges around the engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigMergeError {
    /// A CLI segment had no `=` or an empty key while parsing in strict mode.
    #[error("Malformed CLI segment #{position} '{segment}': expected key=value")]
    MalformedSegment { segment: String, position: usize },

    #[error("Unknown configuration source '{0}' (expected default, file, env or cli)")]
    UnknownSource(String),

    /// Canonical JSON encoding of a merged configuration failed.
    #[error("Failed to canonicalize merged configuration: {0}")]
    Canonicalize(String),
}

pub type Result<T> = std::result::Result<T, ConfigMergeError>;
