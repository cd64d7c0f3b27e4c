//! Source tags and their precedence order

use crate::error::ConfigMergeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a configuration value came from.
///
/// Variants are declared lowest to highest precedence, so the derived `Ord`
/// is the precedence order: `Default < File < Env < Cli`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTag {
    /// Built-in baseline values.
    Default,
    /// Values decoded from a configuration file.
    File,
    /// Values extracted from environment variables.
    Env,
    /// Values given on the command line.
    Cli,
}

impl SourceTag {
    /// All sources, lowest precedence first.
    pub const PRECEDENCE: [SourceTag; 4] =
        [SourceTag::Default, SourceTag::File, SourceTag::Env, SourceTag::Cli];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::Default => "default",
            SourceTag::File => "file",
            SourceTag::Env => "env",
            SourceTag::Cli => "cli",
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceTag {
    type Err = ConfigMergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SourceTag::Default),
            "file" => Ok(SourceTag::File),
            "env" => Ok(SourceTag::Env),
            "cli" => Ok(SourceTag::Cli),
            other => Err(ConfigMergeError::UnknownSource(other.to_string())),
        }
    }
}
