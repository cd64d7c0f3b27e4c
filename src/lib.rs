//! config-merge: deterministic layered configuration merging
//!
//! Combines defaults, file, environment and command-line layers into one
//! configuration where every value remembers which layer supplied it.
//!
//! ```
//! use config_merge::{merge_config, parse_cli_args, MergeOptions, RawDefaults, SourceTag};
//!
//! let options = MergeOptions::new(RawDefaults::new().with("port", 8080).with("debug", false))
//!     .with_cli(parse_cli_args("port=3000"));
//! let merged = merge_config(&options);
//!
//! assert_eq!(merged.source_of("port"), Some(SourceTag::Cli));
//! assert_eq!(merged.source_of("debug"), Some(SourceTag::Default));
//! ```

pub mod config;
pub mod consistency;
pub mod domain;
pub mod error;

pub use config::{coerce_value, merge_config, parse_cli_args, parse_cli_args_with, ParseMode};
pub use domain::{ConfigValue, LayerMap, MergeOptions, MergedConfig, RawDefaults, SourceTag, ValueEntry};
pub use error::{ConfigMergeError, Result};
