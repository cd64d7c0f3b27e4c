//! Configuration parsing and merging
//!
//! Merges defaults, file, environment and CLI layers with proper precedence
//! (CLI > Env > File > Defaults), recording which layer supplied each value.

pub mod cli_args;
pub mod coerce;
pub mod merge;

pub use cli_args::{parse_cli_args, parse_cli_args_with, ParseMode};
pub use coerce::coerce_value;
pub use merge::merge_config;
