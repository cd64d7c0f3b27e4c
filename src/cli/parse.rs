//! Parse command implementation

use anyhow::{Context, Result};
use clap::Args;
use config_merge::{parse_cli_args_with, ParseMode};

use super::utils::to_json;

#[derive(Args)]
pub struct ParseArgs {
    /// Overrides as key=value,key=value
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    pub input: String,

    /// Fail on segments without '=' instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let mode = if args.strict { ParseMode::Strict } else { ParseMode::Permissive };
    let layer = parse_cli_args_with(&args.input, mode).context("Invalid CLI arguments")?;
    println!("{}", to_json(&layer, args.compact)?);
    Ok(())
}
