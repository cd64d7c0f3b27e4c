//! Merge command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use config_merge::{
    merge_config, parse_cli_args_with, LayerMap, MergeOptions, MergedConfig, ParseMode,
    RawDefaults, SourceTag,
};

use super::utils::{parse_json_arg, to_json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Merged config as a JSON object of {value, source} entries
    Json,
    /// One `key = value [source]` line per key
    Text,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Complete merge input as JSON: {"defaults": {...}, "file": {...}, "env": {...}, "cli": {...}}
    #[arg(
        long,
        value_name = "JSON",
        conflicts_with_all = ["defaults", "file", "env", "cli", "strict"]
    )]
    pub options: Option<String>,

    /// Default values as a JSON object of scalars
    #[arg(short = 'd', long, value_name = "JSON")]
    pub defaults: Option<String>,

    /// File layer as a JSON object of scalars (tagged "file")
    #[arg(short = 'f', long, value_name = "JSON")]
    pub file: Option<String>,

    /// Env layer as a JSON object of scalars (tagged "env")
    #[arg(short = 'e', long, value_name = "JSON")]
    pub env: Option<String>,

    /// CLI layer as a key=value,key=value string (tagged "cli")
    #[arg(short = 'c', long, value_name = "ARGS", allow_hyphen_values = true)]
    pub cli: Option<String>,

    /// Fail on malformed --cli segments instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let options = build_options(&args)?;
    let merged = merge_config(&options);
    tracing::debug!(keys = merged.len(), "merge complete");

    match args.format {
        OutputFormat::Json => println!("{}", to_json(&merged, args.compact)?),
        OutputFormat::Text => print!("{}", render_text(&merged)),
    }
    Ok(())
}

fn build_options(args: &MergeArgs) -> Result<MergeOptions> {
    if let Some(options) = parse_json_arg::<MergeOptions>("--options", &args.options)? {
        return Ok(options);
    }

    let Some(defaults) = parse_json_arg::<RawDefaults>("--defaults", &args.defaults)? else {
        anyhow::bail!("Either --options or --defaults must be specified");
    };

    let mut options = MergeOptions::new(defaults);
    if let Some(file) = scalar_layer("--file", &args.file, SourceTag::File)? {
        options = options.with_file(file);
    }
    if let Some(env) = scalar_layer("--env", &args.env, SourceTag::Env)? {
        options = options.with_env(env);
    }
    if let Some(cli) = args.cli.as_deref() {
        let mode = if args.strict { ParseMode::Strict } else { ParseMode::Permissive };
        let layer = parse_cli_args_with(cli, mode).context("Invalid --cli arguments")?;
        options = options.with_cli(layer);
    }
    Ok(options)
}

/// Decode a JSON object of bare scalars and tag every value with `source`.
fn scalar_layer(flag: &str, value: &Option<String>, source: SourceTag) -> Result<Option<LayerMap>> {
    let values = parse_json_arg::<RawDefaults>(flag, value)?;
    Ok(values.map(|values| LayerMap::from_pairs(source, values)))
}

fn render_text(merged: &MergedConfig) -> String {
    let mut out = String::new();
    for (key, entry) in merged {
        out.push_str(&format!("{} = {} [{}]\n", key, entry.value(), entry.source()));
    }
    out
}
