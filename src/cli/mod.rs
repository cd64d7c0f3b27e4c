//! Command-line interface for config-merge
//!
//! Provides `merge`, `parse` and `verify` subcommands over the merge engine.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod merge;
mod parse;
mod utils;
mod verify;

/// Merge layered configuration with per-value provenance
#[derive(Parser)]
#[command(name = "config-merge", author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log merge decisions at DEBUG level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge defaults, file, env and cli layers and print the result as JSON
    Merge(merge::MergeArgs),

    /// Parse a key=value,... string into a cli layer and print it as JSON
    Parse(parse::ParseArgs),

    /// Check that repeated merges of the built-in scenarios are identical
    Verify(verify::VerifyArgs),
}

/// Directives from `rust_log` when they parse, WARN otherwise. `verbose`
/// lifts the global level to DEBUG and keeps any per-target directives.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(cli.verbose, rust_log.as_deref()))
        .try_init();

    match cli.command {
        Commands::Merge(args) => merge::run(args),
        Commands::Parse(args) => parse::run(args),
        Commands::Verify(args) => verify::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(false, None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_honours_rust_log() {
        let filter = log_filter(false, Some("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_log_filter_ignores_unparsable_rust_log() {
        let filter = log_filter(false, Some("config_merge=loud"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_verbose_raises_to_debug() {
        assert_eq!(log_filter(true, None).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(true, Some("error")).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_about_comes_from_doc_comment() {
        let about = Cli::command().get_about().map(|s| s.to_string());
        assert_eq!(about.as_deref(), Some("Merge layered configuration with per-value provenance"));
    }
}
