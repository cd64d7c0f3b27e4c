//! config-merge: merge layered configuration from the command line
//!
//! Decodes JSON layers given as arguments, merges them with provenance and
//! prints the result, or runs the output-consistency self-check.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
