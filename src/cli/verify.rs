//! Verify command implementation
//!
//! Re-runs every built-in scenario and fails when any run serializes
//! differently from the first.

use anyhow::Result;
use clap::Args;
use config_merge::consistency::{
    builtin_scenarios, check_all, RunOutcome, DEFAULT_RUNS, MAX_RUNS,
};

#[derive(Args)]
pub struct VerifyArgs {
    /// Merges per scenario compared against the baseline
    #[arg(
        long,
        value_name = "N",
        env = "CONFIG_MERGE_RUNS",
        default_value_t = DEFAULT_RUNS as u64,
        value_parser = clap::value_parser!(u64).range(..=MAX_RUNS as u64)
    )]
    pub runs: u64,
}

pub fn run(args: VerifyArgs) -> Result<()> {
    // Bounded by MAX_RUNS at parse time.
    let runs = args.runs as usize;
    let scenarios = builtin_scenarios();
    println!("Output consistency check");
    println!(
        "Running {} scenarios x {} iterations = {} comparisons\n",
        scenarios.len(),
        runs,
        scenarios.len().saturating_mul(runs)
    );

    let report = check_all(&scenarios, runs)?;
    for result in &report.results {
        match &result.outcome {
            RunOutcome::Consistent { runs } => {
                println!("ok   {} - {} runs identical", result.name, runs);
            }
            RunOutcome::Diverged { run, baseline, observed } => {
                println!("FAIL {} - output mismatch at run {}", result.name, run);
                println!("  baseline: {}", baseline);
                println!("  run {}:   {}", run, observed);
            }
        }
    }

    println!("\nResults: {}/{} passed, {} failed", report.passed(), report.results.len(), report.failed());
    if !report.is_success() {
        anyhow::bail!("Merge output differed between runs of identical input");
    }
    println!("All scenarios produced identical output across all runs.");
    Ok(())
}
