//! Output consistency checking
//!
//! Merges the same input many times and compares the RFC 8785 canonical JSON
//! of every result against the first one. Any difference means the merge
//! depends on something other than its input.

pub mod scenarios;

pub use scenarios::{builtin_scenarios, Scenario};

use crate::config::merge_config;
use crate::domain::{MergeOptions, MergedConfig};
use crate::error::{ConfigMergeError, Result};
use tracing::{debug, warn};

/// Default repetitions per scenario.
pub const DEFAULT_RUNS: usize = 100;

/// Largest repetition count the `verify` command accepts.
pub const MAX_RUNS: usize = 1_000_000;

/// Result of repeatedly merging one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Consistent { runs: usize },
    /// First repetition (0-based) whose output differed from the baseline.
    Diverged { run: usize, baseline: String, observed: String },
}

impl RunOutcome {
    pub fn is_consistent(&self) -> bool {
        matches!(self, RunOutcome::Consistent { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub name: String,
    pub outcome: RunOutcome,
}

#[derive(Debug, Clone)]
pub struct ConsistencyReport {
    pub runs: usize,
    pub results: Vec<ScenarioResult>,
}

impl ConsistencyReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_consistent()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Total merges compared across all scenarios, saturating at `usize::MAX`.
    pub fn comparisons(&self) -> usize {
        self.results.len().saturating_mul(self.runs)
    }
}

/// Canonical JSON bytes of a merged configuration.
pub fn canonical_json(config: &MergedConfig) -> Result<Vec<u8>> {
    serde_json_canonicalizer::to_vec(config)
        .map_err(|e| ConfigMergeError::Canonicalize(e.to_string()))
}

/// Merge `options` once for a baseline, then `runs` more times, stopping at
/// the first result that serializes differently.
pub fn check_scenario(options: &MergeOptions, runs: usize) -> Result<RunOutcome> {
    let baseline = canonical_json(&merge_config(options))?;

    for run in 0..runs {
        let observed = canonical_json(&merge_config(options))?;
        if observed != baseline {
            return Ok(RunOutcome::Diverged {
                run,
                baseline: String::from_utf8_lossy(&baseline).into_owned(),
                observed: String::from_utf8_lossy(&observed).into_owned(),
            });
        }
    }

    Ok(RunOutcome::Consistent { runs })
}

pub fn check_all(scenarios: &[Scenario], runs: usize) -> Result<ConsistencyReport> {
    let mut results = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        let outcome = check_scenario(&scenario.options, runs)?;
        match &outcome {
            RunOutcome::Consistent { .. } => debug!(scenario = scenario.name, runs, "consistent"),
            RunOutcome::Diverged { run, .. } => {
                warn!(scenario = scenario.name, run, "merge output diverged from baseline")
            }
        }
        results.push(ScenarioResult { name: scenario.name.to_string(), outcome });
    }
    Ok(ConsistencyReport { runs, results })
}
