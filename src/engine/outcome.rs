//! Results of stepping and running the engine.

use serde::{Deserialize, Serialize};

/// Result of a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The step executed; another one is possible.
    Continued,
    /// The work head would have moved left of position 0. The computation is
    /// complete and nothing was changed.
    Halted,
}

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Halted,
    GuardMatched,
    StepBudgetSpent,
}

/// Summary of a multi-step run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Steps executed by this run (a halting attempt is not counted)
    pub steps: u64,
    pub outcome: RunOutcome,
}
