//! Limit violations and handling strategies.

use crate::tape::TapeKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ways a run can exceed its configured limits
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LimitViolation {
    #[error("step budget of {max} exhausted ({taken} steps taken)")]
    StepBudgetExceeded { max: u64, taken: u64 },

    #[error("{tape} head at bit {position} is outside the {max}-bit tape bound")]
    TapeBoundExceeded {
        tape: TapeKind,
        position: u64,
        max: u64,
    },

    #[error("custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// Strategy for handling limit violations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationStrategy {
    /// Refuse the step and report the violations
    #[default]
    Abort,

    /// Log a warning and execute the step anyway
    Warn,
}
