//! Errors raised while stepping the engine.

use crate::limits::LimitViolation;
use crate::tape::{TapeError, TapeKind};
use thiserror::Error;

/// Errors that can occur during a step.
///
/// Halting is not an error; it is reported as
/// [`StepOutcome::Halted`](crate::engine::StepOutcome::Halted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{tape} tape storage exhausted at bit {position}")]
    ResourceExhausted { tape: TapeKind, position: u64 },

    #[error("run limits exceeded: {}", describe(.violations))]
    LimitExceeded { violations: Vec<LimitViolation> },
}

impl EngineError {
    pub(crate) fn exhausted(tape: TapeKind) -> impl Fn(TapeError) -> EngineError {
        move |error| match error {
            TapeError::Exhausted { position } => EngineError::ResourceExhausted { tape, position },
        }
    }
}

fn describe(violations: &[LimitViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
