//! Build errors for the engine builder.

use crate::tape::TapeKind;
use thiserror::Error;

/// Errors that can occur when building an engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state {state} is outside 0..=16")]
    InvalidState { state: u8 },

    #[error("Work head at bit {head} starts outside the {limit}-bit tape bound")]
    HeadOutOfBounds { head: u64, limit: u64 },

    #[error("{tape} tape holds {len} bits, more than the {limit}-bit tape bound")]
    TapeTooLong { tape: TapeKind, len: u64, limit: u64 },

    #[error("{} problems: {}", .0.len(), describe(.0))]
    Multiple(Vec<BuildError>),
}

fn describe(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
