//! Builder for constructing transition engines.

use crate::builder::error::BuildError;
use crate::core::MachineState;
use crate::engine::TransitionEngine;
use crate::limits::RunLimits;
use crate::tape::{BitVector, Tape, TapeKind};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing engines with a fluent API.
///
/// Everything is optional; the defaults give a fresh machine in state 0 with
/// empty tapes.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    initial_state: u8,
    input: BitVector,
    work: BitVector,
    work_head: u64,
    record_history: bool,
    limits: Option<RunLimits>,
}

impl EngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the state the machine starts in. Must be in 0..=16.
    pub fn initial_state(mut self, state: u8) -> Self {
        self.initial_state = state;
        self
    }

    /// Seed the input tape, first bit at position 0.
    pub fn input<I>(mut self, bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        self.input = BitVector::from_bits(bits);
        self
    }

    pub fn input_tape(mut self, bits: BitVector) -> Self {
        self.input = bits;
        self
    }

    /// Start from a non-blank work tape.
    pub fn work_tape(mut self, bits: BitVector) -> Self {
        self.work = bits;
        self
    }

    /// Start the work head somewhere other than position 0.
    pub fn work_head(mut self, head: u64) -> Self {
        self.work_head = head;
        self
    }

    /// Record every executed step in an [`ExecutionHistory`](crate::core::ExecutionHistory).
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    pub fn limits(mut self, limits: RunLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Check every parameter, accumulating ALL problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

        checks.push(match MachineState::new(self.initial_state) {
            Ok(_) => Validation::success(()),
            Err(_) => Validation::fail(BuildError::InvalidState {
                state: self.initial_state,
            }),
        });

        if let Some(limit) = self.limits.as_ref().and_then(RunLimits::max_tape_bits) {
            if self.work_head >= limit {
                checks.push(Validation::fail(BuildError::HeadOutOfBounds {
                    head: self.work_head,
                    limit,
                }));
            }
            for (tape, bits) in [(TapeKind::Work, &self.work), (TapeKind::Input, &self.input)] {
                let len = bits.significant_bits();
                if len > limit {
                    checks.push(Validation::fail(BuildError::TapeTooLong { tape, len, limit }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the engine.
    /// Returns an error describing every invalid parameter.
    pub fn build(self) -> Result<TransitionEngine, BuildError> {
        if let Validation::Failure(errors) = self.validate() {
            let mut problems: Vec<BuildError> = errors.iter().cloned().collect();
            return Err(if problems.len() == 1 {
                problems.remove(0)
            } else {
                BuildError::Multiple(problems)
            });
        }

        let state = MachineState::new(self.initial_state).map_err(|e| BuildError::InvalidState {
            state: e.0,
        })?;

        Ok(TransitionEngine::from_parts(
            Tape::with_head(self.work, self.work_head),
            self.input,
            state,
            self.record_history,
            self.limits,
        ))
    }
}
