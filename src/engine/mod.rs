//! Single-step execution of the universal machine.
//!
//! [`TransitionEngine`] owns the work, input and output tapes together with
//! the current state. Each [`step`](TransitionEngine::step) reads the work
//! tape, looks up the fixed rule for (state, symbol), performs any splice I/O,
//! writes, and moves. Moving the work head left of position 0 ends the
//! computation and is reported as [`StepOutcome::Halted`], not as an error.

mod error;
mod machine;
mod outcome;

pub use error::EngineError;
pub use machine::TransitionEngine;
pub use outcome::{RunOutcome, RunSummary, StepOutcome};
