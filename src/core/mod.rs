//! Core vocabulary of the machine.
//!
//! This module contains the plain data types the rest of the crate is
//! written in terms of:
//! - Machine states via `MachineState`
//! - The binary alphabet and head movement
//! - Guard predicates for stopping runs
//! - Step history tracking

mod guard;
mod history;
mod state;
mod symbol;

pub use guard::Guard;
pub use history::{ExecutionHistory, SpliceEvent, StepRecord};
pub use state::{MachineState, StateOutOfRange, STATE_COUNT};
pub use symbol::{Direction, Symbol};
