//! Monotone: a small universal Turing machine with input and output
//!
//! The machine is Neary's 15-state, 2-symbol universal Turing machine
//! U(15,2) running on an unbounded binary work tape. Its single halting rule
//! is replaced by two extra states that read from an input tape or write to
//! an output tape, so a program running on the machine can consume input and
//! emit output instead of stopping.
//!
//! # Core Concepts
//!
//! - **Tapes**: Unbounded, zero-initialized bit vectors with a head via `Tape`
//! - **Rules**: The fixed 17 × 2 `TRANSITION_TABLE`
//! - **Engine**: `TransitionEngine` owns all three tapes and steps the machine
//! - **Limits**: Optional step budgets and tape bounds checked before each step
//!
//! # Example
//!
//! ```rust
//! use monotone::{EngineBuilder, Guard, MachineState, TransitionEngine};
//! use monotone::tape::BitVector;
//!
//! let mut engine = EngineBuilder::new()
//!     .initial_state(9)
//!     .work_tape(BitVector::from(0b110))
//!     .work_head(3)
//!     .build()
//!     .unwrap();
//!
//! let back_at_start = Guard::new(|e: &TransitionEngine| e.state() == MachineState::INITIAL);
//! engine.run_until(&back_at_start, 10).unwrap();
//!
//! assert_eq!(engine.output_head(), 1);
//! assert_eq!(engine.output_tape_value().to_string(), "1");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod limits;
pub mod rules;
pub mod tape;

// Re-export commonly used types
pub use builder::{BuildError, EngineBuilder};
pub use crate::core::{Direction, ExecutionHistory, Guard, MachineState, StepRecord, Symbol};
pub use engine::{EngineError, RunOutcome, RunSummary, StepOutcome, TransitionEngine};
pub use rules::{Action, Rule, TRANSITION_TABLE};
pub use tape::{BitVector, Tape};
