//! Machine states of the universal machine.
//!
//! A `MachineState` names one row of the transition table. Values are
//! validated on construction, so a state held by the engine always indexes
//! the table.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of rows in the transition table (15 original states plus 2 splice states).
pub const STATE_COUNT: usize = 17;

/// Error returned when an integer does not name a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("machine state {0} is outside 0..=16")]
pub struct StateOutOfRange(pub u8);

const NAMES: [&str; STATE_COUNT] = [
    "q0", "q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9", "q10", "q11", "q12", "q13",
    "q14", "q15", "q16",
];

/// A row of the transition table.
///
/// States 0 through 14 run the universal machine. State 15 decides between
/// reading input and writing output, and state 16 writes output; together they
/// replace the halting rule of state 9.
///
/// # Example
///
/// ```rust
/// use monotone::core::MachineState;
///
/// let state = MachineState::new(15).unwrap();
/// assert!(state.is_splice());
/// assert_eq!(state.name(), "q15");
/// assert!(MachineState::new(17).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MachineState(u8);

impl MachineState {
    /// Starting state of a fresh engine.
    pub const INITIAL: Self = Self(0);

    /// The state whose 0-rule used to halt the machine.
    pub const FORMER_HALT: Self = Self(9);

    /// Splice state that branches on the work symbol: 0 reads input, 1 goes on to output.
    pub const IO_DECIDE: Self = Self(15);

    /// Splice state that copies the work symbol to the output tape.
    pub const IO_WRITE: Self = Self(16);

    /// Validate an integer state.
    pub fn new(value: u8) -> Result<Self, StateOutOfRange> {
        if usize::from(value) < STATE_COUNT {
            Ok(Self(value))
        } else {
            Err(StateOutOfRange(value))
        }
    }

    /// Construct without validation. Only for the static rule table.
    pub(crate) const fn from_table(value: u8) -> Self {
        Self(value)
    }

    /// Every state, in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..STATE_COUNT as u8).map(Self)
    }

    /// Row index into the transition table.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Raw integer value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Display name used in logs and traces.
    pub fn name(&self) -> &'static str {
        NAMES[self.index()]
    }

    /// Whether this is one of the synthetic I/O states.
    pub fn is_splice(&self) -> bool {
        self.0 >= Self::IO_DECIDE.0
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl TryFrom<u8> for MachineState {
    type Error = StateOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MachineState> for u8 {
    fn from(state: MachineState) -> Self {
        state.0
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
