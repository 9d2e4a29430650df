//! The fixed transition table.
//!
//! Rows 0 through 14 are Neary's 15-state, 2-symbol universal Turing machine
//! U(15,2) from "Small universal Turing machines". Its halting rule (9,0) is
//! replaced by a move to state 15, and rows 15 and 16 route the machine
//! through the input and output tapes:
//!
//! ```text
//!                                /--> (15,0) read input  --> put input bit, left, q0
//! (9,0) put 0, left, q15 ------{
//!                                \--> (15,1) put 1, left, q16 --> (16,0) emit 0 --> put 0, left, q0
//!                                                             \-> (16,1) emit 1 --> put 0, left, q0
//! ```
//!
//! The table is total: every (state, symbol) pair has exactly one rule.

use crate::core::{Direction, MachineState, Symbol, STATE_COUNT};
use serde::{Deserialize, Serialize};

/// Extra tape I/O performed by a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Work tape only.
    Plain,
    /// Consume one input bit and write it in place of [`Rule::write`].
    ReadInput,
    /// Emit one bit on the output tape.
    EmitOutput(Symbol),
}

/// One entry of the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Symbol written under the work head. Ignored for [`Action::ReadInput`].
    pub write: Symbol,
    pub direction: Direction,
    pub next: MachineState,
    pub action: Action,
}

const fn rule(write: u8, direction: Direction, next: u8) -> Rule {
    Rule {
        write: Symbol::from_digit(write),
        direction,
        next: MachineState::from_table(next),
        action: Action::Plain,
    }
}

const fn io(write: u8, next: u8, action: Action) -> Rule {
    Rule {
        write: Symbol::from_digit(write),
        direction: Direction::Left,
        next: MachineState::from_table(next),
        action,
    }
}

use Direction::{Left as L, Right as R};

/// `TRANSITION_TABLE[state][symbol]`.
pub static TRANSITION_TABLE: [[Rule; 2]; STATE_COUNT] = [
    //    read 0            read 1
    [rule(1, R, 0), rule(0, R, 1)],   // q0
    [rule(1, R, 0), rule(1, R, 2)],   // q1
    [rule(0, L, 4), rule(0, L, 6)],   // q2
    [rule(1, L, 4), rule(0, L, 5)],   // q3
    [rule(1, L, 3), rule(1, R, 0)],   // q4
    [rule(1, L, 3), rule(1, L, 3)],   // q5
    [rule(1, L, 6), rule(0, L, 7)],   // q6
    [rule(1, L, 6), rule(1, L, 8)],   // q7
    [rule(1, L, 9), rule(0, R, 0)],   // q8
    [rule(0, L, 15), rule(0, L, 10)], // q9: 0 used to halt
    [rule(1, R, 13), rule(0, R, 11)], // q10
    [rule(1, R, 11), rule(0, R, 12)], // q11
    [rule(1, R, 11), rule(0, L, 1)],  // q12
    [rule(0, R, 14), rule(0, L, 2)],  // q13
    [rule(1, R, 13), rule(0, R, 13)], // q14
    [io(0, 0, Action::ReadInput), rule(1, L, 16)], // q15
    [
        io(0, 0, Action::EmitOutput(Symbol::Zero)),
        io(0, 0, Action::EmitOutput(Symbol::One)),
    ], // q16
];

/// Look up the rule for `state` reading `symbol`.
pub fn lookup(state: MachineState, symbol: Symbol) -> &'static Rule {
    &TRANSITION_TABLE[state.index()][symbol.index()]
}
