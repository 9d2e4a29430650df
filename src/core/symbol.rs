//! Tape alphabet and head movement.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A symbol of the binary tape alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Zero,
    One,
}

impl Symbol {
    /// Both symbols, in column order of the transition table.
    pub const ALL: [Symbol; 2] = [Symbol::Zero, Symbol::One];

    pub(crate) const fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Symbol::Zero,
            _ => Symbol::One,
        }
    }

    /// Column index into the transition table.
    pub fn index(self) -> usize {
        match self {
            Symbol::Zero => 0,
            Symbol::One => 1,
        }
    }

    /// The symbol as a tape bit.
    pub fn as_bit(self) -> bool {
        matches!(self, Symbol::One)
    }
}

impl From<bool> for Symbol {
    fn from(bit: bool) -> Self {
        if bit {
            Symbol::One
        } else {
            Symbol::Zero
        }
    }
}

impl From<Symbol> for bool {
    fn from(symbol: Symbol) -> Self {
        symbol.as_bit()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Zero => f.write_str("0"),
            Symbol::One => f.write_str("1"),
        }
    }
}

/// Direction the work head moves after a write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward position 0. Moving left from position 0 halts the machine.
    Left,
    /// Toward higher positions; the tape grows on demand.
    Right,
}
