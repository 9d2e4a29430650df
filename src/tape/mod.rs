//! Tapes and heads.
//!
//! A [`Tape`] pairs a [`BitVector`] with a head position. Heads are plain
//! non-negative positions; the engine decides what happens when the work head
//! would move left of position 0.

mod bit_vector;

pub use bit_vector::BitVector;

use crate::core::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while growing tape storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TapeError {
    #[error("tape storage exhausted while growing to bit {position}")]
    Exhausted { position: u64 },
}

/// Which of the engine's three tapes a value refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TapeKind {
    Work,
    Input,
    Output,
}

impl fmt::Display for TapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TapeKind::Work => f.write_str("work"),
            TapeKind::Input => f.write_str("input"),
            TapeKind::Output => f.write_str("output"),
        }
    }
}

/// A bit vector with a read/write head.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tape {
    bits: BitVector,
    head: u64,
}

impl Tape {
    /// A tape holding `bits` with the head at position 0.
    pub fn new(bits: BitVector) -> Self {
        Self { bits, head: 0 }
    }

    pub fn with_head(bits: BitVector, head: u64) -> Self {
        Self { bits, head }
    }

    pub fn bits(&self) -> &BitVector {
        &self.bits
    }

    pub fn head(&self) -> u64 {
        self.head
    }

    /// Symbol under the head.
    pub fn read(&self) -> Symbol {
        Symbol::from(self.bits.get(self.head))
    }

    /// Overwrite the symbol under the head, flipping only when it differs.
    pub fn write(&mut self, symbol: Symbol) -> Result<(), TapeError> {
        if self.read() != symbol {
            self.bits.flip(self.head)?;
        }
        Ok(())
    }

    /// Make sure a write under the head cannot fail for lack of storage.
    pub fn reserve_head(&mut self) -> Result<(), TapeError> {
        self.bits.reserve(self.head)
    }

    /// Position one cell to the right of the head.
    pub fn next_position(&self) -> Result<u64, TapeError> {
        self.head.checked_add(1).ok_or(TapeError::Exhausted {
            position: self.head,
        })
    }

    /// Move the head one cell toward higher positions.
    pub fn advance(&mut self) -> Result<(), TapeError> {
        self.head = self.next_position()?;
        Ok(())
    }

    /// Move the head one cell toward position 0. Returns `false`, leaving the
    /// head in place, when it is already at 0.
    pub fn retreat(&mut self) -> bool {
        match self.head.checked_sub(1) {
            Some(head) => {
                self.head = head;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_defaults_to_zero() {
        let tape = Tape::with_head(BitVector::new(), 9_000);
        assert_eq!(tape.read(), Symbol::Zero);
    }

    #[test]
    fn write_stores_symbol_under_head() {
        let mut tape = Tape::with_head(BitVector::new(), 3);
        tape.write(Symbol::One).unwrap();
        assert_eq!(tape.bits(), &BitVector::from(0b1000));

        tape.write(Symbol::One).unwrap();
        assert_eq!(tape.bits(), &BitVector::from(0b1000));

        tape.write(Symbol::Zero).unwrap();
        assert!(tape.bits().is_zero());
    }

    #[test]
    fn retreat_stops_at_zero() {
        let mut tape = Tape::with_head(BitVector::new(), 1);
        assert!(tape.retreat());
        assert_eq!(tape.head(), 0);
        assert!(!tape.retreat());
        assert_eq!(tape.head(), 0);
    }

    #[test]
    fn advance_moves_right() {
        let mut tape = Tape::new(BitVector::new());
        tape.advance().unwrap();
        tape.advance().unwrap();
        assert_eq!(tape.head(), 2);
    }

    #[test]
    fn advance_past_last_position_fails() {
        let mut tape = Tape::with_head(BitVector::new(), u64::MAX);
        assert_eq!(
            tape.advance(),
            Err(TapeError::Exhausted { position: u64::MAX })
        );
        assert_eq!(tape.head(), u64::MAX);
    }

    #[test]
    fn reserve_head_keeps_contents() {
        let mut tape = Tape::with_head(BitVector::new(), 300);
        tape.reserve_head().unwrap();
        assert!(tape.bits().is_zero());
        assert!(tape.bits().capacity_bits() > 300);
    }
}
