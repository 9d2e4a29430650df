//! Guard predicates for stopping a run.
//!
//! Guards are pure boolean functions evaluated after each step of
//! [`TransitionEngine::run_until`](crate::engine::TransitionEngine::run_until).
//! They let callers stop at a configuration of interest without writing
//! their own stepping loop.

use std::fmt;
use std::marker::PhantomData;

/// Pure predicate over a value, typically the engine.
///
/// # Example
///
/// ```rust
/// use monotone::core::{Guard, MachineState};
/// use monotone::engine::TransitionEngine;
///
/// let in_output_state = Guard::new(|engine: &TransitionEngine| {
///     engine.state() == MachineState::IO_WRITE
/// });
///
/// let engine = TransitionEngine::default();
/// assert!(!in_output_state.check(&engine));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Evaluate the guard.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MachineState;

    #[test]
    fn guard_allows_matching_values() {
        let guard = Guard::new(|s: &MachineState| *s == MachineState::IO_DECIDE);

        assert!(guard.check(&MachineState::IO_DECIDE));
        assert!(!guard.check(&MachineState::INITIAL));
    }

    #[test]
    fn guard_checks_splice_states() {
        let guard = Guard::new(|s: &MachineState| s.is_splice());

        assert!(guard.check(&MachineState::IO_WRITE));
        assert!(!guard.check(&MachineState::FORMER_HALT));
    }

    #[test]
    fn guard_is_deterministic() {
        let state = MachineState::FORMER_HALT;
        let guard = Guard::new(|s: &MachineState| s.value() % 2 == 1);

        let result1 = guard.check(&state);
        let result2 = guard.check(&state);

        assert_eq!(result1, result2);
    }
}
