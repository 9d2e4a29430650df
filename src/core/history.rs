//! Step history tracking.
//!
//! When enabled on an engine, every executed step is recorded with the
//! configuration it started from and the I/O it performed. The history is a
//! diagnostic trace; the engine never reads it back.

use super::state::MachineState;
use super::symbol::{Direction, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// I/O performed by a splice state during a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpliceEvent {
    /// A bit was read from the input tape at `position` and written onto the work tape.
    InputConsumed { position: u64, bit: Symbol },
    /// The output head moved past `position`, which now holds `bit`.
    OutputEmitted { position: u64, bit: Symbol },
}

/// Record of a single executed step.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use monotone::core::{Direction, MachineState, StepRecord, Symbol};
///
/// let record = StepRecord {
///     step: 1,
///     from: MachineState::FORMER_HALT,
///     read: Symbol::Zero,
///     written: Symbol::Zero,
///     direction: Direction::Left,
///     to: MachineState::IO_DECIDE,
///     head: 5,
///     splice: None,
///     timestamp: Utc::now(),
/// };
/// assert!(record.is(MachineState::FORMER_HALT, Symbol::Zero));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based step number
    pub step: u64,
    /// State the step started in
    pub from: MachineState,
    /// Symbol under the work head before the step
    pub read: Symbol,
    /// Symbol left on the work tape
    pub written: Symbol,
    /// Head movement
    pub direction: Direction,
    /// State after the step
    pub to: MachineState,
    /// Work head position before the step
    pub head: u64,
    /// I/O performed, for splice states
    pub splice: Option<SpliceEvent>,
    /// When the step executed
    pub timestamp: DateTime<Utc>,
}

impl StepRecord {
    /// Whether the step executed the rule for `(state, symbol)`.
    pub fn is(&self, state: MachineState, symbol: Symbol) -> bool {
        self.from == state && self.read == symbol
    }
}

/// Ordered trace of executed steps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionHistory {
    records: Vec<StepRecord>,
}

impl ExecutionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a step.
    pub fn record(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the starting state of the first step, then the `to` state of
    /// each step.
    pub fn get_path(&self) -> Vec<MachineState> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Time between the first and last recorded step.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Whether any step executed the rule for `(state, symbol)`.
    pub fn visited(&self, state: MachineState, symbol: Symbol) -> bool {
        self.records.iter().any(|r| r.is(state, symbol))
    }

    /// Splice events in execution order.
    pub fn splice_events(&self) -> impl Iterator<Item = &SpliceEvent> {
        self.records.iter().filter_map(|r| r.splice.as_ref())
    }

    pub fn transitions(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(step: u64, from: u8, read: Symbol, to: u8) -> StepRecord {
        StepRecord {
            step,
            from: MachineState::new(from).unwrap(),
            read,
            written: Symbol::Zero,
            direction: Direction::Left,
            to: MachineState::new(to).unwrap(),
            head: 4,
            splice: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = ExecutionHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = ExecutionHistory::new();
        history.record(record(1, 9, Symbol::Zero, 15));
        history.record(record(2, 15, Symbol::One, 16));

        let path: Vec<u8> = history.get_path().into_iter().map(u8::from).collect();
        assert_eq!(path, vec![9, 15, 16]);
    }

    #[test]
    fn visited_matches_state_and_symbol() {
        let mut history = ExecutionHistory::new();
        history.record(record(1, 15, Symbol::Zero, 0));

        assert!(history.visited(MachineState::IO_DECIDE, Symbol::Zero));
        assert!(!history.visited(MachineState::IO_DECIDE, Symbol::One));
    }

    #[test]
    fn splice_events_skip_plain_steps() {
        let mut history = ExecutionHistory::new();
        history.record(record(1, 9, Symbol::Zero, 15));
        let mut io = record(2, 15, Symbol::Zero, 0);
        io.splice = Some(SpliceEvent::InputConsumed {
            position: 0,
            bit: Symbol::One,
        });
        history.record(io);

        let events: Vec<_> = history.splice_events().collect();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn single_step_has_duration_zero() {
        let mut history = ExecutionHistory::new();
        history.record(record(1, 0, Symbol::Zero, 0));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = ExecutionHistory::new();
        history.record(record(1, 0, Symbol::One, 1));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: ExecutionHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
