//! The transition engine: three tapes, one state, one step at a time.

use crate::builder::{BuildError, EngineBuilder};
use crate::core::{
    Direction, ExecutionHistory, Guard, MachineState, SpliceEvent, StepRecord, Symbol,
};
use crate::engine::error::EngineError;
use crate::engine::outcome::{RunOutcome, RunSummary, StepOutcome};
use crate::limits::{RunLimits, StepContext, ViolationStrategy};
use crate::rules::{self, Action, Rule};
use crate::tape::{BitVector, Tape, TapeKind};
use chrono::Utc;
use stillwater::validation::Validation;
use tracing::{debug, info, trace, warn};

/// The universal machine with its work, input and output tapes.
///
/// The engine owns every tape and head; callers observe them through shared
/// accessors and change them only by stepping.
///
/// # Example
///
/// ```rust
/// use monotone::engine::{StepOutcome, TransitionEngine};
///
/// let mut engine = TransitionEngine::new([true, false, true], 0).unwrap();
/// assert_eq!(engine.step().unwrap(), StepOutcome::Continued);
/// assert_eq!(engine.work_head(), 1);
/// assert_eq!(engine.work_tape_value().to_string(), "1");
/// ```
#[derive(Debug)]
pub struct TransitionEngine {
    work: Tape,
    input: Tape,
    output: Tape,
    state: MachineState,
    steps: u64,
    halted: bool,
    history: Option<ExecutionHistory>,
    limits: Option<RunLimits>,
}

impl TransitionEngine {
    /// Create an engine in `initial_state` with the input tape seeded from
    /// `input` (first bit at position 0). Work and output tapes start empty.
    pub fn new<I>(input: I, initial_state: u8) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = bool>,
    {
        EngineBuilder::new()
            .input(input)
            .initial_state(initial_state)
            .build()
    }

    pub(crate) fn from_parts(
        work: Tape,
        input: BitVector,
        state: MachineState,
        record_history: bool,
        limits: Option<RunLimits>,
    ) -> Self {
        Self {
            work,
            input: Tape::new(input),
            output: Tape::default(),
            state,
            steps: 0,
            halted: false,
            history: record_history.then(ExecutionHistory::new),
            limits,
        }
    }

    /// Execute one transition.
    ///
    /// Returns [`StepOutcome::Halted`] without changing anything when the rule
    /// would move the work head left of position 0, and on every call after
    /// that. Errors also leave the engine untouched.
    pub fn step(&mut self) -> Result<StepOutcome, EngineError> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }

        let read = self.work.read();
        let rule = rules::lookup(self.state, read);
        if rule.direction == Direction::Left && self.work.head() == 0 {
            self.halted = true;
            info!(
                state = %self.state,
                steps = self.steps,
                "work head reached the left end; machine halted"
            );
            return Ok(StepOutcome::Halted);
        }

        self.enforce_limits()?;

        let written = match rule.action {
            Action::ReadInput => self.input.read(),
            _ => rule.write,
        };
        self.reserve(rule, written)?;

        let from = self.state;
        let head = self.work.head();
        let splice = match rule.action {
            Action::Plain => None,
            Action::ReadInput => Some(self.consume_input()?),
            Action::EmitOutput(bit) => Some(self.emit_output(bit)?),
        };

        self.work
            .write(written)
            .map_err(EngineError::exhausted(TapeKind::Work))?;
        self.state = rule.next;
        match rule.direction {
            Direction::Left => {
                let moved = self.work.retreat();
                debug_assert!(moved, "halting is decided before moving");
            }
            Direction::Right => self
                .work
                .advance()
                .map_err(EngineError::exhausted(TapeKind::Work))?,
        }
        self.steps += 1;

        trace!(
            step = self.steps,
            from = %from,
            read = %read,
            to = %self.state,
            head = self.work.head(),
            "step"
        );

        if let Some(history) = &mut self.history {
            history.record(StepRecord {
                step: self.steps,
                from,
                read,
                written,
                direction: rule.direction,
                to: rule.next,
                head,
                splice,
                timestamp: Utc::now(),
            });
        }

        Ok(StepOutcome::Continued)
    }

    /// Step until the machine halts or `max_steps` steps have executed.
    pub fn run(&mut self, max_steps: u64) -> Result<RunSummary, EngineError> {
        self.run_inner(max_steps, None)
    }

    /// Step until `guard` holds after a step, the machine halts, or
    /// `max_steps` steps have executed.
    pub fn run_until(
        &mut self,
        guard: &Guard<TransitionEngine>,
        max_steps: u64,
    ) -> Result<RunSummary, EngineError> {
        self.run_inner(max_steps, Some(guard))
    }

    fn run_inner(
        &mut self,
        max_steps: u64,
        guard: Option<&Guard<TransitionEngine>>,
    ) -> Result<RunSummary, EngineError> {
        let mut steps = 0;
        while steps < max_steps {
            if self.step()? == StepOutcome::Halted {
                return Ok(RunSummary {
                    steps,
                    outcome: RunOutcome::Halted,
                });
            }
            steps += 1;
            if guard.is_some_and(|g| g.check(self)) {
                return Ok(RunSummary {
                    steps,
                    outcome: RunOutcome::GuardMatched,
                });
            }
        }
        Ok(RunSummary {
            steps,
            outcome: RunOutcome::StepBudgetSpent,
        })
    }

    fn consume_input(&mut self) -> Result<SpliceEvent, EngineError> {
        let position = self.input.head();
        let bit = self.input.read();
        self.input
            .advance()
            .map_err(EngineError::exhausted(TapeKind::Input))?;
        debug!(position, %bit, "consumed input bit");
        Ok(SpliceEvent::InputConsumed { position, bit })
    }

    fn emit_output(&mut self, bit: Symbol) -> Result<SpliceEvent, EngineError> {
        let position = self.output.head();
        if bit == Symbol::One {
            self.output
                .write(bit)
                .map_err(EngineError::exhausted(TapeKind::Output))?;
        }
        self.output
            .advance()
            .map_err(EngineError::exhausted(TapeKind::Output))?;
        debug!(position, %bit, "emitted output bit");
        Ok(SpliceEvent::OutputEmitted { position, bit })
    }

    // Storage for every 1 about to be written is claimed, and every head move
    // checked, before anything changes, so a failure leaves the engine as it was.
    fn reserve(&mut self, rule: &Rule, written: Symbol) -> Result<(), EngineError> {
        if rule.direction == Direction::Right {
            self.work
                .next_position()
                .map_err(EngineError::exhausted(TapeKind::Work))?;
        }
        match rule.action {
            Action::Plain => {}
            Action::ReadInput => {
                self.input
                    .next_position()
                    .map_err(EngineError::exhausted(TapeKind::Input))?;
            }
            Action::EmitOutput(_) => {
                self.output
                    .next_position()
                    .map_err(EngineError::exhausted(TapeKind::Output))?;
            }
        }
        if written == Symbol::One {
            self.work
                .reserve_head()
                .map_err(EngineError::exhausted(TapeKind::Work))?;
        }
        if rule.action == Action::EmitOutput(Symbol::One) {
            self.output
                .reserve_head()
                .map_err(EngineError::exhausted(TapeKind::Output))?;
        }
        Ok(())
    }

    fn enforce_limits(&self) -> Result<(), EngineError> {
        let Some(limits) = &self.limits else {
            return Ok(());
        };

        match limits.enforce(&self.step_context()) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                let violations: Vec<_> = errors.iter().cloned().collect();
                match limits.violation_strategy() {
                    ViolationStrategy::Abort => Err(EngineError::LimitExceeded { violations }),
                    ViolationStrategy::Warn => {
                        for violation in &violations {
                            warn!(step = self.steps + 1, %violation, "run limit exceeded");
                        }
                        Ok(())
                    }
                }
            }
        }
    }

    /// The configuration the next step will start from.
    pub fn step_context(&self) -> StepContext {
        StepContext {
            steps_taken: self.steps,
            state: self.state,
            work_head: self.work.head(),
            input_head: self.input.head(),
            output_head: self.output.head(),
        }
    }

    /// The rule the next step will execute.
    pub fn pending_rule(&self) -> &'static Rule {
        rules::lookup(self.state, self.work.read())
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    /// Contents of the work tape.
    pub fn work_tape_value(&self) -> &BitVector {
        self.work.bits()
    }

    /// Contents of the input tape, including bits already consumed.
    pub fn input_tape_value(&self) -> &BitVector {
        self.input.bits()
    }

    /// Contents of the output tape.
    pub fn output_tape_value(&self) -> &BitVector {
        self.output.bits()
    }

    pub fn work_head(&self) -> u64 {
        self.work.head()
    }

    pub fn input_head(&self) -> u64 {
        self.input.head()
    }

    pub fn output_head(&self) -> u64 {
        self.output.head()
    }

    /// Output bits emitted so far, in order.
    pub fn emitted_output(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.output.head()).map(move |pos| self.output.bits().get(pos))
    }

    /// Steps executed since construction.
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Recorded steps, when history was enabled at construction.
    pub fn history(&self) -> Option<&ExecutionHistory> {
        self.history.as_ref()
    }
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self::from_parts(
            Tape::default(),
            BitVector::new(),
            MachineState::INITIAL,
            false,
            None,
        )
    }
}
