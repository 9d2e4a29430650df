//! Builder API for creating run limits.

use crate::limits::context::StepContext;
use crate::limits::policy::{LimitCheck, RunLimits};
use crate::limits::violations::{LimitViolation, ViolationStrategy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating run limits
pub struct LimitsBuilder {
    max_steps: Option<u64>,
    max_tape_bits: Option<u64>,
    required_checks: Vec<LimitCheck>,
    on_violation: ViolationStrategy,
}

impl LimitsBuilder {
    pub fn new() -> Self {
        Self {
            max_steps: None,
            max_tape_bits: None,
            required_checks: Vec::new(),
            on_violation: ViolationStrategy::Abort,
        }
    }

    /// Set the maximum number of steps the engine may execute
    pub fn max_steps(mut self, n: u64) -> Self {
        self.max_steps = Some(n);
        self
    }

    /// Keep writing heads below this bit position
    pub fn max_tape_bits(mut self, bits: u64) -> Self {
        self.max_tape_bits = Some(bits);
        self
    }

    /// Add a check that runs before every step
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&StepContext) -> Validation<(), NonEmptyVec<LimitViolation>> + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a predicate check; a false result reports `error_msg`
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&StepContext) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &StepContext| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(LimitViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Choose whether violations abort the step or only log a warning
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    pub fn build(self) -> RunLimits {
        RunLimits {
            max_steps: self.max_steps,
            max_tape_bits: self.max_tape_bits,
            required_checks: self.required_checks,
            on_violation: self.on_violation,
        }
    }
}

impl Default for LimitsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
