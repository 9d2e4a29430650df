//! Run limits checked before each step, using Validation.

use crate::limits::context::StepContext;
use crate::limits::violations::{LimitViolation, ViolationStrategy};
use crate::tape::TapeKind;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom limit check functions
pub type LimitCheck =
    Box<dyn Fn(&StepContext) -> Validation<(), NonEmptyVec<LimitViolation>> + Send + Sync>;

/// Limits on a run of the engine.
/// Uses Validation to accumulate ALL violations of a step.
pub struct RunLimits {
    pub(crate) max_steps: Option<u64>,
    pub(crate) max_tape_bits: Option<u64>,
    pub(crate) required_checks: Vec<LimitCheck>,
    pub(crate) on_violation: ViolationStrategy,
}

impl RunLimits {
    /// Check every limit against the configuration about to be stepped.
    /// Returns Validation::Failure with ALL violations if any fail.
    pub fn enforce(&self, context: &StepContext) -> Validation<(), NonEmptyVec<LimitViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<LimitViolation>>> = Vec::new();

        if let Some(max) = self.max_steps {
            let check = if context.steps_taken >= max {
                Validation::fail(LimitViolation::StepBudgetExceeded {
                    max,
                    taken: context.steps_taken,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        // Heads that can write must stay inside the bound
        if let Some(max) = self.max_tape_bits {
            for (tape, position) in [
                (TapeKind::Work, context.work_head),
                (TapeKind::Output, context.output_head),
            ] {
                let check = if position >= max {
                    Validation::fail(LimitViolation::TapeBoundExceeded {
                        tape,
                        position,
                        max,
                    })
                } else {
                    Validation::success(())
                };
                checks.push(check);
            }
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(context));
        }

        if checks.is_empty() {
            return Validation::success(());
        }

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn max_steps(&self) -> Option<u64> {
        self.max_steps
    }

    pub fn max_tape_bits(&self) -> Option<u64> {
        self.max_tape_bits
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }
}

impl fmt::Debug for RunLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunLimits")
            .field("max_steps", &self.max_steps)
            .field("max_tape_bits", &self.max_tape_bits)
            .field("required_checks", &self.required_checks.len())
            .field("on_violation", &self.on_violation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MachineState;
    use crate::limits::builder::LimitsBuilder;

    fn context(steps_taken: u64, work_head: u64, output_head: u64) -> StepContext {
        StepContext {
            steps_taken,
            state: MachineState::INITIAL,
            work_head,
            input_head: 0,
            output_head,
        }
    }

    #[test]
    fn every_broken_limit_is_reported() {
        let limits = LimitsBuilder::new()
            .max_steps(10)
            .max_tape_bits(64)
            .require_pred(|_ctx| false, "always fails".to_string())
            .build();

        let result = limits.enforce(&context(10, 64, 80));

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);

                let has_budget = errors
                    .iter()
                    .any(|e| matches!(e, LimitViolation::StepBudgetExceeded { .. }));
                let has_work_bound = errors.iter().any(|e| {
                    matches!(
                        e,
                        LimitViolation::TapeBoundExceeded {
                            tape: TapeKind::Work,
                            ..
                        }
                    )
                });
                let has_output_bound = errors.iter().any(|e| {
                    matches!(
                        e,
                        LimitViolation::TapeBoundExceeded {
                            tape: TapeKind::Output,
                            ..
                        }
                    )
                });
                let has_custom = errors
                    .iter()
                    .any(|e| matches!(e, LimitViolation::CustomCheckFailed { .. }));

                assert!(has_budget);
                assert!(has_work_bound);
                assert!(has_output_bound);
                assert!(has_custom);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn passes_when_within_all_limits() {
        let limits = LimitsBuilder::new()
            .max_steps(10)
            .max_tape_bits(64)
            .require_pred(|_ctx| true, "always passes".to_string())
            .build();

        assert!(limits.enforce(&context(9, 63, 63)).is_success());
    }

    #[test]
    fn step_budget_counts_executed_steps() {
        let limits = LimitsBuilder::new().max_steps(3).build();

        assert!(limits.enforce(&context(2, 0, 0)).is_success());
        assert!(limits.enforce(&context(3, 0, 0)).is_failure());
    }

    #[test]
    fn custom_validation_check_works() {
        let limits = LimitsBuilder::new()
            .require(|ctx: &StepContext| {
                if !ctx.state.is_splice() {
                    Validation::success(())
                } else {
                    Validation::fail(LimitViolation::CustomCheckFailed {
                        message: "no I/O allowed".to_string(),
                    })
                }
            })
            .build();

        let mut ctx = context(0, 0, 0);
        assert!(limits.enforce(&ctx).is_success());

        ctx.state = MachineState::IO_DECIDE;
        assert!(limits.enforce(&ctx).is_failure());
    }

    #[test]
    fn unlimited_rules_always_pass() {
        let limits = LimitsBuilder::new().build();
        assert!(limits.enforce(&context(u64::MAX, u64::MAX, u64::MAX)).is_success());
    }

    #[test]
    fn violation_strategy_is_stored() {
        let limits = LimitsBuilder::new()
            .on_violation(ViolationStrategy::Warn)
            .build();

        assert_eq!(limits.violation_strategy(), ViolationStrategy::Warn);
    }
}
