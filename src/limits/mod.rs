//! Validation-based run limits for the engine.
//!
//! The machine itself has no failure modes beyond running out of memory, but
//! a long computation can be bounded by a step budget, a bound on how far the
//! writing heads may travel, or custom checks. Limits are evaluated before
//! each step using Stillwater's `Validation` type, so a refused step reports
//! every violated limit at once.
//!
//! # Example
//!
//! ```rust
//! use monotone::engine::EngineError;
//! use monotone::limits::LimitsBuilder;
//! use monotone::EngineBuilder;
//!
//! let limits = LimitsBuilder::new().max_steps(10).build();
//! let mut engine = EngineBuilder::new().limits(limits).build().unwrap();
//!
//! let summary = engine.run(10).unwrap();
//! assert_eq!(summary.steps, 10);
//! assert!(matches!(engine.step(), Err(EngineError::LimitExceeded { .. })));
//! ```

pub mod builder;
pub mod context;
pub mod policy;
pub mod violations;

pub use builder::LimitsBuilder;
pub use context::StepContext;
pub use policy::{LimitCheck, RunLimits};
pub use violations::{LimitViolation, ViolationStrategy};
