//! Builder API for engine construction.
//!
//! [`EngineBuilder`] validates every construction parameter up front, so problems
//! are reported before any step runs.
//!
//! # Example
//!
//! ```
//! use monotone::builder::EngineBuilder;
//! use monotone::tape::BitVector;
//!
//! let engine = EngineBuilder::new()
//!     .initial_state(9)
//!     .work_tape(BitVector::from(0b110))
//!     .work_head(3)
//!     .input([true, false, true])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(engine.work_head(), 3);
//! ```

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::EngineBuilder;
