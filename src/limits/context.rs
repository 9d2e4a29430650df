//! Context provided to limit checks.

use crate::core::MachineState;

/// Engine configuration about to be stepped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepContext {
    /// Steps already executed
    pub steps_taken: u64,
    pub state: MachineState,
    pub work_head: u64,
    pub input_head: u64,
    pub output_head: u64,
}
