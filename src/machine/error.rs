//! Errors raised by [`Machine`](super::Machine) operations.

use thiserror::Error;

/// Conditions a machine refuses to proceed under.
///
/// Soft outcomes such as an unknown transition are reported as `Ok(false)`
/// instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    #[error("Machine not initialized: no state has been registered")]
    NotInitialized,

    #[error("Cannot remove state '{state}' while it is the current state")]
    ActiveStateRemoval { state: String },
}
