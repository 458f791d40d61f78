//! The state registry and transition dispatch.
//!
//! A [`Machine`] owns its states, tracks which one is current and swaps
//! it when a transition fires. When to tick, and what to do each tick,
//! is up to the caller.

mod error;
mod fsm;

pub use error::MachineError;
pub use fsm::Machine;
