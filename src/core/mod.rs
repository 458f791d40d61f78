//! Building blocks of a machine: identifiers, per-state behavior, states
//! with their transition tables, and transition history.
//!
//! Nothing in this module knows about the current state; that lives in
//! [`Machine`](crate::Machine).

mod behavior;
mod history;
mod id;
mod state;

pub use behavior::{FnBehavior, StateBehavior};
pub use history::{StateHistory, StateTransition};
pub use id::Identifier;
pub use state::State;
