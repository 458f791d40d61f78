//! Statewright: a small finite state machine framework.
//!
//! A [`Machine`] owns a set of [`State`]s, each with its own transition
//! table and its own [`StateBehavior`]. The application drives the
//! machine: on each tick it asks the current state to `reason` about a
//! context, fires the returned transition with `perform_transition`, and
//! lets the current state `act`. When and how often to tick is entirely
//! up to the caller.
//!
//! # Core Concepts
//!
//! - **Identifiers**: Comparable tags for states and transitions via the `Identifier` trait
//! - **States**: An identifier, a transition table and a boxed behavior
//! - **Machine**: Ordered registry with exactly one current state once populated
//! - **History**: Optional record of performed transitions
//!
//! # Example
//!
//! ```rust
//! use statewright::core::{FnBehavior, State};
//! use statewright::{identifier_enum, Machine};
//!
//! identifier_enum! {
//!     enum Mode { Idle, Running }
//! }
//!
//! identifier_enum! {
//!     enum Signal { Start, Stop }
//! }
//!
//! let idle = State::new(
//!     Mode::Idle,
//!     FnBehavior::new(|queue: &Vec<u32>| (!queue.is_empty()).then_some(Signal::Start), |_| {}),
//! )
//! .with_transition(Signal::Start, Mode::Running);
//!
//! let running = State::new(
//!     Mode::Running,
//!     FnBehavior::new(
//!         |queue: &Vec<u32>| queue.is_empty().then_some(Signal::Stop),
//!         |queue: &mut Vec<u32>| {
//!             queue.pop();
//!         },
//!     ),
//! )
//! .with_transition(Signal::Stop, Mode::Idle);
//!
//! let mut machine = Machine::from_states([idle, running]);
//! let mut queue = vec![1, 2];
//!
//! for _ in 0..4 {
//!     if let Some(signal) = machine.reason(&queue).unwrap() {
//!         machine.perform_transition(&signal).unwrap();
//!     }
//!     machine.act(&mut queue).unwrap();
//! }
//!
//! assert!(queue.is_empty());
//! assert_eq!(machine.current_state_id(), Ok(&Mode::Idle));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use core::{FnBehavior, Identifier, State, StateBehavior, StateHistory, StateTransition};
pub use machine::{Machine, MachineError};
