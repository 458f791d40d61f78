//! Programmatic configuration of machines.
//!
//! Machines are assembled at startup, either directly through
//! [`Machine::from_states`](crate::Machine::from_states) or through
//! [`MachineBuilder`] when the configuration should be checked first.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;

use crate::core::{FnBehavior, Identifier, State};

/// Create a state whose behavior never requests a transition and does
/// nothing, with the given transitions already mapped.
///
/// Useful for terminal states and for tests that drive the machine
/// purely through `perform_transition`.
///
/// # Example
///
/// ```
/// use statewright::builder::passive_state;
/// use statewright::identifier_enum;
///
/// identifier_enum! {
///     enum Door { Open, Closed }
/// }
///
/// identifier_enum! {
///     enum Push { Close }
/// }
///
/// let open = passive_state::<_, _, ()>(Door::Open, [(Push::Close, Door::Closed)]);
/// assert_eq!(open.transition_output(&Push::Close), Some(&Door::Closed));
/// ```
pub fn passive_state<S, T, C>(
    id: S,
    transitions: impl IntoIterator<Item = (T, S)>,
) -> State<S, T, C>
where
    S: Identifier,
    T: Identifier + 'static,
    C: 'static,
{
    transitions
        .into_iter()
        .fold(State::new(id, FnBehavior::inert()), |state, (t, to)| {
            state.with_transition(t, to)
        })
}
