//! Builder for assembling machines at startup.

use crate::builder::error::BuildError;
use crate::core::{Identifier, State};
use crate::machine::Machine;
use std::collections::HashSet;

/// Builder for constructing machines with a fluent API.
///
/// Unlike [`Machine::from_states`], the builder can check the
/// configuration before any state is registered.
pub struct MachineBuilder<S: Identifier, T: Identifier, C> {
    states: Vec<State<S, T, C>>,
    unique_ids: bool,
    validate_destinations: bool,
    track_history: bool,
}

impl<S: Identifier, T: Identifier, C> MachineBuilder<S, T, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            unique_ids: false,
            validate_destinations: false,
            track_history: false,
        }
    }

    /// Add a state. The first state added is the initial state.
    pub fn state(mut self, state: State<S, T, C>) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once, in order.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = State<S, T, C>>,
    {
        self.states.extend(states);
        self
    }

    /// Reject configurations where two states share an identifier.
    pub fn unique_ids(mut self) -> Self {
        self.unique_ids = true;
        self
    }

    /// Reject transitions whose destination is never registered.
    pub fn validate_destinations(mut self) -> Self {
        self.validate_destinations = true;
        self
    }

    /// Enable transition history on the built machine.
    pub fn track_history(mut self) -> Self {
        self.track_history = true;
        self
    }

    /// Build the machine.
    /// Returns an error if there are no states or an enabled check fails.
    pub fn build(self) -> Result<Machine<S, T, C>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        if self.unique_ids {
            let mut seen = HashSet::new();
            if let Some(duplicate) = self.states.iter().find(|state| !seen.insert(state.id())) {
                return Err(BuildError::DuplicateStateId {
                    id: duplicate.id().name().to_string(),
                });
            }
        }

        if self.validate_destinations {
            let known: HashSet<&S> = self.states.iter().map(State::id).collect();
            for state in &self.states {
                if let Some((transition, to)) =
                    state.transitions().find(|(_, to)| !known.contains(to))
                {
                    return Err(BuildError::UnknownDestination {
                        from: state.id().name().to_string(),
                        transition: transition.name().to_string(),
                        to: to.name().to_string(),
                    });
                }
            }
        }

        let machine = Machine::from_states(self.states);
        Ok(if self.track_history {
            machine.with_history()
        } else {
            machine
        })
    }
}

impl<S: Identifier, T: Identifier, C> Default for MachineBuilder<S, T, C> {
    fn default() -> Self {
        Self::new()
    }
}
