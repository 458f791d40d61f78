//! Machine that owns states and dispatches transitions between them.

use super::error::MachineError;
use crate::core::{Identifier, State, StateHistory, StateTransition};
use chrono::Utc;
use std::fmt;

/// Ordered registry of states with a single current state.
///
/// The first state ever added becomes current. States sharing an
/// identifier are allowed: the most recently added one shadows the
/// others for transition dispatch, lookup and removal.
///
/// # Example
///
/// ```rust
/// use statewright::core::{FnBehavior, State};
/// use statewright::{identifier_enum, Machine};
///
/// identifier_enum! {
///     enum Mode { Idle, Running }
/// }
///
/// identifier_enum! {
///     enum Signal { Start, Stop }
/// }
///
/// let mut machine: Machine<Mode, Signal, ()> = Machine::from_states([
///     State::new(Mode::Idle, FnBehavior::inert()).with_transition(Signal::Start, Mode::Running),
///     State::new(Mode::Running, FnBehavior::inert()).with_transition(Signal::Stop, Mode::Idle),
/// ]);
///
/// assert_eq!(machine.current_state_id(), Ok(&Mode::Idle));
/// assert_eq!(machine.perform_transition(&Signal::Start), Ok(true));
/// assert_eq!(machine.current_state_id(), Ok(&Mode::Running));
/// assert_eq!(machine.perform_transition(&Signal::Start), Ok(false));
/// ```
pub struct Machine<S: Identifier, T: Identifier, C> {
    states: Vec<State<S, T, C>>,
    current: Option<usize>,
    history: Option<StateHistory<S, T>>,
}

impl<S: Identifier, T: Identifier, C> Machine<S, T, C> {
    /// Create an empty machine with no current state.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            current: None,
            history: None,
        }
    }

    /// Create a machine and add each state in order.
    pub fn from_states<I>(states: I) -> Self
    where
        I: IntoIterator<Item = State<S, T, C>>,
    {
        let mut machine = Self::new();
        for state in states {
            machine.add_state(state);
        }
        machine
    }

    /// Record every performed transition from now on.
    ///
    /// The history grows by one entry per performed transition and is
    /// never pruned; long-running machines should call
    /// [`clear_history`](Self::clear_history) periodically.
    pub fn with_history(mut self) -> Self {
        self.history.get_or_insert_with(StateHistory::new);
        self
    }

    /// Append a state to the registry.
    ///
    /// The first state added becomes current without its entry hook
    /// being called. Later additions never change the current state.
    pub fn add_state(&mut self, state: State<S, T, C>) {
        tracing::debug!(state = state.id().name(), "state registered");
        self.states.push(state);
        if self.current.is_none() {
            let index = self.states.len() - 1;
            tracing::debug!(
                state = self.states[index].id().name(),
                "initial state selected"
            );
            self.current = Some(index);
        }
    }

    /// Remove the most recently added state with identifier `id`.
    ///
    /// Returns `Ok(false)` if no state matches. The current state cannot
    /// be removed; attempting it leaves the registry unchanged.
    pub fn remove_state(&mut self, id: &S) -> Result<bool, MachineError> {
        let Some(index) = self.resolve(id) else {
            tracing::trace!(state = id.name(), "no state to remove");
            return Ok(false);
        };

        if self.current == Some(index) {
            tracing::warn!(state = id.name(), "refusing to remove current state");
            return Err(MachineError::ActiveStateRemoval {
                state: id.name().to_string(),
            });
        }

        self.states.remove(index);
        if let Some(current) = self.current.as_mut() {
            if *current > index {
                *current -= 1;
            }
        }
        tracing::debug!(state = id.name(), "state removed");
        Ok(true)
    }

    /// Fire `transition` from the current state.
    ///
    /// Returns `Ok(false)` without side effects when the current state
    /// has no mapping for `transition` or the destination is not
    /// registered. Otherwise the current state's exit hook runs, then
    /// the destination's entry hook, and only then does the destination
    /// become current.
    pub fn perform_transition(&mut self, transition: &T) -> Result<bool, MachineError> {
        let current = self.current_index()?;

        let Some(destination) = self.states[current].transition_output(transition) else {
            tracing::trace!(
                state = self.states[current].id().name(),
                transition = transition.name(),
                "transition not mapped"
            );
            return Ok(false);
        };

        let Some(next) = self.resolve(destination) else {
            tracing::trace!(
                transition = transition.name(),
                to = destination.name(),
                "destination not registered"
            );
            return Ok(false);
        };

        let from = self.states[current].id().clone();
        let to = self.states[next].id().clone();

        self.states[current].on_exit();
        self.states[next].on_enter();
        self.current = Some(next);

        tracing::info!(
            from = from.name(),
            via = transition.name(),
            to = to.name(),
            "transition performed"
        );

        if let Some(history) = self.history.as_mut() {
            history.record(StateTransition {
                from,
                to,
                via: transition.clone(),
                timestamp: Utc::now(),
            });
        }

        Ok(true)
    }

    /// Ask the current state which transition applies to `context`.
    pub fn reason(&self, context: &C) -> Result<Option<T>, MachineError> {
        Ok(self.current_state()?.reason(context))
    }

    /// Run the current state's per-tick work.
    pub fn act(&mut self, context: &mut C) -> Result<(), MachineError> {
        self.current_state_mut()?.act(context);
        Ok(())
    }

    pub fn current_state(&self) -> Result<&State<S, T, C>, MachineError> {
        let index = self.current_index()?;
        Ok(&self.states[index])
    }

    pub fn current_state_mut(&mut self) -> Result<&mut State<S, T, C>, MachineError> {
        let index = self.current_index()?;
        Ok(&mut self.states[index])
    }

    pub fn current_state_id(&self) -> Result<&S, MachineError> {
        Ok(self.current_state()?.id())
    }

    /// Whether a current state exists, i.e. at least one state was added.
    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    /// The state dispatch would select for `id`.
    pub fn state(&self, id: &S) -> Option<&State<S, T, C>> {
        self.resolve(id).map(|index| &self.states[index])
    }

    pub fn state_mut(&mut self, id: &S) -> Option<&mut State<S, T, C>> {
        let index = self.resolve(id)?;
        Some(&mut self.states[index])
    }

    pub fn contains_state(&self, id: &S) -> bool {
        self.resolve(id).is_some()
    }

    /// Registered states in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &State<S, T, C>> {
        self.states.iter()
    }

    /// Registered identifiers in insertion order, duplicates included.
    pub fn state_ids(&self) -> impl Iterator<Item = &S> {
        self.states.iter().map(State::id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Transition history, if enabled with [`with_history`](Self::with_history).
    pub fn history(&self) -> Option<&StateHistory<S, T>> {
        self.history.as_ref()
    }

    /// Drop all recorded transitions, keeping history enabled.
    pub fn clear_history(&mut self) {
        if let Some(history) = self.history.as_mut() {
            history.clear();
        }
    }

    /// Most recently added index holding `id`.
    fn resolve(&self, id: &S) -> Option<usize> {
        self.states.iter().rposition(|state| state.id() == id)
    }

    fn current_index(&self) -> Result<usize, MachineError> {
        self.current.ok_or(MachineError::NotInitialized)
    }
}

impl<S: Identifier, T: Identifier, C> Default for Machine<S, T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Identifier, T: Identifier, C> FromIterator<State<S, T, C>> for Machine<S, T, C> {
    fn from_iter<I: IntoIterator<Item = State<S, T, C>>>(iter: I) -> Self {
        Self::from_states(iter)
    }
}

impl<S: Identifier, T: Identifier, C> fmt::Debug for Machine<S, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("states", &self.states)
            .field(
                "current",
                &self.current.map(|index| self.states[index].id()),
            )
            .field("history", &self.history)
            .finish()
    }
}
