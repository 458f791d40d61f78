//! A named node of the machine and its transition table.

use super::behavior::StateBehavior;
use super::id::Identifier;
use std::collections::HashMap;
use std::fmt;

/// A state: an identifier, the transitions leaving it, and the behavior
/// that decides and acts while it is current.
///
/// `S` is the state identifier type, `T` the transition identifier type
/// and `C` the application context handed to `reason` and `act`.
///
/// # Example
///
/// ```rust
/// use statewright::core::{FnBehavior, State};
/// use statewright::identifier_enum;
///
/// identifier_enum! {
///     enum Mode { Idle, Running }
/// }
///
/// identifier_enum! {
///     enum Signal { Start, Stop }
/// }
///
/// let mut idle: State<Mode, Signal, ()> = State::new(Mode::Idle, FnBehavior::inert());
///
/// assert!(idle.add_transition(Signal::Start, Mode::Running));
/// assert!(!idle.add_transition(Signal::Start, Mode::Idle));
/// assert_eq!(idle.transition_output(&Signal::Start), Some(&Mode::Running));
/// assert_eq!(idle.transition_output(&Signal::Stop), None);
/// ```
pub struct State<S: Identifier, T: Identifier, C> {
    id: S,
    transitions: HashMap<T, S>,
    behavior: Box<dyn StateBehavior<T, C>>,
}

impl<S: Identifier, T: Identifier, C> State<S, T, C> {
    /// Create a state with an empty transition table.
    pub fn new<B>(id: S, behavior: B) -> Self
    where
        B: StateBehavior<T, C> + 'static,
    {
        Self {
            id,
            transitions: HashMap::new(),
            behavior: Box::new(behavior),
        }
    }

    /// Add a transition while constructing a state.
    ///
    /// Follows [`add_transition`](Self::add_transition): an existing
    /// mapping for `transition` is kept.
    pub fn with_transition(mut self, transition: T, destination: S) -> Self {
        self.add_transition(transition, destination);
        self
    }

    pub fn id(&self) -> &S {
        &self.id
    }

    /// Map `transition` to `destination`.
    ///
    /// Returns `false` and leaves the table untouched if `transition` is
    /// already mapped.
    pub fn add_transition(&mut self, transition: T, destination: S) -> bool {
        if self.transitions.contains_key(&transition) {
            tracing::trace!(
                state = self.id.name(),
                transition = transition.name(),
                "transition already mapped"
            );
            return false;
        }

        tracing::debug!(
            state = self.id.name(),
            transition = transition.name(),
            to = destination.name(),
            "transition added"
        );
        self.transitions.insert(transition, destination);
        true
    }

    /// Remove the mapping for `transition`. Returns whether one existed.
    pub fn remove_transition(&mut self, transition: &T) -> bool {
        let removed = self.transitions.remove(transition).is_some();
        if removed {
            tracing::debug!(
                state = self.id.name(),
                transition = transition.name(),
                "transition removed"
            );
        }
        removed
    }

    /// Destination reached by firing `transition` from this state.
    ///
    /// `None` means the transition is not registered here.
    pub fn transition_output(&self, transition: &T) -> Option<&S> {
        self.transitions.get(transition)
    }

    pub fn has_transition(&self, transition: &T) -> bool {
        self.transitions.contains_key(transition)
    }

    /// All `(transition, destination)` pairs, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = (&T, &S)> {
        self.transitions.iter()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Ask the behavior which transition applies to `context`.
    pub fn reason(&self, context: &C) -> Option<T> {
        self.behavior.reason(context)
    }

    /// Run the behavior's per-tick work.
    pub fn act(&mut self, context: &mut C) {
        self.behavior.act(context)
    }

    pub fn on_enter(&mut self) {
        self.behavior.on_enter()
    }

    pub fn on_exit(&mut self) {
        self.behavior.on_exit()
    }
}

impl<S: Identifier, T: Identifier, C> fmt::Debug for State<S, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}
