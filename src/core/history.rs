//! Record of performed transitions.
//!
//! A machine with history enabled appends one [`StateTransition`] each
//! time `perform_transition` swaps the current state.

use super::id::Identifier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single performed transition.
///
/// # Example
///
/// ```rust
/// use statewright::core::StateTransition;
/// use statewright::identifier_enum;
/// use chrono::Utc;
///
/// identifier_enum! {
///     enum Mode { Idle, Running }
/// }
///
/// identifier_enum! {
///     enum Signal { Start }
/// }
///
/// let transition = StateTransition {
///     from: Mode::Idle,
///     to: Mode::Running,
///     via: Signal::Start,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.via, Signal::Start);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: Identifier, T: Identifier> {
    /// The state that stopped being current
    pub from: S,
    /// The state that became current
    pub to: S,
    /// The transition that was fired
    pub via: T,
    /// When the swap happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of performed transitions.
///
/// # Example
///
/// ```rust
/// use statewright::core::{StateHistory, StateTransition};
/// use statewright::identifier_enum;
/// use chrono::Utc;
///
/// identifier_enum! {
///     enum Mode { Idle, Running }
/// }
///
/// identifier_enum! {
///     enum Signal { Start, Stop }
/// }
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition {
///     from: Mode::Idle,
///     to: Mode::Running,
///     via: Signal::Start,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: Mode::Running,
///     to: Mode::Idle,
///     via: Signal::Stop,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Mode::Idle, &Mode::Running, &Mode::Idle]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: Identifier, T: Identifier> {
    transitions: Vec<StateTransition<S, T>>,
}

impl<S: Identifier, T: Identifier> Default for StateHistory<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Identifier, T: Identifier> StateHistory<S, T> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, transition: StateTransition<S, T>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions. If the wall clock
    /// stepped backwards so the last timestamp precedes the first, the
    /// duration is zero.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        Some(
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .unwrap_or(Duration::ZERO),
        )
    }

    pub fn transitions(&self) -> &[StateTransition<S, T>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Mode {
        Idle,
        Running,
        Paused,
    }

    impl Identifier for Mode {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Paused => "Paused",
            }
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Signal {
        Start,
        Pause,
    }

    impl Identifier for Signal {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Pause => "Pause",
            }
        }
    }

    fn transition(from: Mode, to: Mode, via: Signal) -> StateTransition<Mode, Signal> {
        StateTransition {
            from,
            to,
            via,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Mode, Signal> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_appends_in_order() {
        let mut history = StateHistory::new();
        history.record(transition(Mode::Idle, Mode::Running, Signal::Start));
        history.record(transition(Mode::Running, Mode::Paused, Signal::Pause));

        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions()[0].via, Signal::Start);
        assert_eq!(history.transitions()[1].via, Signal::Pause);
        assert_eq!(
            history.get_path(),
            vec![&Mode::Idle, &Mode::Running, &Mode::Paused]
        );
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let mut history = StateHistory::new();
        history.record(StateTransition {
            from: Mode::Idle,
            to: Mode::Running,
            via: Signal::Start,
            timestamp: start,
        });
        history.record(StateTransition {
            from: Mode::Running,
            to: Mode::Paused,
            via: Signal::Pause,
            timestamp: start + ChronoDuration::seconds(5),
        });

        assert_eq!(history.duration(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn duration_is_zero_when_clock_steps_back() {
        let start = Utc::now();
        let mut history = StateHistory::new();
        history.record(StateTransition {
            from: Mode::Idle,
            to: Mode::Running,
            via: Signal::Start,
            timestamp: start,
        });
        history.record(StateTransition {
            from: Mode::Running,
            to: Mode::Paused,
            via: Signal::Pause,
            timestamp: start - ChronoDuration::seconds(3),
        });

        assert_eq!(history.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn clear_empties_history() {
        let mut history = StateHistory::new();
        history.record(transition(Mode::Idle, Mode::Running, Signal::Start));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new();
        history.record(transition(Mode::Idle, Mode::Running, Signal::Start));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Mode, Signal> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.transitions()[0].from, Mode::Idle);
        assert_eq!(deserialized.transitions()[0].to, Mode::Running);
    }
}
