//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("No states defined. Add at least one state with .state(...)")]
    NoStates,

    #[error("State '{id}' registered more than once while unique ids are required")]
    DuplicateStateId { id: String },

    #[error("Transition '{transition}' from '{from}' targets unregistered state '{to}'")]
    UnknownDestination {
        from: String,
        transition: String,
        to: String,
    },
}
