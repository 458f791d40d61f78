//! Identifier trait shared by state and transition tags.
//!
//! States and transitions are both named by small, comparable, finite
//! tags. In practice these are fieldless enums declared with
//! [`identifier_enum!`](crate::identifier_enum).

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state and transition identifiers.
///
/// Identifiers are plain values: cheap to clone, hashable so they can key
/// a transition table, and serializable so transition history can be
/// persisted.
///
/// # Example
///
/// ```rust
/// use statewright::core::Identifier;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl Identifier for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait Identifier: Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> {
    /// Human-readable name used in logs and error messages.
    fn name(&self) -> &str;
}
