//! Macros for declaring identifier enums.

/// Declare a fieldless enum and implement
/// [`Identifier`](crate::core::Identifier) for it.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug`, `Serialize` and `Deserialize`, and `name()` returns the
/// variant name.
///
/// # Example
///
/// ```
/// use statewright::core::Identifier;
/// use statewright::identifier_enum;
///
/// identifier_enum! {
///     pub enum GuardState {
///         Patrol,
///         Chase,
///         Return,
///     }
/// }
///
/// assert_eq!(GuardState::Chase.name(), "Chase");
/// ```
#[macro_export]
macro_rules! identifier_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Identifier for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
