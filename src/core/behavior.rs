//! Per-state behavior supplied by the application.
//!
//! The machine owns the transition table; deciding which transition
//! applies and doing the state's work is left to a [`StateBehavior`]
//! implementation, one per concrete state.

/// Decision and work logic for a single state.
///
/// `reason` should be a pure function of the context. `act` is where the
/// state mutates the context. The lifecycle hooks default to no-ops and
/// are invoked by [`Machine`](crate::Machine) when the state stops or
/// starts being current, exit before entry.
///
/// # Example
///
/// ```rust
/// use statewright::core::StateBehavior;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Trigger {
///     Overheat,
/// }
///
/// struct Heating;
///
/// impl StateBehavior<Trigger, f32> for Heating {
///     fn reason(&self, temperature: &f32) -> Option<Trigger> {
///         (*temperature > 90.0).then_some(Trigger::Overheat)
///     }
///
///     fn act(&mut self, temperature: &mut f32) {
///         *temperature += 5.0;
///     }
/// }
///
/// let mut heating = Heating;
/// let mut temperature = 88.0;
/// assert_eq!(heating.reason(&temperature), None);
/// heating.act(&mut temperature);
/// assert_eq!(heating.reason(&temperature), Some(Trigger::Overheat));
/// ```
pub trait StateBehavior<T, C> {
    /// Decide which transition currently applies, if any.
    fn reason(&self, context: &C) -> Option<T>;

    /// Perform this state's per-tick work.
    fn act(&mut self, context: &mut C);

    /// Called when the state becomes current.
    fn on_enter(&mut self) {}

    /// Called when the state stops being current.
    fn on_exit(&mut self) {}
}

type ReasonFn<T, C> = Box<dyn Fn(&C) -> Option<T>>;
type ActFn<C> = Box<dyn FnMut(&mut C)>;
type HookFn = Box<dyn FnMut()>;

/// Closure-backed [`StateBehavior`] for states that carry no data.
///
/// # Example
///
/// ```rust
/// use statewright::core::{FnBehavior, StateBehavior};
///
/// let mut counter = FnBehavior::new(
///     |n: &u32| (*n >= 3).then_some("done"),
///     |n: &mut u32| *n += 1,
/// );
///
/// let mut ticks = 0;
/// while counter.reason(&ticks).is_none() {
///     counter.act(&mut ticks);
/// }
/// assert_eq!(ticks, 3);
/// ```
pub struct FnBehavior<T, C> {
    reason: ReasonFn<T, C>,
    act: ActFn<C>,
    on_enter: Option<HookFn>,
    on_exit: Option<HookFn>,
}

impl<T, C> FnBehavior<T, C> {
    /// Create a behavior from a reasoning closure and an acting closure.
    pub fn new<R, A>(reason: R, act: A) -> Self
    where
        R: Fn(&C) -> Option<T> + 'static,
        A: FnMut(&mut C) + 'static,
    {
        FnBehavior {
            reason: Box::new(reason),
            act: Box::new(act),
            on_enter: None,
            on_exit: None,
        }
    }

    /// Behavior that never requests a transition and does nothing.
    pub fn inert() -> Self
    where
        T: 'static,
        C: 'static,
    {
        Self::new(|_: &C| None, |_: &mut C| {})
    }

    /// Attach an entry hook.
    pub fn when_entered<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_enter = Some(Box::new(hook));
        self
    }

    /// Attach an exit hook.
    pub fn when_exited<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_exit = Some(Box::new(hook));
        self
    }
}

impl<T, C> StateBehavior<T, C> for FnBehavior<T, C> {
    fn reason(&self, context: &C) -> Option<T> {
        (self.reason)(context)
    }

    fn act(&mut self, context: &mut C) {
        (self.act)(context)
    }

    fn on_enter(&mut self) {
        if let Some(hook) = self.on_enter.as_mut() {
            hook();
        }
    }

    fn on_exit(&mut self) {
        if let Some(hook) = self.on_exit.as_mut() {
            hook();
        }
    }
}
