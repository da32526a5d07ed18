//! Delay - a suspended computation.
//!
//! `Delay<A, T>` wraps a function `A -> T` without running it. Binding
//! arguments with [`apply`](Delay::apply) produces another suspended
//! `Delay<(), T>`; only [`run`](Delay::run) executes. Each `run` executes the
//! function again from scratch: nothing is cached.
//!
//! Several parameters are passed as a tuple, no parameters as `()`.
//!
//! # Examples
//!
//! ```rust
//! use kinder::effect::Delay;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let counter = Rc::new(Cell::new(0));
//! let increment = Delay::new(|counter: Rc<Cell<i32>>| {
//!     counter.set(counter.get() + 1);
//!     counter.get()
//! });
//!
//! let suspended = increment.apply(Rc::clone(&counter));
//! assert_eq!(counter.get(), 0);
//!
//! assert_eq!(suspended.run(()), 1);
//! assert_eq!(suspended.run(()), 2);
//! ```
//!
//! # Monoid
//!
//! `Delay<T, T>` is a monoid over endo-functions whose identity is the
//! identity function. The operator decides how the two raw functions compose:
//!
//! ```rust
//! use kinder::effect::{Delay, DelayedFn};
//! use kinder::typeclass::{Monoid, Semigroup};
//! use std::rc::Rc;
//!
//! fn and_then(first: DelayedFn<i32, i32>, second: DelayedFn<i32, i32>) -> DelayedFn<i32, i32> {
//!     Rc::new(move |x| second(first(x)))
//! }
//!
//! let square = Delay::new(|x: i32| x * x);
//! let double = Delay::new(|x: i32| x * 2);
//!
//! let composed = Semigroup::combined(square, double, and_then);
//! assert_eq!(composed.run(10), 200);
//!
//! let neutral = Semigroup::combined(Delay::identity(), composed, and_then);
//! assert_eq!(neutral.run(10), 200);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Monoid, Semigroup};

/// The shared callable held by a [`Delay`].
pub type DelayedFn<A, T> = Rc<dyn Fn(A) -> T>;

/// A suspended computation from `A` to `T`.
pub struct Delay<A, T>
where
    A: 'static,
    T: 'static,
{
    function: DelayedFn<A, T>,
}

static_assertions::assert_not_impl_any!(Delay<(), i32>: Send, Sync);

impl<A, T> Delay<A, T>
where
    A: 'static,
    T: 'static,
{
    /// Wraps `function` without calling it.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> T + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Wraps `function` without calling it. Alias of [`Delay::new`].
    pub fn of<F>(function: F) -> Self
    where
        F: Fn(A) -> T + 'static,
    {
        Self::new(function)
    }

    /// Wraps an already shared callable.
    pub const fn from_shared(function: DelayedFn<A, T>) -> Self {
        Self { function }
    }

    /// Returns the wrapped callable.
    pub fn shared(&self) -> DelayedFn<A, T> {
        Rc::clone(&self.function)
    }

    /// Binds `arguments`, returning a computation that still has not run.
    ///
    /// The arguments are cloned into every run.
    pub fn apply(&self, arguments: A) -> Delay<(), T>
    where
        A: Clone,
    {
        let function = Rc::clone(&self.function);
        Delay::new(move |()| function(arguments.clone()))
    }

    /// Executes the computation now.
    pub fn run(&self, arguments: A) -> T {
        (self.function)(arguments)
    }

    /// Transforms the result once the computation runs.
    pub fn map<N, F>(self, function: F) -> Delay<A, N>
    where
        F: Fn(T) -> N + 'static,
        N: 'static,
    {
        let original_function = self.function;
        Delay::new(move |arguments| function(original_function(arguments)))
    }

    /// Sequences a further suspended computation built from this one's result.
    ///
    /// Running the returned `Delay` with `arguments` runs `self` with them,
    /// passes the result to `function`, and runs the `Delay` it returns.
    ///
    /// ```rust
    /// use kinder::effect::Delay;
    ///
    /// let parse = Delay::new(|text: String| text.len());
    /// let describe = parse.bind(|length| Delay::new(move |()| format!("{length} bytes")));
    /// assert_eq!(describe.run("four".to_string()), "4 bytes");
    /// ```
    pub fn bind<N, F>(self, function: F) -> Delay<A, N>
    where
        F: Fn(T) -> Delay<(), N> + 'static,
        N: 'static,
    {
        let original_function = self.function;
        Delay::new(move |arguments| function(original_function(arguments)).run(()))
    }

    /// Builds a new `Delay` from the two raw callables.
    ///
    /// ```rust
    /// use kinder::effect::Delay;
    ///
    /// let length = Delay::new(|text: &'static str| text.len());
    /// let halve = Delay::new(|n: usize| n / 2);
    /// let half_length = length.combined(halve, |first, second| move |text| second(first(text)));
    /// assert_eq!(half_length.run("abcdef"), 3);
    /// ```
    pub fn combined<B, N, C, R, O, G>(self, other: Delay<B, N>, operator: O) -> Delay<C, R>
    where
        B: 'static,
        N: 'static,
        C: 'static,
        R: 'static,
        O: FnOnce(DelayedFn<A, T>, DelayedFn<B, N>) -> G,
        G: Fn(C) -> R + 'static,
    {
        Delay::new(operator(self.function, other.function))
    }
}

impl<A, T> Clone for Delay<A, T>
where
    A: 'static,
    T: 'static,
{
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<A, T> fmt::Debug for Delay<A, T>
where
    A: 'static,
    T: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Delay").finish_non_exhaustive()
    }
}

impl<A, T> fmt::Display for Delay<A, T>
where
    A: 'static,
    T: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Delay>")
    }
}

impl<T> Semigroup for Delay<T, T>
where
    T: 'static,
{
    type Payload = DelayedFn<T, T>;

    fn combined<F>(self, other: Self, operator: F) -> Self
    where
        F: FnOnce(DelayedFn<T, T>, DelayedFn<T, T>) -> DelayedFn<T, T>,
    {
        Self::from_shared(operator(self.function, other.function))
    }
}

impl<T> Monoid for Delay<T, T>
where
    T: 'static,
{
    fn identity() -> Self {
        Self::new(|value| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn new_does_not_run() {
        let runs = Rc::new(Cell::new(0));
        let observed = Rc::clone(&runs);
        let _delay = Delay::new(move |()| observed.set(observed.get() + 1));
        assert_eq!(runs.get(), 0);
    }

    #[rstest]
    fn apply_does_not_run() {
        let runs = Rc::new(Cell::new(0));
        let observed = Rc::clone(&runs);
        let delay = Delay::new(move |step: i32| observed.set(observed.get() + step));
        let applied = delay.apply(5);
        assert_eq!(runs.get(), 0);
        applied.run(());
        assert_eq!(runs.get(), 5);
    }

    #[rstest]
    fn map_applies_after_run() {
        let delay = Delay::new(|x: i32| x + 1).map(|x| x.to_string());
        assert_eq!(delay.run(41), "42");
    }

    #[rstest]
    fn clone_shares_the_function() {
        let delay = Delay::new(|x: i32| x * 3);
        let cloned = delay.clone();
        assert!(Rc::ptr_eq(&delay.shared(), &cloned.shared()));
        assert_eq!(cloned.run(2), 6);
    }

    #[rstest]
    fn identity_returns_its_input() {
        let identity: Delay<&str, &str> = Delay::identity();
        assert_eq!(identity.run("same"), "same");
    }

    #[rstest]
    fn display_and_debug_are_opaque() {
        let delay = Delay::new(|x: i32| x);
        assert_eq!(format!("{delay}"), "<Delay>");
        assert_eq!(format!("{delay:?}"), "Delay { .. }");
    }
}
