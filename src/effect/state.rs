//! State - stateful computation with explicit state threading.
//!
//! A `State<S, A, C>` encapsulates a function `S -> (A, C)`: given an input
//! state `S` it produces a result `A` and a next state `C`. The next-state
//! type defaults to `S`, but may differ, so a chain can change the shape of
//! its state as it goes. The wrapper itself keeps no mutable state; every
//! state value flows through arguments and return values.
//!
//! # Laws
//!
//! - Left Identity: `State::of(a).bind(f) == f(a)`
//! - Right Identity: `m.bind(State::of) == m`
//! - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! # Examples
//!
//! ```rust
//! use kinder::effect::State;
//!
//! fn deposit(amount: i32) -> State<i32, String> {
//!     State::new(move |balance| (format!("{amount} deposit"), balance + amount))
//! }
//!
//! fn withdraw(amount: i32) -> State<i32, String> {
//!     State::new(move |balance| {
//!         let next = if balance >= amount { balance - amount } else { balance };
//!         (format!("{amount} withdraw"), next)
//!     })
//! }
//!
//! let session = deposit(500)
//!     .bind(|_| withdraw(200))
//!     .bind(|_| withdraw(1500));
//!
//! let (label, balance) = session.run(1000);
//! assert_eq!(label, "1500 withdraw");
//! assert_eq!(balance, 1300);
//! ```

use std::fmt;
use std::rc::Rc;

/// A computation that turns an input state `S` into a result `A` and a next
/// state `C`.
///
/// # Type Parameters
///
/// - `S`: The input state type
/// - `A`: The result type
/// - `C`: The next state type (defaults to `S`)
pub struct State<S, A, C = S>
where
    S: 'static,
    A: 'static,
    C: 'static,
{
    /// The wrapped state transition function.
    /// Uses Rc to allow cloning of the State for `bind`.
    run_function: Rc<dyn Fn(S) -> (A, C)>,
}

static_assertions::assert_not_impl_any!(State<i32, i32>: Send, Sync);

impl<S, A, C> State<S, A, C>
where
    S: 'static,
    A: 'static,
    C: 'static,
{
    /// Creates a new State from a state transition function.
    ///
    /// The function is not called until [`run`](State::run).
    ///
    /// ```rust
    /// use kinder::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.run(10), (20, 11));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, C) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Lifts a function that returns a state transition into one returning
    /// a `State`.
    ///
    /// ```rust
    /// use kinder::effect::State;
    ///
    /// let deposit = State::wraps(|amount: i32| {
    ///     move |balance: i32| (format!("{amount} deposit"), balance + amount)
    /// });
    /// assert_eq!(deposit(500).run(1000), ("500 deposit".to_string(), 1500));
    /// ```
    pub fn wraps<P, G, F>(function: F) -> impl Fn(P) -> Self
    where
        F: Fn(P) -> G,
        G: Fn(S) -> (A, C) + 'static,
    {
        move |arguments| Self::new(function(arguments))
    }

    /// Runs the State computation with the given initial state.
    ///
    /// Returns both the result and the next state.
    pub fn run(&self, initial_state: S) -> (A, C) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and returns only the result.
    pub fn eval(&self, initial_state: S) -> A {
        let (result, _) = self.run(initial_state);
        result
    }

    /// Runs the computation and returns only the next state.
    pub fn exec(&self, initial_state: S) -> C {
        let (_, final_state) = self.run(initial_state);
        final_state
    }

    /// Transforms the result, leaving the state untouched.
    pub fn map<B, F>(self, function: F) -> State<S, B, C>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, next_state) = (original_function)(state);
            (function(result), next_state)
        })
    }

    /// Chains a computation built from this one's result, threading the
    /// next state into it.
    ///
    /// The state type may change along the chain:
    ///
    /// ```rust
    /// use kinder::effect::State;
    ///
    /// let square = |_| State::new(|n: i32| ("squared", n * n));
    /// let stringify = |_| State::new(|n: i32| ("stringified", n.to_string()));
    ///
    /// let chain = State::<i32, &str>::of("initialized").bind(square).bind(stringify);
    /// assert_eq!(chain.run(5), ("stringified", "25".to_string()));
    /// ```
    pub fn bind<N, B, F>(self, function: F) -> State<S, N, B>
    where
        F: Fn(A) -> State<C, N, B> + 'static,
        N: 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, intermediate_state) = (original_function)(state);
            function(result).run(intermediate_state)
        })
    }

    /// Sequences `next` after this computation, discarding this result.
    #[must_use]
    pub fn then<N, B>(self, next: State<C, N, B>) -> State<S, N, B>
    where
        N: 'static,
        B: 'static,
    {
        self.bind(move |_| next.clone())
    }
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a State that returns `value` and leaves the state untouched.
    ///
    /// ```rust
    /// use kinder::effect::State;
    ///
    /// let state: State<i32, &str> = State::of("constant");
    /// assert_eq!(state.run(42), ("constant", 42));
    /// ```
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Returns the current state as the result.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Replaces the state with `new_state`.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Applies `modifier` to the state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A, C> Clone for State<S, A, C>
where
    S: 'static,
    A: 'static,
    C: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

impl<S, A, C> fmt::Debug for State<S, A, C>
where
    S: 'static,
    A: 'static,
    C: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("State").finish_non_exhaustive()
    }
}

impl<S, A, C> fmt::Display for State<S, A, C>
where
    S: 'static,
    A: 'static,
    C: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<State>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_display_state() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        assert_eq!(format!("{state}"), "<State>");
        assert_eq!(format!("{state:?}"), "State { .. }");
    }

    #[rstest]
    fn state_new_does_not_run() {
        let runs = Rc::new(Cell::new(0));
        let observed = Rc::clone(&runs);
        let state: State<i32, ()> = State::new(move |s| {
            observed.set(observed.get() + 1);
            ((), s)
        });
        assert_eq!(runs.get(), 0);
        state.run(0);
        assert_eq!(runs.get(), 1);
    }

    #[rstest]
    fn state_of_does_not_modify_state() {
        let state: State<i32, &str> = State::of("constant");
        assert_eq!(state.run(42), ("constant", 42));
    }

    #[rstest]
    fn state_eval_and_exec_split_run() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        assert_eq!(state.eval(10), 20);
        assert_eq!(state.exec(10), 11);
    }

    #[rstest]
    fn state_map_keeps_state() {
        let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
        assert_eq!(state.map(|x| x.to_string()).run(1), ("1".to_string(), 2));
    }

    #[rstest]
    fn state_get_put_modify() {
        let computation = State::<i32, ()>::modify(|s| s + 1)
            .then(State::modify(|s| s * 10))
            .then(State::get());
        assert_eq!(computation.run(1), (20, 20));

        let replaced = State::put(7).then(State::<i32, i32>::get());
        assert_eq!(replaced.run(0), (7, 7));
    }

    #[rstest]
    fn state_bind_changes_state_type() {
        let count_chars = State::new(|text: String| (text.len(), text.chars().count()));
        let describe = count_chars.bind(|bytes| State::new(move |chars: usize| (bytes == chars, chars > 3)));
        assert_eq!(describe.run("hello".to_string()), (true, true));
    }
}
