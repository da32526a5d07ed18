//! Context - a computation waiting for a context value.
//!
//! A `Context<C, T>` wraps a function `C -> T`. Nothing runs until the
//! `Context` is [`call`](Context::call)ed with a context; that call *is* the
//! execution and returns `T` directly.
//!
//! Two ways of composing:
//!
//! - [`bind`](Context::bind) runs two computations against the *same*
//!   context, in order, keeping the second result.
//! - [`pipe`](Context::pipe) feeds the first computation's result to the
//!   second as *its* context (function composition).
//!
//! # Laws
//!
//! - Pipe Composition: `a.pipe(b).call(c) == b.call(a.call(c))`
//! - Pipe Identity: `Context::ask().pipe(a) == a == a.pipe(Context::ask())`
//! - Pipe Associativity: `a.pipe(b).pipe(c) == a.pipe(b.pipe(c))`
//!
//! # Examples
//!
//! ```rust
//! use kinder::effect::Context;
//!
//! let add = Context::wraps(|amount: i32| move |x: i32| x + amount);
//! let multiply = Context::wraps(|factor: i32| move |x: i32| x * factor);
//! let to_text = Context::new(|x: i32| x.to_string());
//!
//! assert_eq!(add(1).call(1), 2);
//! assert_eq!(multiply(3).pipe(add(1)).call(2), 7);
//! assert_eq!(multiply(3).pipe(to_text).call(3), "9");
//! ```

use std::fmt;
use std::rc::Rc;

/// A computation producing `T` once given a context of type `C`.
pub struct Context<C, T>
where
    C: 'static,
    T: 'static,
{
    function: Rc<dyn Fn(C) -> T>,
}

static_assertions::assert_not_impl_any!(Context<i32, i32>: Send, Sync);

impl<C, T> Context<C, T>
where
    C: 'static,
    T: 'static,
{
    /// Wraps `function` without calling it.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(C) -> T + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Runs the computation with `context`.
    ///
    /// A `Context` can be called any number of times.
    pub fn call(&self, context: C) -> T {
        (self.function)(context)
    }

    /// Lifts a function that returns a context consumer into one returning
    /// a `Context`.
    ///
    /// Several parameters are passed as a tuple.
    ///
    /// ```rust
    /// use kinder::effect::Context;
    ///
    /// let offset = Context::wraps(|(a, b): (i32, i32)| {
    ///     let sum = a + b;
    ///     move |x: i32| x + sum
    /// });
    /// assert_eq!(offset((1, 2)).call(1), 4);
    /// ```
    pub fn wraps<P, G, F>(function: F) -> impl Fn(P) -> Self
    where
        F: Fn(P) -> G,
        G: Fn(C) -> T + 'static,
    {
        move |arguments| Self::new(function(arguments))
    }

    /// Creates a `Context` that ignores its context.
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Transforms the result.
    pub fn map<N, F>(self, function: F) -> Context<C, N>
    where
        F: Fn(T) -> N + 'static,
        N: 'static,
    {
        let original_function = self.function;
        Context::new(move |context| function(original_function(context)))
    }

    /// Runs `self` for its effects, then `other` with the same context,
    /// returning `other`'s result.
    ///
    /// `self` is fully evaluated before `other` starts.
    ///
    /// ```rust
    /// use kinder::effect::Context;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let log = Rc::new(Cell::new(0));
    /// let observed = Rc::clone(&log);
    /// let record = Context::new(move |x: i32| observed.set(observed.get() + x));
    /// let square = Context::new(|x: i32| x * x);
    ///
    /// assert_eq!(record.bind(square).call(4), 16);
    /// assert_eq!(log.get(), 4);
    /// ```
    pub fn bind<N>(self, other: Context<C, N>) -> Context<C, N>
    where
        C: Clone,
        N: 'static,
    {
        let first = self.function;
        let second = other.function;
        Context::new(move |context: C| {
            first(context.clone());
            second(context)
        })
    }

    /// Feeds the result of `self` to `other` as its context.
    pub fn pipe<N>(self, other: Context<T, N>) -> Context<C, N>
    where
        N: 'static,
    {
        let first = self.function;
        let second = other.function;
        Context::new(move |context| second(first(context)))
    }
}

impl<C> Context<C, C>
where
    C: 'static,
{
    /// The context itself; the identity of [`pipe`](Context::pipe).
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|context| context)
    }
}

impl<C, T> Clone for Context<C, T>
where
    C: 'static,
    T: 'static,
{
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<C, T> fmt::Debug for Context<C, T>
where
    C: 'static,
    T: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Context").finish_non_exhaustive()
    }
}

impl<C, T> fmt::Display for Context<C, T>
where
    C: 'static,
    T: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Context>")
    }
}
