//! Maybe - a value that may be absent.
//!
//! `Maybe<M>` is either *just* a value of type `M` or *nothing*. Absence is
//! a distinguished state, but the fallback accessors (`or_else`,
//! `or_else_get`, `or_else_throw`) also fall back when a present payload is
//! falsy according to [`Truthy`]:
//!
//! ```rust
//! use kinder::control::Maybe;
//!
//! assert_eq!(Maybe::of(5).or_else(7), 5);
//! assert_eq!(Maybe::nothing().or_else(7), 7);
//! // A present zero is falsy and falls back as well.
//! assert_eq!(Maybe::of(0).or_else(7), 7);
//! // Equality still tells the two apart.
//! assert_ne!(Maybe::of(0), Maybe::nothing());
//! ```
//!
//! # Laws
//!
//! - Left Identity: `Maybe::of(a).bind(f) == f(a)`
//! - Right Identity: `m.bind(Maybe::of) == m`
//! - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! # Examples
//!
//! ```rust
//! use kinder::control::Maybe;
//!
//! let square = Maybe::wraps(|x: i32| x.checked_mul(x));
//! let stringify = Maybe::wraps(|x: i32| Some(x.to_string()));
//!
//! let result = Maybe::of(5).bind(&square).bind(&stringify);
//! assert_eq!(result, Maybe::of("25".to_string()));
//!
//! let overflow = Maybe::of(i32::MAX).bind(&square).bind(&stringify);
//! assert!(overflow.is_nothing());
//! ```

use std::fmt;

use crate::typeclass::{Functor, Monoid, Semigroup, Truthy, TypeConstructor};

/// An optional value whose only constructors are [`Maybe::of`],
/// [`Maybe::just`], [`Maybe::nothing`] and the conversions from `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Maybe<M> {
    value: Option<M>,
}

impl<M> Maybe<M> {
    /// Wraps a present value.
    #[inline]
    pub const fn of(value: M) -> Self {
        Self { value: Some(value) }
    }

    /// Wraps a present value. Alias of [`Maybe::of`].
    #[inline]
    pub const fn just(value: M) -> Self {
        Self::of(value)
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self { value: None }
    }

    /// Present iff `value` is `Some`.
    #[inline]
    pub fn from_option(value: Option<M>) -> Self {
        Self { value }
    }

    /// Runs `function` now, keeping its value and discarding its error.
    ///
    /// This is best-effort extraction: an `Err` becomes nothing and is only
    /// reported through a `debug` trace event.
    ///
    /// ```rust
    /// use kinder::control::Maybe;
    ///
    /// assert_eq!(Maybe::call(|| "5".parse::<i32>()), Maybe::of(5));
    /// assert!(Maybe::call(|| "five".parse::<i32>()).is_nothing());
    /// ```
    pub fn call<E, F>(function: F) -> Self
    where
        F: FnOnce() -> Result<M, E>,
        E: fmt::Debug,
    {
        match function() {
            Ok(value) => Self::of(value),
            Err(error) => {
                tracing::debug!(?error, "Maybe::call discarded an error");
                Self::nothing()
            }
        }
    }

    /// Lifts a function returning `Option` into one returning `Maybe`.
    ///
    /// Several parameters are passed as a tuple.
    ///
    /// ```rust
    /// use kinder::control::Maybe;
    ///
    /// let add = Maybe::wraps(|(a, b): (i32, i32)| a.checked_add(b));
    /// assert_eq!(add((1, 2)), Maybe::of(3));
    /// assert!(add((i32::MAX, 1)).is_nothing());
    /// ```
    pub fn wraps<P, F>(function: F) -> impl Fn(P) -> Self
    where
        F: Fn(P) -> Option<M>,
    {
        move |arguments| Self::from_option(function(arguments))
    }

    /// Returns a reference to the value if present.
    #[inline]
    pub const fn get(&self) -> Option<&M> {
        self.value.as_ref()
    }

    /// Converts into the underlying `Option`.
    #[inline]
    pub fn into_option(self) -> Option<M> {
        self.value
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        self.value.is_some()
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&M> {
        Maybe {
            value: self.value.as_ref(),
        }
    }

    /// Transforms a present value. Nothing stays nothing.
    ///
    /// Panics raised by `function` are not caught.
    ///
    /// ```rust
    /// use kinder::control::Maybe;
    ///
    /// let chained = Maybe::of(5).map(|x| x.to_string()).map(|s| s.len());
    /// assert_eq!(chained, Maybe::of(1));
    /// ```
    pub fn map<N, F>(self, function: F) -> Maybe<N>
    where
        F: FnOnce(M) -> N,
    {
        match self.value {
            Some(value) => Maybe::of(function(value)),
            None => Maybe::nothing(),
        }
    }

    /// Chains a computation that itself may produce nothing, flattening the
    /// result.
    pub fn bind<N, F>(self, function: F) -> Maybe<N>
    where
        F: FnOnce(M) -> Maybe<N>,
    {
        match self.value {
            Some(value) => function(value),
            None => Maybe::nothing(),
        }
    }

    /// Combines two present values with `operator`; nothing if either side
    /// is absent.
    ///
    /// ```rust
    /// use kinder::control::Maybe;
    ///
    /// let combined = Maybe::of(5).combined(Maybe::of("x"), |n, s| s.repeat(n));
    /// assert_eq!(combined, Maybe::of("xxxxx".to_string()));
    /// assert!(Maybe::of(5).combined(Maybe::<i32>::nothing(), |a, b| a * b).is_nothing());
    /// ```
    pub fn combined<N, L, F>(self, other: Maybe<N>, operator: F) -> Maybe<L>
    where
        F: FnOnce(M, N) -> L,
    {
        match (self.value, other.value) {
            (Some(left), Some(right)) => Maybe::of(operator(left, right)),
            _ => Maybe::nothing(),
        }
    }
}

impl<M: Truthy> Maybe<M> {
    fn into_truthy(self) -> Option<M> {
        self.value.filter(Truthy::is_truthy)
    }

    /// Returns the payload if it is truthy, `fallback` otherwise.
    pub fn or_else(self, fallback: M) -> M {
        self.into_truthy().unwrap_or(fallback)
    }

    /// Returns the payload if it is truthy, otherwise the value produced by
    /// `producer`.
    ///
    /// `producer` is not called when a truthy value is present.
    pub fn or_else_get<F>(self, producer: F) -> M
    where
        F: FnOnce() -> M,
    {
        self.into_truthy().unwrap_or_else(producer)
    }

    /// Returns the payload if it is truthy, `Err(error)` otherwise.
    ///
    /// ```rust
    /// use kinder::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(5).or_else_throw("missing"), Ok(5));
    /// assert_eq!(Maybe::<i32>::nothing().or_else_throw("missing"), Err("missing"));
    /// ```
    pub fn or_else_throw<E>(self, error: E) -> Result<M, E> {
        self.into_truthy().ok_or(error)
    }

    /// Like [`Maybe::or_else_throw`], with the error built from its kind.
    ///
    /// ```rust
    /// use kinder::control::{Maybe, Unidentified};
    ///
    /// let missing = Maybe::<i32>::nothing().or_else_throw_default::<Unidentified>();
    /// assert_eq!(missing, Err(Unidentified));
    /// ```
    pub fn or_else_throw_default<E>(self) -> Result<M, E>
    where
        E: Default,
    {
        self.into_truthy().ok_or_else(E::default)
    }
}

impl<M> Default for Maybe<M> {
    fn default() -> Self {
        Self::nothing()
    }
}

impl<M> From<Option<M>> for Maybe<M> {
    fn from(value: Option<M>) -> Self {
        Self::from_option(value)
    }
}

impl<M> From<Maybe<M>> for Option<M> {
    fn from(maybe: Maybe<M>) -> Self {
        maybe.value
    }
}

impl<M: fmt::Display> fmt::Display for Maybe<M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(formatter, "Just({value})"),
            None => write!(formatter, "Nothing"),
        }
    }
}

impl<M> Truthy for Maybe<M> {
    fn is_truthy(&self) -> bool {
        self.is_just()
    }
}

impl<M> TypeConstructor for Maybe<M> {
    type Inner = M;
    type WithType<B> = Maybe<B>;
}

impl<M> Functor for Maybe<M> {
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(M) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&M) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<M> Semigroup for Maybe<M> {
    type Payload = M;

    fn combined<F>(self, other: Self, operator: F) -> Self
    where
        F: FnOnce(M, M) -> M,
    {
        Self::combined(self, other, operator)
    }
}

impl<M> Monoid for Maybe<M> {
    fn identity() -> Self {
        Self::nothing()
    }
}
