//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For an operator `op` compatible with the chosen identity:
//!
//! ## Identity
//!
//! ```text
//! T::identity().combined(a, op) == a.combined(T::identity(), op)
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! a.combined(b, op).combined(c, op) == a.combined(b.combined(c, op), op)
//! ```
//!
//! Each wrapper picks its own identity. For `Maybe` and `Result` it is the
//! short-circuiting variant, which absorbs rather than disappears, so the
//! identity law holds in its symmetric form only. `Delay<T, T>` uses the
//! identity callable and satisfies the law outright under composition.

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use kinder::control::Maybe;
/// use kinder::typeclass::{Monoid, Semigroup};
///
/// let left = Semigroup::combined(Maybe::identity(), Maybe::of(7), |x, y| x - y);
/// let right = Semigroup::combined(Maybe::of(7), Maybe::identity(), |x, y| x - y);
/// assert_eq!(left, right);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn identity() -> Self;

    /// Folds all elements left to right with `combined`, starting from
    /// [`identity`](Monoid::identity).
    ///
    /// An empty iterator yields the identity. For wrappers whose identity
    /// absorbs (`Maybe`, `Result`) the result is always the identity; use
    /// [`Semigroup::reduce_all`] there.
    ///
    /// ```rust
    /// use kinder::effect::{Delay, DelayedFn};
    /// use kinder::typeclass::Monoid;
    /// use std::rc::Rc;
    ///
    /// fn and_then(first: DelayedFn<i32, i32>, second: DelayedFn<i32, i32>) -> DelayedFn<i32, i32> {
    ///     Rc::new(move |x| second(first(x)))
    /// }
    ///
    /// let steps = vec![Delay::new(|x: i32| x + 1), Delay::new(|x: i32| x * 10)];
    /// assert_eq!(Delay::combine_all(steps, and_then).run(4), 50);
    /// assert_eq!(Delay::<i32, i32>::combine_all(Vec::new(), and_then).run(4), 4);
    /// ```
    fn combine_all<I, F>(iterator: I, mut operator: F) -> Self
    where
        I: IntoIterator<Item = Self>,
        F: FnMut(Self::Payload, Self::Payload) -> Self::Payload,
    {
        iterator
            .into_iter()
            .fold(Self::identity(), |accumulator, element| {
                accumulator.combined(element, &mut operator)
            })
    }
}
